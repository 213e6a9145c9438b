//! Request normalization and report interpretation for the content
//! readiness analyzer.

pub mod audit;
pub mod config;
pub mod criteria;
pub mod error;
pub mod report;
pub mod request;
pub mod workflow;

pub use config::{log_level, parse_flag, Endpoints, DEFAULT_BACKEND_URL};
pub use criteria::{CriteriaSet, Criterion};
pub use error::{AnalyzeError, ConfigError, GENERIC_FAILURE};
pub use report::{interpret, parse_report, AnalysisReport};
pub use request::{build, split_keywords, AnalysisRequest, FormInput, Platform, Region};
pub use workflow::{Phase, RequestId, Resolution, Workflow};
