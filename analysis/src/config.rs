use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const ANALYZE_PATH: &str = "api/analyze";
const CONNECTION_CHECK_PATH: &str = "test";

/// Routes of the analysis service, resolved against its base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason,
        };

        let url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Uses the configured base when it is valid, the loopback default
    /// otherwise.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.map(Self::new) {
            Some(Ok(endpoints)) => endpoints,
            Some(Err(e)) => {
                log::warn!("{e}, falling back to {DEFAULT_BACKEND_URL}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn analyze(&self) -> String {
        format!("{}/{ANALYZE_PATH}", self.base)
    }

    pub fn connection_check(&self) -> String {
        format!("{}/{CONNECTION_CHECK_PATH}", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// Reads a `true`/`false` flag. Missing or unparseable values are off.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(false)
}

/// Debug builds log workflow transitions and contract mismatches.
pub fn log_level(debug: bool) -> log::Level {
    if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
