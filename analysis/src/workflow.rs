use crate::error::AnalyzeError;
use crate::report::AnalysisReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Submitting,
    Success(AnalysisReport),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer submission started after this one; the outcome was dropped.
    Stale,
}

/// Submission state of one analyzer page. Each submission gets a fresh
/// `RequestId` and only the latest one may change the phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    phase: Phase,
    latest: u64,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            latest: 0,
        }
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission, dropping any previous report or error at once.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.phase = Phase::Submitting;
        log::debug!("analysis request {} submitting", self.latest);
        RequestId(self.latest)
    }

    pub fn resolve(
        &mut self,
        id: RequestId,
        outcome: Result<AnalysisReport, AnalyzeError>,
    ) -> Resolution {
        if id.0 != self.latest {
            log::info!(
                "discarding response of request {} superseded by {}",
                id.0,
                self.latest
            );
            return Resolution::Stale;
        }

        self.phase = match outcome {
            Ok(report) => {
                log::debug!("analysis request {} succeeded", id.0);
                Phase::Success(report)
            }
            Err(e) => {
                log::error!("analysis request {} failed: {e}", id.0);
                Phase::Failed(e.user_message().to_string())
            }
        };
        Resolution::Applied
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
