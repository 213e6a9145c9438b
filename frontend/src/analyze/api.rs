use crate::env_variable_utils::{is_debug_mode, ENDPOINTS};
use gloo_net::http::Request;
use konten_analysis::audit;
use konten_analysis::{interpret, AnalysisReport, AnalysisRequest, AnalyzeError};

pub async fn request_analysis(request: &AnalysisRequest) -> Result<AnalysisReport, AnalyzeError> {
    let url = ENDPOINTS.analyze();

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| AnalyzeError::Transport(format!("Request error: {e}")))?
        .send()
        .await
        .map_err(|e| AnalyzeError::Transport(format!("Network error: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AnalyzeError::Transport(format!("Failed to read body: {e}")))?;

    let report = interpret(status, &body)?;
    if is_debug_mode() {
        log_contract_mismatches(request, &report);
    }
    Ok(report)
}

fn log_contract_mismatches(request: &AnalysisRequest, report: &AnalysisReport) {
    let audit = audit::evaluate(request, report);
    for criterion in audit.mismatches(&report.criteria) {
        log::warn!(
            "service verdict for {} is {} but the report fields say otherwise",
            criterion.key(),
            report.criteria.get(criterion)
        );
    }
}

/// Reachability of the analysis service. Any success status counts.
pub async fn check_connection() -> Result<u16, String> {
    let url = ENDPOINTS.connection_check();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(response.status())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub fn handle_error(error: &AnalyzeError) {
    let kind = if error.is_transport() {
        "analysis service unreachable"
    } else {
        "unexpected analysis response"
    };
    web_sys::console::error_1(&format!("{kind}: {error}").into());
}
