use crate::criteria::CriteriaSet;
use crate::error::AnalyzeError;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Body as the analysis service sends it. `criteria` may be partial or
/// missing and `post_time` may be absent or null.
#[derive(Debug, Deserialize)]
struct RawAnalysisReport {
    #[serde(deserialize_with = "deserialize_score")]
    score: i64,
    hook: String,
    seo_title: String,
    angle: String,
    cta: String,
    description: String,
    hashtags: Vec<String>,
    #[serde(default)]
    post_time: Option<String>,
    #[serde(default)]
    criteria: Option<Map<String, Value>>,
}

/// Accepts any JSON number. Fractional scores are rounded to the nearest
/// integer; range is not checked here.
fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(score) = number.as_i64() {
        return Ok(score);
    }
    match number.as_f64() {
        Some(score) if score.is_finite() && score.abs() < i64::MAX as f64 => {
            Ok(score.round() as i64)
        }
        _ => Err(D::Error::custom(format!("score {number} is not representable"))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub score: i64,
    pub hook: String,
    pub seo_title: String,
    pub angle: String,
    pub cta: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub post_time: String,
    pub criteria: CriteriaSet,
}

impl AnalysisReport {
    /// Score as shown to the user. The stored value is left untouched.
    pub fn display_score(&self) -> u8 {
        self.score.clamp(0, 100) as u8
    }
}

impl From<RawAnalysisReport> for AnalysisReport {
    fn from(raw: RawAnalysisReport) -> Self {
        let criteria = raw
            .criteria
            .as_ref()
            .map(CriteriaSet::from_raw)
            .unwrap_or_default();

        Self {
            score: raw.score,
            hook: raw.hook,
            seo_title: raw.seo_title,
            angle: raw.angle,
            cta: raw.cta,
            description: raw.description,
            hashtags: raw.hashtags,
            post_time: raw.post_time.unwrap_or_default(),
            criteria,
        }
    }
}

pub fn parse_report(body: &str) -> Result<AnalysisReport, AnalyzeError> {
    let raw: RawAnalysisReport = serde_json::from_str(body)?;
    Ok(raw.into())
}

/// Maps a completed HTTP exchange to a report. Non-success statuses fail
/// before the body is looked at.
pub fn interpret(status: u16, body: &str) -> Result<AnalysisReport, AnalyzeError> {
    if !(200..300).contains(&status) {
        return Err(AnalyzeError::Status {
            status,
            body: body.to_string(),
        });
    }
    parse_report(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;
    use serde_json::json;

    fn payload(score: i64, criteria: Value) -> String {
        json!({
            "score": score,
            "hook": "Judul kamu sepi klik? Ini tiga trik yang jarang dipakai",
            "seo_title": "Judul YouTube: 3 Trik CTR Naik",
            "angle": "Bedah 3 judul channel kecil, sebelum dan sesudah",
            "cta": "Subscribe untuk tips judul tiap minggu",
            "description": "Pelajari cara menulis judul YouTube yang menaikkan CTR dengan contoh nyata.",
            "hashtags": ["#youtube", "#ctr", "#judul"],
            "post_time": "19:00 WIB",
            "criteria": criteria,
        })
        .to_string()
    }

    #[test]
    fn passes_fields_through() {
        let report = interpret(200, &payload(87, json!({ "cta_jelas": true }))).unwrap();
        assert_eq!(report.score, 87);
        assert_eq!(report.display_score(), 87);
        assert_eq!(report.hashtags.len(), 3);
        assert_eq!(report.post_time, "19:00 WIB");
        assert!(report.criteria.get(Criterion::ClearCta));
        assert!(!report.criteria.get(Criterion::HookLength));
    }

    #[test]
    fn out_of_range_score_is_clamped_for_display_only() {
        let report = interpret(200, &payload(140, json!({}))).unwrap();
        assert_eq!(report.score, 140);
        assert_eq!(report.display_score(), 100);

        let report = interpret(200, &payload(-5, json!({}))).unwrap();
        assert_eq!(report.score, -5);
        assert_eq!(report.display_score(), 0);
    }

    #[test]
    fn fractional_score_is_accepted() {
        let body = payload(0, json!({})).replace("\"score\":0", "\"score\":87.0");
        let report = interpret(200, &body).unwrap();
        assert_eq!(report.score, 87);

        let body = payload(0, json!({})).replace("\"score\":0", "\"score\":140.6");
        let report = interpret(200, &body).unwrap();
        assert_eq!(report.score, 141);
        assert_eq!(report.display_score(), 100);
    }

    #[test]
    fn score_beyond_integer_range_is_a_parse_error() {
        let body = payload(0, json!({})).replace("\"score\":0", "\"score\":1e300");
        assert!(matches!(interpret(200, &body), Err(AnalyzeError::Parse(_))));
    }

    #[test]
    fn empty_criteria_object_defaults_all_to_false() {
        let report = interpret(200, &payload(50, json!({}))).unwrap();
        assert_eq!(report.criteria.iter().count(), 7);
        assert_eq!(report.criteria.passed(), 0);
    }

    #[test]
    fn missing_or_null_criteria_defaults_all_to_false() {
        let report = interpret(200, &payload(50, Value::Null)).unwrap();
        assert_eq!(report.criteria, CriteriaSet::default());

        let mut body: Value = serde_json::from_str(&payload(50, json!({}))).unwrap();
        body.as_object_mut().unwrap().remove("criteria");
        let report = interpret(200, &body.to_string()).unwrap();
        assert_eq!(report.criteria.passed(), 0);
    }

    #[test]
    fn missing_post_time_reads_as_empty() {
        let mut body: Value = serde_json::from_str(&payload(50, json!({}))).unwrap();
        body.as_object_mut().unwrap().remove("post_time");
        let report = interpret(200, &body.to_string()).unwrap();
        assert_eq!(report.post_time, "");
    }

    #[test]
    fn non_success_status_is_rejected() {
        let err = interpret(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Status {
                status: 500,
                body: "Internal Server Error".into()
            }
        );
        assert!(interpret(404, &payload(87, json!({}))).is_err());
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            interpret(200, "not json"),
            Err(AnalyzeError::Parse(_))
        ));
        assert!(matches!(
            interpret(200, r#"{"score": 10}"#),
            Err(AnalyzeError::Parse(_))
        ));
        assert!(matches!(
            interpret(200, &payload(87, json!({})).replace("\"score\":87", "\"score\":\"87\"")),
            Err(AnalyzeError::Parse(_))
        ));
    }
}
