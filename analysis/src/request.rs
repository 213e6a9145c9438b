use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Shorts,
}

impl Platform {
    /// Only the exact lowercase value `"shorts"` selects Shorts.
    pub fn normalize(raw: &str) -> Self {
        if raw == "shorts" {
            Platform::Shorts
        } else {
            Platform::Youtube
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Shorts => "shorts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Shorts => "YouTube Shorts",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![Platform::Youtube, Platform::Shorts]
    }
}

/// Indonesian time zones the posting time is recommended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    #[serde(rename = "WIB")]
    Wib,
    #[serde(rename = "WITA")]
    Wita,
    #[serde(rename = "WIT")]
    Wit,
}

impl Region {
    pub fn key(&self) -> &'static str {
        match self {
            Region::Wib => "WIB",
            Region::Wita => "WITA",
            Region::Wit => "WIT",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "WIB" => Some(Region::Wib),
            "WITA" => Some(Region::Wita),
            "WIT" => Some(Region::Wit),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![Region::Wib, Region::Wita, Region::Wit]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub topic: String,
    pub keywords: Vec<String>,
    pub niche: String,
    pub audience: String,
    pub platform: Platform,
    pub region: Region,
}

/// Whitespace as browsers trim form input: Unicode white space plus the
/// byte order mark, but not NEL.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Splits a comma separated keyword string, dropping blank entries.
/// Order and duplicates are kept.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim_matches(is_form_whitespace))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the outbound request from raw form values. Never fails; empty
/// fields are a valid request.
pub fn build(
    topic: &str,
    raw_keywords: &str,
    niche: &str,
    audience: &str,
    platform: &str,
    region: Region,
) -> AnalysisRequest {
    AnalysisRequest {
        topic: topic.to_string(),
        keywords: split_keywords(raw_keywords),
        niche: niche.to_string(),
        audience: audience.to_string(),
        platform: Platform::normalize(platform),
        region,
    }
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub topic: String,
    pub keywords: String,
    pub niche: String,
    pub audience: String,
    pub platform: String,
    pub region: Region,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            topic: "Optimasi judul YouTube agar CTR naik".to_string(),
            keywords: "judul youtube, CTR, thumbnail".to_string(),
            niche: "content creator".to_string(),
            audience: "pemula".to_string(),
            platform: Platform::Youtube.key().to_string(),
            region: Region::Wib,
        }
    }
}

impl FormInput {
    pub fn to_request(&self) -> AnalysisRequest {
        build(
            &self.topic,
            &self.keywords,
            &self.niche,
            &self.audience,
            &self.platform,
            self.region,
        )
    }
}
