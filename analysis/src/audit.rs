//! Recomputes the criteria that can be measured from the report fields, to
//! spot a service whose verdicts disagree with the criteria contract. The
//! report itself always keeps the service's verdicts.

use crate::criteria::{CriteriaSet, Criterion};
use crate::report::AnalysisReport;
use crate::request::AnalysisRequest;

pub const HOOK_WORDS: (usize, usize) = (6, 16);
pub const HASHTAGS: (usize, usize) = (3, 10);
pub const DESCRIPTION_CHARS: (usize, usize) = (80, 220);

fn within((min, max): (usize, usize), value: usize) -> bool {
    (min..=max).contains(&value)
}

pub fn hook_length_ok(hook: &str) -> bool {
    within(HOOK_WORDS, hook.split_whitespace().count())
}

/// Case-insensitive substring match against any submitted keyword.
pub fn title_has_keyword(title: &str, keywords: &[String]) -> bool {
    let title = title.to_lowercase();
    keywords
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

pub fn hashtag_count_ok(hashtags: &[String]) -> bool {
    within(HASHTAGS, hashtags.len())
}

/// Length in characters, not bytes.
pub fn description_length_ok(description: &str) -> bool {
    within(DESCRIPTION_CHARS, description.chars().count())
}

pub fn post_time_present(post_time: &str) -> bool {
    !post_time.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    measured: Vec<(Criterion, Option<bool>)>,
}

impl Audit {
    /// Local verdict, `None` for criteria only the service can judge.
    pub fn verdict(&self, criterion: Criterion) -> Option<bool> {
        self.measured
            .iter()
            .find(|(c, _)| *c == criterion)
            .and_then(|(_, verdict)| *verdict)
    }

    pub fn mismatches(&self, reported: &CriteriaSet) -> Vec<Criterion> {
        self.measured
            .iter()
            .filter_map(|(criterion, verdict)| match verdict {
                Some(local) if *local != reported.get(*criterion) => Some(*criterion),
                _ => None,
            })
            .collect()
    }
}

fn measure(criterion: Criterion, request: &AnalysisRequest, report: &AnalysisReport) -> bool {
    match criterion {
        Criterion::HookLength => hook_length_ok(&report.hook),
        Criterion::TitleHasKeyword => title_has_keyword(&report.seo_title, &request.keywords),
        Criterion::HashtagCount => hashtag_count_ok(&report.hashtags),
        Criterion::DescriptionLength => description_length_ok(&report.description),
        Criterion::PostTimePresent => post_time_present(&report.post_time),
        // never reached, filtered by is_measurable
        Criterion::SpecificAngle | Criterion::ClearCta => false,
    }
}

pub fn evaluate(request: &AnalysisRequest, report: &AnalysisReport) -> Audit {
    let measured = Criterion::ALL
        .into_iter()
        .map(|criterion| {
            let verdict = criterion
                .is_measurable()
                .then(|| measure(criterion, request, report));
            (criterion, verdict)
        })
        .collect();

    Audit { measured }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{build, Region};

    fn tags(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("#tag{i}")).collect()
    }

    #[test]
    fn hashtag_bounds_are_inclusive() {
        assert!(!hashtag_count_ok(&tags(2)));
        assert!(hashtag_count_ok(&tags(3)));
        assert!(hashtag_count_ok(&tags(10)));
        assert!(!hashtag_count_ok(&tags(11)));
    }

    #[test]
    fn description_bounds_are_inclusive() {
        assert!(!description_length_ok(&"a".repeat(79)));
        assert!(description_length_ok(&"a".repeat(80)));
        assert!(description_length_ok(&"a".repeat(220)));
        assert!(!description_length_ok(&"a".repeat(221)));
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        // 80 two-byte characters
        assert!(description_length_ok(&"é".repeat(80)));
        assert!(!description_length_ok(&"é".repeat(221)));
    }

    #[test]
    fn hook_counts_words() {
        assert!(!hook_length_ok("satu dua tiga empat lima"));
        assert!(hook_length_ok("satu dua tiga empat lima enam"));
        assert!(hook_length_ok(&vec!["kata"; 16].join(" ")));
        assert!(!hook_length_ok(&vec!["kata"; 17].join(" ")));
        assert!(hook_length_ok("  satu   dua tiga\tempat lima enam  "));
    }

    #[test]
    fn title_keyword_match_ignores_case() {
        let keywords = vec!["youtube seo".to_string(), "CTR".to_string()];
        assert!(title_has_keyword("Panduan YouTube SEO 2024", &keywords));
        assert!(title_has_keyword("cara naikkan ctr", &keywords));
        assert!(!title_has_keyword("Tips thumbnail", &keywords));
        assert!(!title_has_keyword("Apa saja", &[]));
    }

    #[test]
    fn judged_criteria_have_no_local_verdict() {
        let request = build("", "", "", "", "", Region::Wib);
        let report = AnalysisReport {
            score: 0,
            hook: String::new(),
            seo_title: String::new(),
            angle: "Demo layar langkah demi langkah".to_string(),
            cta: "Subscribe dan komentar".to_string(),
            description: String::new(),
            hashtags: vec![],
            post_time: String::new(),
            criteria: CriteriaSet::default(),
        };
        let audit = evaluate(&request, &report);
        for criterion in Criterion::ALL {
            assert_eq!(
                audit.verdict(criterion).is_some(),
                criterion.is_measurable(),
                "{}",
                criterion.key()
            );
        }
        assert_eq!(
            Criterion::ALL.iter().filter(|c| !c.is_measurable()).count(),
            2
        );
    }

    #[test]
    fn blank_post_time_fails() {
        assert!(post_time_present("19:00 WIB"));
        assert!(!post_time_present(""));
        assert!(!post_time_present("   "));
    }

    #[test]
    fn evaluate_leaves_judged_criteria_open_and_finds_mismatches() {
        let request = build("topik", "ctr", "", "", "youtube", Region::Wib);
        let mut criteria = CriteriaSet::default();
        criteria.set(Criterion::HashtagCount, true);
        criteria.set(Criterion::ClearCta, true);
        let report = AnalysisReport {
            score: 70,
            hook: "Satu trik kecil yang bikin CTR naik dua kali".to_string(),
            seo_title: "Trik CTR naik".to_string(),
            angle: String::new(),
            cta: String::new(),
            description: "pendek".to_string(),
            hashtags: tags(2),
            post_time: "20:00 WIB".to_string(),
            criteria,
        };

        let audit = evaluate(&request, &report);
        assert_eq!(audit.verdict(Criterion::SpecificAngle), None);
        assert_eq!(audit.verdict(Criterion::ClearCta), None);
        assert_eq!(audit.verdict(Criterion::HookLength), Some(true));
        assert_eq!(audit.verdict(Criterion::HashtagCount), Some(false));

        assert_eq!(
            audit.mismatches(&report.criteria),
            vec![
                Criterion::HookLength,
                Criterion::TitleHasKeyword,
                Criterion::HashtagCount,
                Criterion::PostTimePresent,
            ]
        );
    }
}
