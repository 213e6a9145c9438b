use serde_json::{Map, Value};

/// The fixed checklist of pass/fail criteria, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    HookLength,
    TitleHasKeyword,
    SpecificAngle,
    ClearCta,
    HashtagCount,
    DescriptionLength,
    PostTimePresent,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::HookLength,
        Criterion::TitleHasKeyword,
        Criterion::SpecificAngle,
        Criterion::ClearCta,
        Criterion::HashtagCount,
        Criterion::DescriptionLength,
        Criterion::PostTimePresent,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Criterion::HookLength => "hook_6_16_kata",
            Criterion::TitleHasKeyword => "judul_mengandung_kata_kunci",
            Criterion::SpecificAngle => "angle_spesifik",
            Criterion::ClearCta => "cta_jelas",
            Criterion::HashtagCount => "hashtag_3_10",
            Criterion::DescriptionLength => "deskripsi_80_220",
            Criterion::PostTimePresent => "ada_rekomendasi_jam",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::HookLength => "Hook 6–16 kata",
            Criterion::TitleHasKeyword => "Judul mengandung salah satu kata kunci",
            Criterion::SpecificAngle => "Angle spesifik & jelas eksekusinya",
            Criterion::ClearCta => "CTA jelas (ajak subscribe/ikuti/simpan/komentar)",
            Criterion::HashtagCount => "3–10 hashtag relevan",
            Criterion::DescriptionLength => "Deskripsi 80–220 karakter",
            Criterion::PostTimePresent => "Ada rekomendasi jam posting",
        }
    }

    /// Whether the verdict can be recomputed from the report fields.
    /// Angle specificity and CTA clarity are judged by the service.
    pub fn is_measurable(&self) -> bool {
        !matches!(self, Criterion::SpecificAngle | Criterion::ClearCta)
    }

    fn index(&self) -> usize {
        match self {
            Criterion::HookLength => 0,
            Criterion::TitleHasKeyword => 1,
            Criterion::SpecificAngle => 2,
            Criterion::ClearCta => 3,
            Criterion::HashtagCount => 4,
            Criterion::DescriptionLength => 5,
            Criterion::PostTimePresent => 6,
        }
    }
}

/// Verdicts for every criterion. Always fully populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaSet {
    verdicts: [bool; 7],
}

impl CriteriaSet {
    /// Looks up each known key in the raw payload. Absent keys, and values
    /// that are not a JSON `true`, count as failed. Unknown keys are ignored.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut set = CriteriaSet::default();
        for criterion in Criterion::ALL {
            let passed = matches!(raw.get(criterion.key()), Some(Value::Bool(true)));
            set.set(criterion, passed);
        }
        set
    }

    pub fn get(&self, criterion: Criterion) -> bool {
        self.verdicts[criterion.index()]
    }

    pub fn set(&mut self, criterion: Criterion, passed: bool) {
        self.verdicts[criterion.index()] = passed;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn passed(&self) -> usize {
        self.verdicts.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_payload_fails_every_criterion() {
        let set = CriteriaSet::from_raw(&Map::new());
        assert_eq!(set.iter().count(), 7);
        assert!(set.iter().all(|(_, passed)| !passed));
        assert_eq!(set.passed(), 0);
    }

    #[test]
    fn partial_payload_is_completed_with_failures() {
        let set = CriteriaSet::from_raw(&raw(json!({
            "hook_6_16_kata": true,
            "cta_jelas": true,
            "hashtag_3_10": false,
        })));
        assert!(set.get(Criterion::HookLength));
        assert!(set.get(Criterion::ClearCta));
        assert!(!set.get(Criterion::HashtagCount));
        assert!(!set.get(Criterion::PostTimePresent));
        assert_eq!(set.passed(), 2);
    }

    #[test]
    fn non_boolean_values_fail() {
        let set = CriteriaSet::from_raw(&raw(json!({
            "angle_spesifik": "true",
            "deskripsi_80_220": 1,
            "ada_rekomendasi_jam": null,
            "something_else": true,
        })));
        assert_eq!(set.passed(), 0);
    }

    #[test]
    fn keys_are_unique_and_ordered() {
        let keys: Vec<_> = Criterion::ALL.iter().map(Criterion::key).collect();
        assert_eq!(
            keys,
            vec![
                "hook_6_16_kata",
                "judul_mengandung_kata_kunci",
                "angle_spesifik",
                "cta_jelas",
                "hashtag_3_10",
                "deskripsi_80_220",
                "ada_rekomendasi_jam",
            ]
        );
        for (position, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), position);
        }
    }
}
