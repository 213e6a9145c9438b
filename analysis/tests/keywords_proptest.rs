use konten_analysis::split_keywords;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn padding() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            ' ', '\t', '\n', '\r', '\u{A0}', '\u{FEFF}', '\u{2028}', '\u{3000}',
        ]),
        0..3,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn core() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9]([a-zA-Z0-9 ]{0,6}[a-zA-Z0-9])?",
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn keywords_are_the_non_blank_tokens_in_order(
        tokens in prop::collection::vec((padding(), core(), padding()), 0..8)
    ) {
        let raw = tokens
            .iter()
            .map(|(left, core, right)| format!("{left}{core}{right}"))
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<String> = tokens
            .iter()
            .map(|(_, core, _)| core.clone())
            .filter(|core| !core.is_empty())
            .collect();

        let keywords = split_keywords(&raw);
        for keyword in &keywords {
            prop_assert!(!keyword.trim().is_empty());
            prop_assert!(!keyword.starts_with('\u{FEFF}') && !keyword.ends_with('\u{FEFF}'), "keyword {:?} has leading/trailing U+FEFF", keyword);
        }
        prop_assert_eq!(keywords, expected);
    }
}
