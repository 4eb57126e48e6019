//! Property tests for parsing the platform CLI's `ls --json` output.

use proptest::prelude::*;

use deploywatch::parse_deployment_list;

fn state() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BUILDING".to_string()),
        Just("READY".to_string()),
        Just("ERROR".to_string()),
        "[A-Z_]{1,12}",
    ]
}

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9-]{1,20}\\.vercel\\.app").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary output never panics the parser.
    #[test]
    fn property_parse_never_panics(output in ".{0,200}") {
        let _ = parse_deployment_list(&output);
    }

    /// PROPERTY: The first entry of a list is the one reported.
    #[test]
    fn property_first_entry_wins(
        entries in proptest::collection::vec((state(), host()), 1..6),
    ) {
        let json: Vec<serde_json::Value> = entries
            .iter()
            .map(|(state, url)| serde_json::json!({"state": state, "url": url, "uid": "dpl"}))
            .collect();
        let output = serde_json::to_string(&json).unwrap();

        let record = parse_deployment_list(&output).unwrap().unwrap();

        prop_assert_eq!(record.state(), entries[0].0.as_str());
        prop_assert_eq!(record.url(), entries[0].1.as_str());
        prop_assert_eq!(record.address(), format!("https://{}", entries[0].1));
    }
}
