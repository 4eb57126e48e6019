//! Property tests for state classification.

use proptest::prelude::*;

use deploywatch::DeployState;

const KNOWN: &[&str] = &["BUILDING", "DEPLOYING", "ERROR", "READY"];

proptest! {
    /// PROPERTY: Any string outside the known set is kept verbatim as Unknown.
    #[test]
    fn property_unknown_states_are_preserved(raw in ".{0,24}") {
        prop_assume!(!KNOWN.contains(&raw.as_str()));

        prop_assert_eq!(DeployState::from_raw(&raw), DeployState::Unknown(raw.clone()));
    }

    /// PROPERTY: Matching is case-sensitive; lowercase known states are Unknown.
    #[test]
    fn property_lowercase_known_states_are_unknown(idx in 0..KNOWN.len()) {
        let lowered = KNOWN[idx].to_lowercase();

        prop_assert!(matches!(DeployState::from_raw(&lowered), DeployState::Unknown(_)));
    }

    /// PROPERTY: Only in-progress states keep the loop polling.
    #[test]
    fn property_only_in_progress_is_non_terminal(raw in "[A-Z]{0,12}") {
        let state = DeployState::from_raw(&raw);
        let in_progress = raw == "BUILDING" || raw == "DEPLOYING";

        prop_assert_eq!(state.is_terminal(), !in_progress);
    }
}
