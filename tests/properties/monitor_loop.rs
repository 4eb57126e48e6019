//! Property tests for the monitor loop's terminal behavior.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use proptest::prelude::*;

use deploywatch::{
    CancellationToken, DeployWatchResult, DeploymentProvider, DeploymentRecord, FailureReport,
    MonitorEvent, MonitorOptions, MonitorOutcome, MonitorUseCase, ReportStore,
};

struct Script {
    states: RefCell<VecDeque<&'static str>>,
    calls: Cell<usize>,
}

impl DeploymentProvider for Script {
    fn name(&self) -> &str {
        "script"
    }

    fn latest_status(&self) -> Option<DeploymentRecord> {
        self.calls.set(self.calls.get() + 1);
        let mut states = self.states.borrow_mut();
        let state = if states.len() > 1 {
            states.pop_front()?
        } else {
            *states.front()?
        };
        Some(DeploymentRecord::new(state, "prop.vercel.app"))
    }

    fn logs(&self, _address: &str, _limit: u32) -> Option<String> {
        Some("log".to_string())
    }
}

struct Discard;

impl ReportStore for Discard {
    fn save(&self, _report: &FailureReport) -> DeployWatchResult<PathBuf> {
        Ok(PathBuf::from("report.txt"))
    }
}

fn in_progress() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("BUILDING"), Just("DEPLOYING")]
}

fn terminal() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("READY"), Just("ERROR"), Just("QUEUED")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: k in-progress polls then a terminal state means exactly k+1
    /// fetches, k progress events and a single terminal classification.
    #[test]
    fn property_one_fetch_per_poll(
        progress in proptest::collection::vec(in_progress(), 0..30),
        last in terminal(),
    ) {
        let mut states: VecDeque<&'static str> = progress.iter().copied().collect();
        states.push_back(last);
        let provider = Script { states: RefCell::new(states), calls: Cell::new(0) };
        let options = MonitorOptions::default().with_interval(Duration::ZERO);
        let use_case = MonitorUseCase::new(&provider, Discard, options);

        let events = RefCell::new(Vec::new());
        let sink = |event: MonitorEvent| events.borrow_mut().push(event);
        let outcome = use_case.run(&CancellationToken::new(), &sink);

        let events = events.into_inner();
        let progress_events = events.iter().filter(|e| **e == MonitorEvent::Progress).count();
        let finished = events
            .iter()
            .filter(|e| matches!(e, MonitorEvent::Finished { .. }))
            .count();

        prop_assert_eq!(provider.calls.get(), progress.len() + 1);
        prop_assert_eq!(progress_events, progress.len());
        prop_assert_eq!(finished, 1);

        let expected = match last {
            "READY" => "success",
            "ERROR" => "failure",
            _ => "inconclusive",
        };
        prop_assert_eq!(outcome.label(), expected);
        let timed_out = matches!(outcome, MonitorOutcome::TimedOut { .. });
        prop_assert!(!timed_out);
    }
}
