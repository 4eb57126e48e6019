//! Monitor Use Case implementation

use std::time::Instant;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::application::cancel::CancellationToken;
use crate::domain::entities::{DeploymentRecord, FailureReport};
use crate::domain::ports::{DeploymentProvider, MonitorEvent, MonitorEventSink, ReportStore};
use crate::domain::value_objects::{DeployState, InconclusiveReason, MonitorOutcome};

use super::options::MonitorOptions;

/// Monitor Use Case
///
/// Polls the provider for the latest deployment until it reaches a terminal
/// state. This is the entry point for the `deploywatch watch` command.
pub struct MonitorUseCase<P, R> {
    provider: P,
    reports: R,
    options: MonitorOptions,
}

impl<P, R> MonitorUseCase<P, R>
where
    P: DeploymentProvider,
    R: ReportStore,
{
    pub fn new(provider: P, reports: R, options: MonitorOptions) -> Self {
        Self {
            provider,
            reports,
            options,
        }
    }

    pub fn options(&self) -> &MonitorOptions {
        &self.options
    }

    /// Run the poll loop to completion (blocking).
    ///
    /// Returns early with `Cancelled` once `cancel` fires. Every run ends
    /// with a `Finished` event.
    pub fn run(&self, cancel: &CancellationToken, sink: &dyn MonitorEventSink) -> MonitorOutcome {
        sink.on_event(MonitorEvent::Started {
            provider: self.provider.name().to_string(),
            interval_secs: self.options.interval.as_secs(),
            max_wait_secs: self.options.max_wait.map(|d| d.as_secs()),
        });

        let outcome = self.poll(cancel, sink);
        info!(outcome = outcome.label(), "monitor finished");

        sink.on_event(MonitorEvent::Finished {
            outcome: outcome.label().to_string(),
        });
        outcome
    }

    fn poll(&self, cancel: &CancellationToken, sink: &dyn MonitorEventSink) -> MonitorOutcome {
        let started = Instant::now();
        // None never equals a real state, so the first poll always announces.
        let mut last_state: Option<String> = None;
        let mut polls: u64 = 0;

        loop {
            if cancel.is_cancelled() {
                return cancelled(sink);
            }

            let record = self.provider.latest_status();
            polls += 1;

            if cancel.is_cancelled() {
                return cancelled(sink);
            }

            if let Some(record) = &record {
                debug!(poll = polls, state = record.state(), url = record.url(), "polled");
                if last_state.as_deref() != Some(record.state()) {
                    announce(record, sink);
                    last_state = Some(record.state().to_string());
                }
            }

            let url = record
                .as_ref()
                .map(|r| r.url().to_string())
                .unwrap_or_default();

            match DeployState::classify(record.as_ref()) {
                DeployState::Absent => {
                    sink.on_event(MonitorEvent::StatusUnavailable);
                    return MonitorOutcome::Inconclusive(InconclusiveReason::NoDeployment);
                }
                DeployState::InProgress => {
                    sink.on_event(MonitorEvent::Progress);

                    if let Some(max_wait) = self.options.max_wait {
                        let waited = started.elapsed();
                        if waited >= max_wait {
                            sink.on_event(MonitorEvent::TimedOut {
                                waited_secs: waited.as_secs(),
                            });
                            return MonitorOutcome::TimedOut { waited };
                        }
                    }

                    if cancel.wait_timeout(self.options.interval) {
                        return cancelled(sink);
                    }
                }
                DeployState::Failed => return self.handle_failure(url, cancel, sink),
                DeployState::Succeeded => {
                    sink.on_event(MonitorEvent::DeploymentSucceeded { url: url.clone() });
                    return MonitorOutcome::Succeeded { url };
                }
                DeployState::Unknown(state) => {
                    sink.on_event(MonitorEvent::UnknownState {
                        state: state.clone(),
                    });
                    return MonitorOutcome::Inconclusive(InconclusiveReason::UnknownState(state));
                }
            }
        }
    }

    fn handle_failure(
        &self,
        url: String,
        cancel: &CancellationToken,
        sink: &dyn MonitorEventSink,
    ) -> MonitorOutcome {
        sink.on_event(MonitorEvent::DeploymentFailed { url: url.clone() });

        if cancel.is_cancelled() {
            return cancelled(sink);
        }

        let logs = self
            .provider
            .logs(&url, self.options.log_limit)
            .filter(|logs| !logs.is_empty());

        if cancel.is_cancelled() {
            return cancelled(sink);
        }

        match &logs {
            Some(logs) => sink.on_event(MonitorEvent::LogsRetrieved { logs: logs.clone() }),
            None => sink.on_event(MonitorEvent::LogsUnavailable { url: url.clone() }),
        }

        let report = FailureReport::new(Local::now(), url.as_str(), logs);
        let saved = match self.reports.save(&report) {
            Ok(path) => {
                sink.on_event(MonitorEvent::ReportSaved { path: path.clone() });
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "failure report not written");
                sink.on_event(MonitorEvent::ReportFailed {
                    message: e.to_string(),
                });
                None
            }
        };

        MonitorOutcome::Failed { url, report: saved }
    }
}

fn announce(record: &DeploymentRecord, sink: &dyn MonitorEventSink) {
    sink.on_event(MonitorEvent::StatusChanged {
        at: Local::now(),
        state: record.state().to_string(),
        url: record.url().to_string(),
        created: record.created_at(),
    });
}

fn cancelled(sink: &dyn MonitorEventSink) -> MonitorOutcome {
    sink.on_event(MonitorEvent::Cancelled);
    MonitorOutcome::Cancelled
}
