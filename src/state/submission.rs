// src/state/submission.rs
use chrono::{DateTime, Local};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::RequestError;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<R> {
    Idle,
    Loading,
    Success {
        result: R,
        completed_at: DateTime<Local>,
    },
    Failed(String),
}

#[derive(Debug)]
struct InFlight<R> {
    request_id: Uuid,
    endpoint: &'static str,
    cancel: CancellationToken,
    outcome: oneshot::Receiver<Result<R, RequestError>>,
}

// Whoever stops caring about a request takes the network call down with it
impl<R> Drop for InFlight<R> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Submit-and-render state machine: idle, loading, success or failed.
///
/// At most one request is in flight. The request itself runs on the tokio
/// runtime; `poll` moves its outcome into the phase from the UI thread
/// without blocking. Every settled request leaves `Loading`, including one
/// whose task vanished without reporting.
#[derive(Debug)]
pub struct Submission<R> {
    phase: Phase<R>,
    in_flight: Option<InFlight<R>>,
    failure_message: &'static str,
}

impl<R: Send + 'static> Submission<R> {
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            phase: Phase::Idle,
            in_flight: None,
            failure_message,
        }
    }

    /// Spawns the request built by `start` unless one is already running.
    /// Returns the new request id, or `None` when rejected by the in-flight guard.
    pub fn begin<F, Fut>(&mut self, runtime: &Handle, endpoint: &'static str, start: F) -> Option<Uuid>
    where
        F: FnOnce(Uuid, CancellationToken) -> Fut,
        Fut: Future<Output = Result<R, RequestError>> + Send + 'static,
    {
        if let Some(in_flight) = &self.in_flight {
            debug!(
                endpoint,
                pending = %in_flight.request_id,
                "submission ignored, request already in flight"
            );
            return None;
        }

        let request_id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let (sender, outcome) = oneshot::channel();
        let request = start(request_id, cancel.clone());

        runtime.spawn(async move {
            // Receiver gone means nobody is interested any more
            let _ = sender.send(request.await);
        });

        info!(endpoint, %request_id, "request submitted");
        self.phase = Phase::Loading;
        self.in_flight = Some(InFlight {
            request_id,
            endpoint,
            cancel,
            outcome,
        });
        Some(request_id)
    }

    /// Collects a settled outcome, if any. Returns true when the phase changed.
    pub fn poll(&mut self) -> bool {
        let outcome = match self.in_flight.as_mut() {
            None => return false,
            Some(in_flight) => match in_flight.outcome.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Closed) => Err(RequestError::Abandoned),
            },
        };

        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };

        self.phase = match outcome {
            Ok(result) => {
                info!(endpoint = in_flight.endpoint, request_id = %in_flight.request_id, "request succeeded");
                Phase::Success {
                    result,
                    completed_at: Local::now(),
                }
            }
            Err(error) => {
                // Detail stays in the log, the user gets the generic message
                warn!(
                    endpoint = in_flight.endpoint,
                    request_id = %in_flight.request_id,
                    %error,
                    "request failed"
                );
                Phase::Failed(self.failure_message.to_string())
            }
        };
        true
    }

    /// Records a failure that never reached the network, e.g. a validation error.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed(message.into());
    }

    /// Cancels anything in flight and returns to idle.
    pub fn reset(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(
                endpoint = in_flight.endpoint,
                request_id = %in_flight.request_id,
                "cancelling in-flight request"
            );
        }
        self.phase = Phase::Idle;
    }

    pub fn phase(&self) -> &Phase<R> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&R> {
        match &self.phase {
            Phase::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        match &self.phase {
            Phase::Success { completed_at, .. } => Some(*completed_at),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    const FAILURE: &str = "Failed to analyze. Please try again.";

    fn wait_for(submission: &mut Submission<u32>) {
        for _ in 0..400 {
            if submission.poll() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("request did not settle in time");
    }

    #[test]
    fn test_loading_spans_request() {
        let runtime = Runtime::new().unwrap();
        let mut submission = Submission::<u32>::new(FAILURE);
        assert!(!submission.is_loading());

        let (release, gate) = oneshot::channel::<Result<u32, RequestError>>();
        let id = submission.begin(runtime.handle(), "/test", move |_, _| async move {
            gate.await.unwrap_or(Err(RequestError::Abandoned))
        });
        assert!(id.is_some());
        assert!(submission.is_loading());
        assert_eq!(submission.phase(), &Phase::Loading);

        // Nothing to collect until the intercepted call resolves
        std::thread::sleep(Duration::from_millis(20));
        assert!(!submission.poll());
        assert!(submission.is_loading());

        release.send(Ok(42)).unwrap();
        wait_for(&mut submission);

        assert!(!submission.is_loading());
        assert_eq!(submission.result(), Some(&42));
        assert!(submission.error().is_none());
        assert!(submission.completed_at().is_some());
    }

    #[test]
    fn test_second_begin_rejected_while_in_flight() {
        let runtime = Runtime::new().unwrap();
        let mut submission = Submission::<u32>::new(FAILURE);
        let started = Arc::new(AtomicUsize::new(0));

        let (release, gate) = oneshot::channel::<Result<u32, RequestError>>();
        let counter = started.clone();
        let first = submission.begin(runtime.handle(), "/test", move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { gate.await.unwrap_or(Err(RequestError::Abandoned)) }
        });

        let counter = started.clone();
        let second = submission.begin(runtime.handle(), "/test", move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(7) }
        });

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(started.load(Ordering::SeqCst), 1);

        release.send(Ok(1)).unwrap();
        wait_for(&mut submission);
        assert_eq!(submission.result(), Some(&1));
    }

    #[test]
    fn test_failure_replaces_previous_result() {
        let runtime = Runtime::new().unwrap();
        let mut submission = Submission::<u32>::new(FAILURE);

        submission.begin(runtime.handle(), "/test", |_, _| async { Ok(5) });
        wait_for(&mut submission);
        assert_eq!(submission.result(), Some(&5));

        submission.begin(runtime.handle(), "/test", |_, _| async {
            Err(RequestError::Status(reqwest::StatusCode::BAD_GATEWAY))
        });
        assert!(submission.result().is_none());
        wait_for(&mut submission);

        assert_eq!(submission.error(), Some(FAILURE));
        assert!(submission.result().is_none());
        assert!(!submission.is_loading());
    }

    #[test]
    fn test_vanished_task_counts_as_failure() {
        let runtime = Runtime::new().unwrap();
        let mut submission = Submission::<u32>::new(FAILURE);

        submission.begin(runtime.handle(), "/test", |_, _| async {
            if true {
                panic!("request task crashed");
            }
            Ok::<u32, RequestError>(0)
        });
        wait_for(&mut submission);

        assert_eq!(submission.error(), Some(FAILURE));
        assert!(!submission.is_loading());
    }

    #[test]
    fn test_reset_cancels_in_flight_request() {
        let runtime = Runtime::new().unwrap();
        let mut submission = Submission::<u32>::new(FAILURE);
        let observed_cancel = Arc::new(AtomicBool::new(false));

        let flag = observed_cancel.clone();
        submission.begin(runtime.handle(), "/test", move |_, cancel| async move {
            cancel.cancelled().await;
            flag.store(true, Ordering::SeqCst);
            Err(RequestError::Cancelled)
        });
        submission.reset();

        assert_eq!(submission.phase(), &Phase::Idle);
        assert!(!submission.is_loading());
        for _ in 0..400 {
            if observed_cancel.load(Ordering::SeqCst) {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("request never observed cancellation");
    }

    #[test]
    fn test_fail_sets_error_without_request() {
        let mut submission = Submission::<u32>::new(FAILURE);
        submission.fail("Please enter at least one symptom");
        assert_eq!(submission.error(), Some("Please enter at least one symptom"));
        assert!(!submission.is_loading());
        assert!(!submission.poll());
    }
}
