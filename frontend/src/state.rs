//! Analysis view state.
//!
//! Everything the analysis view shows lives in one [`AnalysisState`] record.
//! Views never mutate it field by field: each user or network event is an
//! [`Action`], and [`AnalysisState::apply`] returns the next record.
//!
//! ```text
//!          Select            Begin               Settle(Ok)
//!   Idle ─────────► Ready ─────────► Submitting ───────────► Success
//!                     ▲                   │  ▲                   │
//!                     │                   │  └── Tick            │
//!                     │                   └─────────────────► Failed
//!                     └──────────── Select / Begin ◄─────────────┘
//! ```
//!
//! The record is generic over the file handle so transitions can be
//! exercised without a browser.

use std::future::Future;

use crate::config::LOADING_MESSAGES;
use crate::types::{AnalysisResult, Prediction};

/// Snapshot of the analysis view.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisState<F> {
    /// Image picked by the user
    pub file: Option<F>,
    /// Object URL previewing `file`
    pub preview_url: Option<String>,
    /// Last successful analysis
    pub prediction: Option<Prediction>,
    /// Last failure, as shown to the user
    pub error: Option<String>,
    /// A request is in flight
    pub busy: bool,
    /// Position in the loading message rotation
    pub message_index: usize,
}

impl<F> Default for AnalysisState<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview_url: None,
            prediction: None,
            error: None,
            busy: false,
            message_index: 0,
        }
    }
}

/// Events driving the analysis view.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<F> {
    /// The user picked a new image.
    Select { file: F, preview_url: String },
    /// A submission starts.
    Begin,
    /// The loading timer fired.
    Tick,
    /// The in-flight request settled.
    Settle(AnalysisResult<Prediction>),
}

impl<F: Clone> AnalysisState<F> {
    /// Next state after `action`.
    ///
    /// Actions that make no sense in the current state (a tick while idle,
    /// a submission without a file, a selection while busy) leave it unchanged.
    pub fn apply(&self, action: Action<F>) -> Self {
        match action {
            Action::Select { file, preview_url } if !self.busy => Self {
                file: Some(file),
                preview_url: Some(preview_url),
                prediction: None,
                error: None,
                ..self.clone()
            },
            Action::Begin if self.can_submit() => Self {
                busy: true,
                prediction: None,
                error: None,
                ..self.clone()
            },
            Action::Tick if self.busy => Self {
                message_index: (self.message_index + 1) % LOADING_MESSAGES.len(),
                ..self.clone()
            },
            Action::Settle(outcome) if self.busy => {
                let (prediction, error) = match outcome {
                    Ok(prediction) => (Some(prediction), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                Self {
                    busy: false,
                    message_index: 0,
                    prediction,
                    error,
                    ..self.clone()
                }
            }
            _ => self.clone(),
        }
    }
}

impl<F: Clone + PartialEq> AnalysisState<F> {
    /// Apply `action` in place; `true` if the state changed.
    pub fn step(&mut self, action: Action<F>) -> bool {
        let next = self.apply(action);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }
}

impl<F> AnalysisState<F> {
    /// A file is selected and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.busy
    }

    /// Status line currently shown by the loading indicator.
    pub fn loading_message(&self) -> &'static str {
        LOADING_MESSAGES[self.message_index % LOADING_MESSAGES.len()]
    }
}

/// Run one submission against `current`.
///
/// `send` performs the request and `apply` publishes each transition to
/// whoever owns the state, reporting whether it was accepted. Returns
/// `false` without sending when there is nothing to submit or when the
/// owner rejects `Begin` because a request is already in flight.
pub async fn run_submission<F, S, Fut, A>(current: &AnalysisState<F>, send: S, mut apply: A) -> bool
where
    F: Clone,
    S: FnOnce(F) -> Fut,
    Fut: Future<Output = AnalysisResult<Prediction>>,
    A: FnMut(Action<F>) -> bool,
{
    if !current.can_submit() {
        return false;
    }
    let Some(file) = current.file.clone() else {
        return false;
    };

    if !apply(Action::Begin) {
        return false;
    }
    let outcome = send(file).await;
    apply(Action::Settle(outcome));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    type State = AnalysisState<&'static str>;

    fn select(state: &State, name: &'static str) -> State {
        state.apply(Action::Select {
            file: name,
            preview_url: format!("blob:{}", name),
        })
    }

    fn sample_prediction() -> Prediction {
        Prediction {
            prediction: 0.87,
            label: "TB Positive".to_string(),
            gradcam: Some("aGVhdG1hcA==".to_string()),
            lime: None,
        }
    }

    #[test]
    fn test_select_clears_result_and_error() {
        let failed = State {
            file: Some("old.png"),
            error: Some("bad image".to_string()),
            ..State::default()
        };
        let next = select(&failed, "xray.png");
        assert_eq!(next.file, Some("xray.png"));
        assert_eq!(next.preview_url.as_deref(), Some("blob:xray.png"));
        assert!(next.error.is_none());
        assert!(next.prediction.is_none());

        let succeeded = State {
            file: Some("old.png"),
            prediction: Some(sample_prediction()),
            ..State::default()
        };
        let next = select(&succeeded, "xray.png");
        assert!(next.error.is_none());
        assert!(next.prediction.is_none());
    }

    #[test]
    fn test_begin_requires_a_file() {
        let idle = State::default();
        assert!(!idle.can_submit());
        assert_eq!(idle.apply(Action::Begin), idle);
    }

    #[test]
    fn test_begin_sets_busy_and_clears_outcome() {
        let state = State {
            file: Some("xray.png"),
            error: Some("bad image".to_string()),
            ..State::default()
        };
        let next = state.apply(Action::Begin);
        assert!(next.busy);
        assert!(next.error.is_none());
        assert!(next.prediction.is_none());
        assert!(!next.can_submit());
        assert_eq!(next.apply(Action::Begin), next);
    }

    #[test]
    fn test_select_ignored_while_busy() {
        let busy = select(&State::default(), "xray.png").apply(Action::Begin);
        assert_eq!(select(&busy, "other.png"), busy);
    }

    #[test]
    fn test_loading_messages_rotate_and_wrap() {
        let mut state = select(&State::default(), "xray.png").apply(Action::Begin);
        assert_eq!(state.loading_message(), LOADING_MESSAGES[0]);

        for expected in LOADING_MESSAGES.iter().skip(1) {
            state = state.apply(Action::Tick);
            assert_eq!(state.loading_message(), *expected);
        }

        state = state.apply(Action::Tick);
        assert_eq!(state.message_index, 0);
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let idle = select(&State::default(), "xray.png");
        assert_eq!(idle.apply(Action::Tick), idle);
    }

    #[test]
    fn test_settle_success() {
        let state = select(&State::default(), "xray.png")
            .apply(Action::Begin)
            .apply(Action::Tick)
            .apply(Action::Settle(Ok(sample_prediction())));

        assert!(!state.busy);
        assert_eq!(state.message_index, 0);
        assert_eq!(state.prediction, Some(sample_prediction()));
        assert!(state.error.is_none());
        assert_eq!(state.file, Some("xray.png"));
    }

    #[test]
    fn test_settle_failure() {
        let state = select(&State::default(), "xray.png")
            .apply(Action::Begin)
            .apply(Action::Settle(Err(AnalysisError::Status(500))));

        assert!(!state.busy);
        assert!(state.prediction.is_none());
        assert_eq!(state.error.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn test_stale_settle_ignored() {
        let idle = select(&State::default(), "xray.png");
        assert_eq!(idle.apply(Action::Settle(Ok(sample_prediction()))), idle);
    }

    #[test]
    fn test_submission_without_file_sends_nothing() {
        let state = State::default();
        let sent = Cell::new(false);
        let applied = Cell::new(0);

        let submitted = block_on(run_submission(
            &state,
            |_| {
                sent.set(true);
                async { Ok(sample_prediction()) }
            },
            |_| {
                applied.set(applied.get() + 1);
                true
            },
        ));

        assert!(!submitted);
        assert!(!sent.get());
        assert_eq!(applied.get(), 0);
    }

    #[test]
    fn test_busy_only_while_request_in_flight() {
        let state = RefCell::new(select(&State::default(), "xray.png"));
        let snapshot = state.borrow().clone();
        assert!(!snapshot.busy);

        let submitted = block_on(run_submission(
            &snapshot,
            |file| {
                assert_eq!(file, "xray.png");
                assert!(state.borrow().busy);
                async { Err(AnalysisError::Server("bad image".to_string())) }
            },
            |action| state.borrow_mut().step(action),
        ));

        assert!(submitted);
        let settled = state.into_inner();
        assert!(!settled.busy);
        assert_eq!(settled.error.as_deref(), Some("bad image"));
        assert!(settled.prediction.is_none());
    }

    #[test]
    fn test_submission_publishes_result() {
        let state = RefCell::new(select(&State::default(), "xray.png"));
        let snapshot = state.borrow().clone();

        block_on(run_submission(
            &snapshot,
            |_| async { Ok(sample_prediction()) },
            |action| state.borrow_mut().step(action),
        ));

        let settled = state.into_inner();
        let prediction = settled.prediction.expect("prediction");
        assert_eq!(prediction.label, "TB Positive");
        assert_eq!(prediction.confidence_percent(), "87.00%");
        assert!(settled.error.is_none());
    }

    #[test]
    fn test_step_reports_changes() {
        let mut state = State::default();
        assert!(!state.step(Action::Begin));
        assert!(!state.step(Action::Tick));

        assert!(state.step(Action::Select {
            file: "xray.png",
            preview_url: "blob:xray.png".to_string(),
        }));
        assert!(state.step(Action::Begin));
        assert!(!state.step(Action::Begin));
        assert!(state.busy);
    }

    #[test]
    fn test_stale_snapshot_does_not_send_twice() {
        // Live state already has a request in flight; the caller still
        // holds the snapshot taken before it started.
        let snapshot = select(&State::default(), "xray.png");
        let state = RefCell::new(snapshot.apply(Action::Begin));
        let sent = Cell::new(false);

        let submitted = block_on(run_submission(
            &snapshot,
            |_| {
                sent.set(true);
                async { Ok(sample_prediction()) }
            },
            |action| state.borrow_mut().step(action),
        ));

        assert!(!submitted);
        assert!(!sent.get());
        let live = state.into_inner();
        assert!(live.busy);
        assert!(live.prediction.is_none());
    }
}
