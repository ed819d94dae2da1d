use crate::domain::instrument::{self, Instrument};
use crate::domain::models::AssessmentOutcome;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// One in-progress run of an instrument. Answers stay sparse until each
/// question has been visited and answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub instrument: &'static Instrument,
    pub current: usize,
    answers: Vec<Option<u8>>,
}

impl Session {
    pub fn new(instrument: &'static Instrument) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument,
            current: 0,
            answers: vec![None; instrument.question_count()],
        }
    }

    pub fn answer_at(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    pub fn current_answer(&self) -> Option<u8> {
        self.answer_at(self.current)
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.instrument.question_count()
    }

    /// Sum of every answer recorded so far.
    pub fn total(&self) -> u16 {
        self.answers
            .iter()
            .flatten()
            .map(|&v| u16::from(v))
            .sum()
    }

    /// Answers in question order. Only meaningful once every slot is filled,
    /// which forward-navigation gating guarantees at submission time.
    pub fn recorded_scores(&self) -> Vec<u8> {
        self.answers.iter().copied().flatten().collect()
    }

    /// 1-based progress through the question list, for display scaling.
    pub fn progress_percent(&self) -> f32 {
        (self.current + 1) as f32 / self.instrument.question_count() as f32 * 100.0
    }

    fn record(&mut self, value: u8) {
        self.answers[self.current] = Some(value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentState {
    /// No instrument chosen.
    Idle,
    InProgress(Session),
    /// Transient while the one submission call is in flight.
    Submitting(Session),
    Completed {
        instrument: &'static Instrument,
        outcome: AssessmentOutcome,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentAction {
    Select(&'static Instrument),
    Answer(u8),
    Next,
    Previous,
    SubmitSucceeded(AssessmentOutcome),
    SubmitFailed,
    Reset,
}

/// Pure transition function. Invalid transitions return the input state
/// unchanged; the rendering layer expresses them as disabled affordances.
pub fn reduce(state: AssessmentState, action: AssessmentAction) -> AssessmentState {
    use AssessmentAction::*;
    use AssessmentState::*;

    match (state, action) {
        // Selecting an instrument discards any existing session.
        (_, Select(instrument)) => InProgress(Session::new(instrument)),
        (_, Reset) => Idle,
        (InProgress(mut session), Answer(value)) => {
            if instrument::is_valid_score(value) {
                session.record(value);
            }
            InProgress(session)
        }
        (InProgress(session), Next) if session.current_answer().is_none() => InProgress(session),
        (InProgress(session), Next) if session.is_last_question() => Submitting(session),
        (InProgress(mut session), Next) => {
            session.current += 1;
            InProgress(session)
        }
        (InProgress(mut session), Previous) => {
            session.current = session.current.saturating_sub(1);
            InProgress(session)
        }
        (Submitting(session), SubmitSucceeded(outcome)) => Completed {
            instrument: session.instrument,
            outcome,
        },
        // Keep the session so the user can retry manually.
        (Submitting(session), SubmitFailed) => InProgress(session),
        (state, _) => state,
    }
}

/// Seam to the remote API so the flow is drivable in tests without a network.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    async fn submit_assessment(
        &self,
        instrument_id: &str,
        answers: &[u8],
    ) -> anyhow::Result<AssessmentOutcome>;
}

/// Async driver around the reducer. Owns the state the active assessment view
/// renders from, plus the transient submission-failure notice.
pub struct AssessmentFlow {
    state: AssessmentState,
    api: Arc<dyn AssessmentApi>,
    notice: Option<String>,
}

impl AssessmentFlow {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self {
            state: AssessmentState::Idle,
            api,
            notice: None,
        }
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Last submission failure message, if any. Cleared by the next action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Starts a fresh session for the named instrument. Returns false when the
    /// id is not in the catalog.
    pub fn select(&mut self, instrument_id: &str) -> bool {
        match instrument::find(instrument_id) {
            Some(instrument) => {
                self.apply(AssessmentAction::Select(instrument));
                true
            }
            None => {
                tracing::warn!(instrument_id, "unknown instrument selected");
                false
            }
        }
    }

    pub fn answer(&mut self, value: u8) {
        self.apply(AssessmentAction::Answer(value));
    }

    pub fn previous(&mut self) {
        self.apply(AssessmentAction::Previous);
    }

    pub fn reset(&mut self) {
        self.apply(AssessmentAction::Reset);
    }

    /// Forward navigation. On the last question this performs the one awaited
    /// submission call; there is no retry and no cancellation.
    pub async fn advance(&mut self) {
        self.apply(AssessmentAction::Next);

        let (instrument_id, scores) = match &self.state {
            AssessmentState::Submitting(session) => {
                (session.instrument.id, session.recorded_scores())
            }
            _ => return,
        };

        match self.api.submit_assessment(instrument_id, &scores).await {
            Ok(outcome) => {
                tracing::info!(instrument_id, score = outcome.score, "assessment submitted");
                self.apply(AssessmentAction::SubmitSucceeded(outcome));
            }
            Err(err) => {
                tracing::warn!(instrument_id, error = %err, "assessment submission failed");
                self.apply(AssessmentAction::SubmitFailed);
                self.notice =
                    Some("Could not submit your assessment. Please try again.".to_string());
            }
        }
    }

    fn apply(&mut self, action: AssessmentAction) {
        self.notice = None;
        let state = std::mem::replace(&mut self.state, AssessmentState::Idle);
        self.state = reduce(state, action);
    }
}
