//! src/submission.rs
//!
//! The waitlist submission workflow: validate a user-entered email, issue
//! exactly one insert against the waitlist store, and map the result to a
//! user-facing outcome. A duplicate entry is a success from the user's
//! perspective, not an error.
use crate::domain::{Email, EmailError};
use crate::store::{StoreError, WaitlistStore};

/// The tagged result of one submission attempt.
#[derive(Debug)]
pub enum Outcome {
    Rejected(Rejection),
    Accepted(Acceptance),
    Failed(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    InvalidSyntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    New,
    Duplicate,
}

/// Runs one submission attempt against the store.
///
/// Rejected input never reaches the store; a store-level uniqueness
/// violation is remapped to `Accepted(Duplicate)`. Anything else the store
/// reports becomes `Failed` and is logged for diagnostics.
#[tracing::instrument(name = "Submitting waitlist entry", skip(store, raw_email))]
pub async fn submit(store: &dyn WaitlistStore, raw_email: &str) -> Outcome {
    let email = match Email::parse(raw_email) {
        Ok(email) => email,
        Err(EmailError::Empty) => return Outcome::Rejected(Rejection::Empty),
        Err(EmailError::Invalid(_)) => return Outcome::Rejected(Rejection::InvalidSyntax),
    };

    match store.insert(&email).await {
        Ok(()) => Outcome::Accepted(Acceptance::New),
        Err(StoreError::Duplicate) => Outcome::Accepted(Acceptance::Duplicate),
        Err(StoreError::Unexpected(e)) => {
            tracing::error!("Error joining waitlist: {:?}", e);
            Outcome::Failed(e)
        }
    }
}

/// Session-scoped form state, independent of any rendering mechanism.
///
/// Per session: `Idle -> Submitting -> {Idle, Joined}`. `Joined` is terminal;
/// there is no un-join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Joined,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn submission_in_progress(&self) -> bool {
        self.state == SessionState::Submitting
    }

    pub fn has_joined(&self) -> bool {
        self.state == SessionState::Joined
    }

    /// Claims the session for one submission. Refuses while a submission is
    /// outstanding, and after the session has joined.
    pub fn begin_submit(&mut self) -> bool {
        if self.state == SessionState::Idle {
            self.state = SessionState::Submitting;
            true
        } else {
            false
        }
    }

    /// Records the outcome of the attempt started by [`begin_submit`].
    ///
    /// [`begin_submit`]: Session::begin_submit
    pub fn complete_submit(&mut self, outcome: &Outcome) {
        self.state = match outcome {
            Outcome::Accepted(_) => SessionState::Joined,
            Outcome::Rejected(_) | Outcome::Failed(_) => SessionState::Idle,
        };
    }
}

/// One user's capture form: the store handle, the session state machine, and
/// the raw input buffer.
pub struct WaitlistSubmission<S> {
    store: S,
    session: Session,
    input: String,
}

impl<S: WaitlistStore> WaitlistSubmission<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
            input: String::new(),
        }
    }

    /// Replaces the input buffer with whatever the user typed so far.
    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_owned();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Submits the buffered input. A no-op (returns `None`) while a
    /// submission is outstanding or once the session has joined.
    ///
    /// The input buffer is cleared before the store call, so it is empty
    /// after every attempt, failures included. No automatic retry: after a
    /// `Failed` outcome the user retypes and resubmits.
    pub async fn submit(&mut self) -> Option<Outcome> {
        if !self.session.begin_submit() {
            return None;
        }

        let raw = std::mem::take(&mut self.input);
        let outcome = submit(&self.store, &raw).await;
        self.session.complete_submit(&outcome);

        Some(outcome)
    }
}
