use crate::{
    error::{ProcessError, Result},
    types::{ProcessedVideo, SourceType},
};

/// Lifecycle of a single video submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(ProcessedVideo),
    Failed(String),
}

/// Which result pane is shown. Independent of the submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Transcript,
    Summary,
}

/// Identifies one submission; resolutions carry the ticket they were issued
/// under so a reply to an abandoned submission cannot clobber a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Owns the submission state machine and the active tab.
///
/// Views never mutate submission state directly; they call [`submit`],
/// drive the request however they like (the controller is runtime-agnostic),
/// and hand the outcome back through [`resolve`].
///
/// [`submit`]: SubmissionController::submit
/// [`resolve`]: SubmissionController::resolve
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    active_tab: ActiveTab,
    current_ticket: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a submission for `url`.
    ///
    /// An empty or all-whitespace URL fails with [`ProcessError::EmptyUrl`]
    /// and leaves the state untouched. Otherwise the controller moves to
    /// `Submitting` synchronously, discarding any prior result, and returns
    /// the ticket under which the caller must issue exactly one request.
    pub fn submit(&mut self, url: &str) -> Result<SubmissionTicket> {
        if url.trim().is_empty() {
            return Err(ProcessError::EmptyUrl);
        }
        self.current_ticket += 1;
        self.state = SubmissionState::Submitting;
        Ok(SubmissionTicket(self.current_ticket))
    }

    /// Apply the outcome of the request issued under `ticket`.
    ///
    /// A stale ticket (the user re-submitted in the meantime) is dropped
    /// without touching the state. Errors arrive pre-rendered as the single
    /// user-visible message from [`ProcessError::user_message`].
    pub fn resolve(
        &mut self,
        ticket: SubmissionTicket,
        outcome: std::result::Result<ProcessedVideo, String>,
    ) {
        if ticket.0 != self.current_ticket {
            return;
        }
        self.state = match outcome {
            Ok(video) => SubmissionState::Succeeded(video),
            Err(message) => SubmissionState::Failed(message),
        };
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// The processed video, present only while `Succeeded`.
    pub fn result(&self) -> Option<&ProcessedVideo> {
        match &self.state {
            SubmissionState::Succeeded(video) => Some(video),
            _ => None,
        }
    }

    /// Transient notification for the current state, if any.
    pub fn status_line(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Idle => None,
            SubmissionState::Submitting => Some("Processing video...".to_string()),
            SubmissionState::Succeeded(video) => Some(success_notice(&video.source_type)),
            SubmissionState::Failed(message) => Some(message.clone()),
        }
    }
}

/// Confirmation shown when processing finishes, naming the detected platform.
pub fn success_notice(source_type: &SourceType) -> String {
    format!("Successfully processed {} video!", source_type.badge())
}
