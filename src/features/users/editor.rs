//! Modal editor for user records as an explicit state value and a single
//! reducer.
//!
//! The editor is `Closed`, `Open` in create or edit mode, or `Submitting` while
//! a create/update request is in flight. Every UI event is an [`EditorMsg`];
//! [`EditorState::apply`] performs the transition and returns the side effect
//! the caller has to run, if any. Requests are tagged with a [`SubmissionId`] so
//! a completion that arrives after the editor was reopened cannot close the new
//! session.

use super::{
    types::{UserId, UserRecord},
    validation::validate_age,
};

/// Alert raised when the user submits while the form still has an error.
pub const FIX_ERRORS_MESSAGE: &str = "Por favor, corrige los errores antes de enviar.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Identifies one create/update request issued by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Closed,
    Open(EditorMode),
    Submitting(EditorMode, SubmissionId),
}

/// One field edit. Each variant carries its own validation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    SetName(String),
    SetEmail(String),
    SetAge(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMsg {
    OpenCreate,
    OpenEdit(UserRecord),
    Field(FieldUpdate),
    Cancel,
    Submit,
    SubmitSucceeded(SubmissionId),
    SubmitFailed(SubmissionId),
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Create {
        submission: SubmissionId,
        record: UserRecord,
    },
    Update {
        submission: SubmissionId,
        id: UserId,
        record: UserRecord,
    },
    Alert(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    phase: EditorPhase,
    draft: UserRecord,
    error: Option<String>,
    next_submission: u64,
}

impl EditorState {
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    /// Inline validation message, if the last age input was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the modal is visible (open or submitting).
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, EditorPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, EditorPhase::Submitting(..))
    }

    pub fn mode(&self) -> Option<EditorMode> {
        match self.phase {
            EditorPhase::Closed => None,
            EditorPhase::Open(mode) | EditorPhase::Submitting(mode, _) => Some(mode),
        }
    }

    /// Applies `msg` and returns the command the caller must execute.
    pub fn apply(&mut self, msg: EditorMsg) -> Option<EditorCommand> {
        match msg {
            EditorMsg::OpenCreate => {
                self.open(EditorMode::Create, UserRecord::default());
                None
            }
            EditorMsg::OpenEdit(record) => {
                let mode = if record.id.is_some() {
                    EditorMode::Edit
                } else {
                    EditorMode::Create
                };
                self.open(mode, record);
                None
            }
            EditorMsg::Field(update) => {
                if matches!(self.phase, EditorPhase::Open(_)) {
                    self.update_field(update);
                } else {
                    tracing::debug!(phase = ?self.phase, "field update ignored");
                }
                None
            }
            EditorMsg::Cancel => {
                if matches!(self.phase, EditorPhase::Open(_)) {
                    self.close();
                }
                None
            }
            EditorMsg::Submit => self.submit(),
            EditorMsg::SubmitSucceeded(submission) => {
                if self.is_current(submission) {
                    self.close();
                } else {
                    tracing::debug!(?submission, "stale submission completed");
                }
                None
            }
            EditorMsg::SubmitFailed(submission) => {
                if let EditorPhase::Submitting(mode, current) = self.phase {
                    if current == submission {
                        self.phase = EditorPhase::Open(mode);
                    }
                }
                None
            }
        }
    }

    fn open(&mut self, mode: EditorMode, draft: UserRecord) {
        tracing::debug!(?mode, "editor opened");
        self.phase = EditorPhase::Open(mode);
        self.draft = draft;
        self.error = None;
    }

    fn close(&mut self) {
        self.phase = EditorPhase::Closed;
        self.draft = UserRecord::default();
        self.error = None;
    }

    fn update_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::SetName(value) => self.draft.nombre = value,
            FieldUpdate::SetEmail(value) => self.draft.email = value,
            FieldUpdate::SetAge(value) => match validate_age(&value) {
                Ok(()) => {
                    self.error = None;
                    self.draft.edad = value;
                }
                Err(err) => {
                    tracing::debug!(%value, ?err, "age rejected");
                    self.error = Some(err.to_string());
                }
            },
        }
    }

    fn submit(&mut self) -> Option<EditorCommand> {
        let EditorPhase::Open(mode) = self.phase else {
            return None;
        };

        if self.error.is_some() {
            return Some(EditorCommand::Alert(FIX_ERRORS_MESSAGE));
        }

        let submission = SubmissionId(self.next_submission);
        let record = self.draft.clone();
        let command = match (mode, record.id.clone()) {
            (EditorMode::Edit, Some(id)) => EditorCommand::Update {
                submission,
                id,
                record,
            },
            _ => EditorCommand::Create { submission, record },
        };

        self.next_submission += 1;
        self.phase = EditorPhase::Submitting(mode, submission);
        Some(command)
    }

    fn is_current(&self, submission: SubmissionId) -> bool {
        matches!(self.phase, EditorPhase::Submitting(_, current) if current == submission)
    }
}
