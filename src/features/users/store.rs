//! Page state for the users screen and the flows that touch the backend.
//!
//! The flows are generic over the API ([`UsersApi`]), over where the state
//! lives ([`ModelHandle`]) and over how the user is prompted ([`Prompts`]), so
//! the same code drives the Leptos page and the tests. Every successful
//! mutation is followed by exactly one list refresh; failures are logged and
//! leave the list as it was.

use std::{cell::RefCell, rc::Rc};

use super::{
    client::UsersApi,
    editor::{EditorCommand, EditorMsg, EditorState, SubmissionId},
    types::{UserId, UserRecord},
};
use crate::app_lib::{AppError, Prompts};

/// Confirmation asked before a record is deleted.
pub const DELETE_CONFIRM_MESSAGE: &str = "¿Estás seguro de que quieres eliminar este usuario?";

/// Everything the users page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersModel {
    pub users: Vec<UserRecord>,
    pub editor: EditorState,
}

/// Access to the page state from async flows. Returns `None` once the state is
/// gone (the page was unmounted while a request was outstanding).
pub trait ModelHandle {
    fn with_model<R>(&self, f: impl FnOnce(&mut UsersModel) -> R) -> Option<R>;
}

impl ModelHandle for Rc<RefCell<UsersModel>> {
    fn with_model<R>(&self, f: impl FnOnce(&mut UsersModel) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut model| f(&mut *model))
    }
}

#[cfg(target_arch = "wasm32")]
impl ModelHandle for leptos::prelude::RwSignal<UsersModel> {
    fn with_model<R>(&self, f: impl FnOnce(&mut UsersModel) -> R) -> Option<R> {
        use leptos::prelude::Update;
        self.try_update(f)
    }
}

/// Result of feeding one message to the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Pure state change, or the message was ignored.
    Applied,
    /// Submission was blocked by a validation error and the user was alerted.
    Alerted,
    /// Create/update succeeded and the list was refreshed.
    Saved,
    /// Create/update failed; the editor is open again with its draft.
    Failed(AppError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Declined,
    Removed,
    Failed(AppError),
}

/// Reloads the list. On failure the current list is kept.
pub async fn refresh<A, M>(api: &A, model: &M) -> Result<(), AppError>
where
    A: UsersApi,
    M: ModelHandle,
{
    match api.list().await {
        Ok(users) => {
            tracing::debug!(count = users.len(), "users loaded");
            model.with_model(|model| model.users = users);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(
                status = err.status(),
                %err,
                "failed to load users, keeping the current list"
            );
            Err(err)
        }
    }
}

/// Applies `msg` to the editor and runs whatever the transition asks for.
pub async fn dispatch<A, M, P>(api: &A, model: &M, prompts: &P, msg: EditorMsg) -> DispatchOutcome
where
    A: UsersApi,
    M: ModelHandle,
    P: Prompts,
{
    let Some(command) = model.with_model(|model| model.editor.apply(msg)).flatten() else {
        return DispatchOutcome::Applied;
    };

    match command {
        EditorCommand::Alert(message) => {
            prompts.alert(message);
            DispatchOutcome::Alerted
        }
        EditorCommand::Create { submission, record } => {
            let result = api.create(&record).await;
            finish_submission(api, model, submission, result, "create").await
        }
        EditorCommand::Update {
            submission,
            id,
            record,
        } => {
            let result = api.update(&id, &record).await;
            finish_submission(api, model, submission, result, "update").await
        }
    }
}

async fn finish_submission<A, M>(
    api: &A,
    model: &M,
    submission: SubmissionId,
    result: Result<(), AppError>,
    action: &'static str,
) -> DispatchOutcome
where
    A: UsersApi,
    M: ModelHandle,
{
    match result {
        Ok(()) => {
            tracing::info!(action, "user saved");
            model.with_model(|model| model.editor.apply(EditorMsg::SubmitSucceeded(submission)));
            let _ = refresh(api, model).await;
            DispatchOutcome::Saved
        }
        Err(err) => {
            tracing::error!(action, status = err.status(), %err, "failed to save user");
            model.with_model(|model| model.editor.apply(EditorMsg::SubmitFailed(submission)));
            DispatchOutcome::Failed(err)
        }
    }
}

/// Deletes `id` after the user confirms, then reloads the list.
pub async fn remove<A, M, P>(api: &A, model: &M, prompts: &P, id: &UserId) -> RemoveOutcome
where
    A: UsersApi,
    M: ModelHandle,
    P: Prompts,
{
    if !prompts.confirm(DELETE_CONFIRM_MESSAGE) {
        tracing::debug!(%id, "delete declined");
        return RemoveOutcome::Declined;
    }

    match api.remove(id).await {
        Ok(()) => {
            tracing::info!(%id, "user deleted");
            let _ = refresh(api, model).await;
            RemoveOutcome::Removed
        }
        Err(err) => {
            tracing::error!(%id, status = err.status(), %err, "failed to delete user");
            RemoveOutcome::Failed(err)
        }
    }
}
