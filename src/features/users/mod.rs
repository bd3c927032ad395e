//! User records: wire types, field rules, the modal editor, the REST client
//! and the page-level flows that tie them together.

pub mod client;
pub mod editor;
pub mod store;
pub mod types;
pub mod validation;

pub use client::{HttpUsersApi, UsersApi};
pub use editor::{EditorCommand, EditorMode, EditorMsg, EditorPhase, EditorState, FieldUpdate};
pub use store::{DispatchOutcome, ModelHandle, RemoveOutcome, UsersModel};
pub use types::{UserId, UserRecord};
