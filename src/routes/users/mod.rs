//! User routes re-exported by the top-level routing module.

mod editor;
mod list;

pub(crate) use list::UsersPage;
