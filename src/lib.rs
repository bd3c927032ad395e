//! Browser UI for listing, creating, editing and deleting user records
//! through the `/users` REST API.
//!
//! State and flows (`features`) and the shared utilities (`app_lib`) build on
//! every target so they can be tested natively; the Leptos views only exist
//! on `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub use app::App;
