//! Client for the `/users` REST resource. Endpoint paths live here so routes
//! never build URLs themselves.

use crate::{
    app_lib::AppError,
    features::users::types::{UserId, UserRecord},
};

#[cfg(target_arch = "wasm32")]
use crate::{
    app_lib::api,
    features::users::types::{USERS_PATH, user_path},
};

/// The four calls the users page makes against the backend.
///
/// Futures are not required to be `Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait UsersApi {
    /// GET `/users`, in server order.
    async fn list(&self) -> Result<Vec<UserRecord>, AppError>;
    /// POST `/users` with the record (no id).
    async fn create(&self, record: &UserRecord) -> Result<(), AppError>;
    /// PUT `/users/{id}` with the full record, id included.
    async fn update(&self, id: &UserId, record: &UserRecord) -> Result<(), AppError>;
    /// DELETE `/users/{id}`.
    async fn remove(&self, id: &UserId) -> Result<(), AppError>;
}

/// `UsersApi` over the shared HTTP helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpUsersApi;

#[cfg(target_arch = "wasm32")]
impl UsersApi for HttpUsersApi {
    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        api::get_json(USERS_PATH).await
    }

    async fn create(&self, record: &UserRecord) -> Result<(), AppError> {
        api::post_json(USERS_PATH, record).await
    }

    async fn update(&self, id: &UserId, record: &UserRecord) -> Result<(), AppError> {
        api::put_json(&user_path(id), record).await
    }

    async fn remove(&self, id: &UserId) -> Result<(), AppError> {
        api::delete(&user_path(id)).await
    }
}
