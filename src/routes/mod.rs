mod not_found;
mod users;

pub(crate) use not_found::NotFoundPage;
pub(crate) use users::UsersPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=UsersPage />
            <Route path=path!("/users") view=UsersPage />
        </Routes>
    }
}
