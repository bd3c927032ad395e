#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
use usuarios_web::{
    App,
    app_lib::{build_info, config::AppConfig, logging},
};

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    logging::init(&config.log_level);
    tracing::info!(
        version = build_info::version(),
        commit = build_info::git_commit_hash(),
        api_base_url = %config.api_base_url,
        "starting"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
