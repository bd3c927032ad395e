//! Build-time configuration for the users API with an optional runtime
//! override. The runtime config is read from `window.USUARIOS_CONFIG` (if
//! present) so static deployments can point at a different backend without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Log level used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for API paths. Empty means same-origin relative paths (`/users`).
    pub api_base_url: String,
    /// `EnvFilter` directive for the console logger.
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("USUARIOS_API_BASE_URL"),
            option_env!("USUARIOS_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .and_then(normalize_runtime_value)
                .unwrap_or_default(),
            log_level: log_level
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env(None, None)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USUARIOS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_LOG_LEVEL, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value,
    };

    fn base_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.example.com "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn defaults_to_relative_paths_and_info_level() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn build_env_values_are_trimmed() {
        let config = AppConfig::from_build_env(Some(" https://api.build/ "), Some("  "));
        assert_eq!(config.api_base_url, "https://api.build/");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, base_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, "debug");
    }
}
