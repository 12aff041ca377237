//! Build-time configuration for the hosted auth endpoints with an optional
//! runtime override. The runtime config is read from `window.LOFTLINE_CONFIG`
//! (if present) so static deployments can change endpoints without
//! rebuilding. Configuration values are public; the API key is the
//! publishable anon key, never a secret.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub auth_base_url: String,
    pub auth_api_key: String,
    pub site_name: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let auth_base_url = option_env!("LOFTLINE_AUTH_BASE_URL").unwrap_or("");
        let auth_api_key = option_env!("LOFTLINE_AUTH_API_KEY").unwrap_or("");
        let site_name = option_env!("LOFTLINE_SITE_NAME").unwrap_or("Loftline");

        let mut config = Self {
            auth_base_url: auth_base_url.to_string(),
            auth_api_key: auth_api_key.to_string(),
            site_name: site_name.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    auth_base_url: Option<String>,
    auth_api_key: Option<String>,
    site_name: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_base_url {
        config.auth_base_url = value;
    }
    if let Some(value) = runtime.auth_api_key {
        config.auth_api_key = value;
    }
    if let Some(value) = runtime.site_name {
        config.site_name = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("LOFTLINE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        auth_base_url: read_runtime_value(&object, "auth_base_url"),
        auth_api_key: read_runtime_value(&object, "auth_api_key"),
        site_name: read_runtime_value(&object, "site_name"),
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
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://auth.loftline.dev "),
            Some("https://auth.loftline.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            auth_base_url: "https://auth.default".to_string(),
            auth_api_key: "default-key".to_string(),
            site_name: "Loftline".to_string(),
        };
        let runtime = RuntimeConfig {
            auth_base_url: normalize_runtime_value(""),
            auth_api_key: normalize_runtime_value("  "),
            site_name: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.auth_base_url, "https://auth.default");
        assert_eq!(config.auth_api_key, "default-key");
        assert_eq!(config.site_name, "Loftline");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            auth_base_url: "https://auth.default".to_string(),
            auth_api_key: "default-key".to_string(),
            site_name: "Loftline".to_string(),
        };
        let runtime = RuntimeConfig {
            auth_base_url: normalize_runtime_value("https://auth.override"),
            auth_api_key: normalize_runtime_value("override-key"),
            site_name: normalize_runtime_value("Loftline Staging"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.auth_base_url, "https://auth.override");
        assert_eq!(config.auth_api_key, "override-key");
        assert_eq!(config.site_name, "Loftline Staging");
    }
}
