//! Client configuration.
//!
//! The API base URL is baked in at build time from `FLEGI_API_BASE_URL`
//! and can be overridden per deployment through a `window.FLEGI_CONFIG`
//! object defined before the app loads. Blank overrides are ignored so a
//! sloppy deploy cannot blank out the base URL.

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Resolved configuration for one page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build-time values with any runtime overrides applied.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(runtime) = runtime_config() {
            config.apply_runtime_overrides(&runtime);
        }
        config
    }

    fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("FLEGI_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }

    fn apply_runtime_overrides(&mut self, runtime: &RuntimeConfig) {
        if let Some(value) = normalize_runtime_value(runtime.api_base_url.as_deref()) {
            self.api_base_url = value;
        }
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("FLEGI_CONFIG")).ok()?;
    if !raw.is_object() {
        return None;
    }

    let object = js_sys::Object::from(raw);
    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

fn normalize_runtime_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
