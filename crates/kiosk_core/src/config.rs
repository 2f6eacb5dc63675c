use std::{collections::HashMap, fmt, fs, io, path::Path, str::FromStr, time::Duration};

use anyhow::Context;
use tracing::warn;

pub const SETTINGS_FILE: &str = "totem.toml";

#[derive(Clone)]
pub struct AssistantSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".into(),
            model: "gemini-3-flash-preview".into(),
            temperature: 0.7,
            max_output_tokens: 250,
            request_timeout: Duration::from_secs(20),
        }
    }
}

impl fmt::Debug for AssistantSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub idle_timeout: Duration,
    pub attract_rotation: Duration,
    pub assistant: AssistantSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(60),
            attract_rotation: Duration::from_secs(8),
            assistant: AssistantSettings::default(),
        }
    }
}

/// Loads `totem.toml` from the working directory, then applies process env overrides.
pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = parse_flat_table(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            apply_layer(&mut settings, |key| file_cfg.get(key).cloned());
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    apply_layer(&mut settings, |key| {
        env_keys(key)
            .iter()
            .filter_map(|name| env(name).filter(|v| !v.trim().is_empty()))
            .last()
    });

    Ok(settings)
}

fn parse_flat_table(raw: &str) -> anyhow::Result<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(raw)?;
    Ok(table
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => return None,
            };
            Some((key, value))
        })
        .collect())
}

/// Env names consulted for a file key, lowest precedence first.
fn env_keys(key: &str) -> Vec<String> {
    let mut names = match key {
        "idle_timeout_secs" => vec!["TOTEM_IDLE_TIMEOUT_SECS".to_string()],
        "assistant_api_key" => vec!["API_KEY".to_string(), "GEMINI_API_KEY".to_string()],
        _ => Vec::new(),
    };
    names.push(format!("APP__{}", key.to_ascii_uppercase()));
    names
}

fn apply_layer(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(secs) = parse_value::<u64>(&lookup, "idle_timeout_secs") {
        set_duration(&mut settings.idle_timeout, "idle_timeout_secs", secs);
    }
    if let Some(secs) = parse_value::<u64>(&lookup, "attract_rotation_secs") {
        set_duration(&mut settings.attract_rotation, "attract_rotation_secs", secs);
    }
    if let Some(v) = lookup("assistant_api_key") {
        settings.assistant.api_key = Some(v);
    }
    if let Some(v) = lookup("assistant_base_url") {
        settings.assistant.base_url = v.trim_end_matches('/').to_string();
    }
    if let Some(v) = lookup("assistant_model") {
        settings.assistant.model = v;
    }
    if let Some(v) = parse_value::<f32>(&lookup, "assistant_temperature") {
        settings.assistant.temperature = v;
    }
    if let Some(v) = parse_value::<u32>(&lookup, "assistant_max_output_tokens") {
        settings.assistant.max_output_tokens = v;
    }
    if let Some(secs) = parse_value::<u64>(&lookup, "assistant_timeout_secs") {
        set_duration(
            &mut settings.assistant.request_timeout,
            "assistant_timeout_secs",
            secs,
        );
    }
}

fn parse_value<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

fn set_duration(target: &mut Duration, key: &str, secs: u64) {
    if secs == 0 {
        warn!(key, "ignoring zero duration setting");
        return;
    }
    *target = Duration::from_secs(secs);
}
