use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::{error::ConfigError, prompts};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_PROVIDER_NAME: &str = "Gemini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 20_000;

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

/// Everything the Gemini client needs. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ModelClientConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub system_instruction: String,
    pub generation: GenerationParams,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub model: ModelClientConfig,
    pub bind_addr: SocketAddr,
    pub provider_name: String,
    pub max_input_chars: usize,
}

impl RelayConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = lookup("GEMINI_API_BASE")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = parse_or(&lookup, "GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let bind_addr: SocketAddr = match lookup("RELAY_BIND_ADDR") {
            Some(raw) => parse_var("RELAY_BIND_ADDR", &raw)?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| invalid("RELAY_BIND_ADDR", DEFAULT_BIND_ADDR))?,
        };
        let max_input_chars: usize =
            parse_or(&lookup, "RELAY_MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS)?;

        let provider_name = lookup("RELAY_PROVIDER_NAME")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_NAME.to_string());

        Ok(Self {
            model: ModelClientConfig {
                api_key,
                model,
                api_base,
                system_instruction: prompts::system_instruction().to_string(),
                generation: GenerationParams::default(),
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_addr,
            provider_name,
            max_input_chars,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(raw) => parse_var(var, &raw),
        None => Ok(default),
    }
}

fn parse_var<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(var, raw))
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
    }
}
