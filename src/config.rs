use crate::copywriter::DEFAULT_COPY_MODEL;
use crate::vision::DEFAULT_VISION_MODEL;

/// Runtime configuration loaded from environment variables.
///
/// The two API keys are mandatory; everything else has defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Credential for the Gemini vision service.
    pub gemini_api_key: String,
    /// Credential for the Groq text-generation service.
    pub groq_api_key: String,
    /// Base URL of the Gemini API (default: `https://generativelanguage.googleapis.com`).
    pub gemini_base_url: String,
    /// Base URL of the Groq OpenAI-compatible API (default: `https://api.groq.com/openai`).
    pub groq_base_url: String,
    /// Vision model identifier (default: `gemini-3-flash-preview`).
    pub vision_model: String,
    /// Copy model identifier (default: `llama-3.3-70b-versatile`).
    pub copy_model: String,
    /// Timeout applied to each outbound inference call, in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Fatal configuration problems detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required API credential is absent from the environment.
    #[error("missing required credential {0}; set it in the environment or a .env file")]
    MissingCredential(&'static str),

    /// An optional variable is present but unparseable.
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `GEMINI_API_KEY`       | *(required)*                                  |
    /// | `GROQ_API_KEY`         | *(required)*                                  |
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `3000`                                        |
    /// | `GEMINI_BASE_URL`      | `https://generativelanguage.googleapis.com`   |
    /// | `GROQ_BASE_URL`        | `https://api.groq.com/openai`                 |
    /// | `VISION_MODEL`         | `gemini-3-flash-preview`                      |
    /// | `COPY_MODEL`           | `llama-3.3-70b-versatile`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a map instead of touching
    /// process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential("GEMINI_API_KEY"))?;
        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential("GROQ_API_KEY"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                reason: format!("`{raw}` is not a valid port number"),
            })?,
            None => 3000,
        };

        let gemini_base_url = lookup("GEMINI_BASE_URL")
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".into());
        let groq_base_url =
            lookup("GROQ_BASE_URL").unwrap_or_else(|| "https://api.groq.com/openai".into());

        let vision_model = lookup("VISION_MODEL").unwrap_or_else(|| DEFAULT_VISION_MODEL.into());
        let copy_model = lookup("COPY_MODEL").unwrap_or_else(|| DEFAULT_COPY_MODEL.into());

        let request_timeout_secs: u64 = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                reason: format!("`{raw}` is not a valid number of seconds"),
            })?,
            None => 30,
        };

        Ok(Self {
            host,
            port,
            gemini_api_key,
            groq_api_key,
            gemini_base_url,
            groq_base_url,
            vision_model,
            copy_model,
            request_timeout_secs,
        })
    }
}
