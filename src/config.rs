use serde::Deserialize;

/// Weather provider settings, read once at startup and handed to the server.
/// Env vars: SKYCAST_API_KEY (required), SKYCAST_API_URL (optional).
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_key: String,
}

fn default_api_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

pub fn load() -> Result<Config, envy::Error> {
    envy::prefixed("SKYCAST_").from_env::<Config>()
}
