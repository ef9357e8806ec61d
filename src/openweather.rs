//! Client for the OpenWeatherMap current-weather endpoint.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Subset of the provider response we care about. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct WeatherRecord {
    pub weather: Vec<ConditionEntry>,
    pub main: Measurements,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub feels_like: f64,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url,
            api_key: config.api_key,
        }
    }

    /// Fetch current weather for a coordinate pair. One GET per call, no retry.
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<WeatherRecord> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("lat", format!("{lat:.6}")),
                ("lon", format!("{lon:.6}")),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .context("Failed to reach weather provider")?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(anyhow!("Weather provider returned {}", status));
        }

        let body = response
            .text()
            .await
            .context("Failed to read weather provider response body")?;

        let record: WeatherRecord =
            serde_json::from_str(&body).context("Failed to decode weather provider JSON")?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(api_url: String) -> OpenWeatherClient {
        OpenWeatherClient::new(Config {
            api_url,
            api_key: "test-key".to_string(),
        })
    }

    #[tokio::test]
    async fn test_fetch_decodes_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("lat", "37.774900"))
            .and(query_param("lon", "-122.419400"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"main": "Clear", "description": "clear sky"}],
                "main": {"temp": 25.0, "feels_like": 26.1}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(mock_server.uri());
        let record = client.fetch(37.7749, -122.4194).await.unwrap();

        assert_eq!(record.weather[0].main, "Clear");
        assert_eq!(record.weather[0].description, "clear sky");
        assert_eq!(record.main.temp, 25.0);
        assert_eq!(record.main.feels_like, 26.1);
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client_for(mock_server.uri());
        let err = client.fetch(48.85, 2.35).await.unwrap_err();

        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(mock_server.uri());
        assert!(client.fetch(48.85, 2.35).await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        // Nothing is listening here.
        let client = client_for("http://127.0.0.1:9".to_string());
        assert!(client.fetch(48.85, 2.35).await.is_err());
    }
}
