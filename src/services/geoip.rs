use crate::models::LocationInfo;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when looking up the caller's location
///
/// Callers recover from every variant by substituting configured defaults;
/// the variants exist so logs can tell transport failures apart from
/// malformed payloads.
#[derive(Debug, Error)]
pub enum GeoIpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Raw payload shape of the IP info endpoint
#[derive(Debug, Deserialize)]
struct IpInfoPayload {
    country: Option<String>,
    /// "lat,lon" pair as a single string
    loc: Option<String>,
}

/// Client for the public IP-to-location lookup service
pub struct GeoIpClient {
    endpoint: String,
    client: Client,
}

impl GeoIpClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Look up the caller's country code and latitude
    ///
    /// One outbound call, no retries.
    pub async fn lookup(&self) -> Result<LocationInfo, GeoIpError> {
        tracing::debug!("Looking up caller location via {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(GeoIpError::Api(format!(
                "IP lookup failed: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let payload: IpInfoPayload = serde_json::from_str(&body)
            .map_err(|e| GeoIpError::InvalidResponse(format!("bad JSON payload: {}", e)))?;

        let country_code = payload
            .country
            .ok_or_else(|| GeoIpError::InvalidResponse("missing country field".into()))?;
        let loc = payload
            .loc
            .ok_or_else(|| GeoIpError::InvalidResponse("missing loc field".into()))?;
        let latitude = parse_latitude(&loc)?;

        tracing::debug!("Resolved caller to {} (lat {})", country_code, latitude);

        Ok(LocationInfo {
            country_code,
            latitude,
        })
    }
}

/// Parse the latitude half of an ipinfo-style "lat,lon" string
fn parse_latitude(loc: &str) -> Result<f64, GeoIpError> {
    loc.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoIpError::InvalidResponse(format!("malformed loc field: {}", loc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latitude() {
        assert_eq!(parse_latitude("48.8566,2.3522").unwrap(), 48.8566);
        assert_eq!(parse_latitude("-33.86, 151.20").unwrap(), -33.86);
        assert!(parse_latitude("not-a-number,2.35").is_err());
        assert!(parse_latitude("").is_err());
    }

    #[tokio::test]
    async fn test_lookup_parses_country_and_latitude() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"country":"FR","loc":"48.8566,2.3522","city":"Paris"}"#)
            .create_async()
            .await;

        let client = GeoIpClient::new(format!("{}/json", server.url()), 2);
        let info = client.lookup().await.unwrap();

        assert_eq!(info.country_code, "FR");
        assert!((info.latitude - 48.8566).abs() < 1e-9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_rejects_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/json")
            .with_status(200)
            .with_body(r#"{"country":"FR"}"#)
            .create_async()
            .await;

        let client = GeoIpClient::new(format!("{}/json", server.url()), 2);
        let err = client.lookup().await.unwrap_err();

        assert!(matches!(err, GeoIpError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_lookup_reports_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/json")
            .with_status(500)
            .create_async()
            .await;

        let client = GeoIpClient::new(format!("{}/json", server.url()), 2);
        let err = client.lookup().await.unwrap_err();

        assert!(matches!(err, GeoIpError::Api(_)));
    }

    #[tokio::test]
    async fn test_lookup_reports_connection_failures() {
        // Nothing listens on this port
        let client = GeoIpClient::new("http://127.0.0.1:9/json".to_string(), 1);
        let err = client.lookup().await.unwrap_err();

        assert!(matches!(err, GeoIpError::Request(_)));
    }
}
