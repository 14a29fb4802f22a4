use std::time::Duration;

use serde::Deserialize;

use crate::{FailureKind, GatewayError};

#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/api/profiles".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Read-only view of the external user directory.
#[async_trait::async_trait]
pub trait RosterDirectory: Send + Sync {
    /// Returns the known recipient identifiers, in directory order.
    async fn fetch_ids(&self) -> Result<Vec<String>, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpRosterDirectory {
    settings: RosterSettings,
}

impl HttpRosterDirectory {
    pub fn new(settings: RosterSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GatewayError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::new(FailureKind::Network, err.to_string()))
    }
}

/// Directory records carry more fields than the identifier; only `id` is
/// consumed here.
#[derive(Deserialize)]
struct ProfileRecord {
    id: String,
}

#[async_trait::async_trait]
impl RosterDirectory for HttpRosterDirectory {
    async fn fetch_ids(&self) -> Result<Vec<String>, GatewayError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| GatewayError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let records: Vec<ProfileRecord> = response
            .json()
            .await
            .map_err(|err| GatewayError::new(FailureKind::MalformedResponse, err.to_string()))?;

        Ok(records.into_iter().map(|record| record.id).collect())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}
