use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DeliveryReceipt, FailureKind, GatewayError, PushBatch};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/api/send-push".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam to the external push-delivery collaborator.
#[async_trait::async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, batch: &PushBatch) -> Result<DeliveryReceipt, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpPushGateway {
    settings: GatewaySettings,
}

impl HttpPushGateway {
    pub fn new(settings: GatewaySettings) -> Self {
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

#[derive(Serialize)]
struct PushRequestBody<'a> {
    #[serde(rename = "userIds")]
    user_ids: &'a [String],
    message: &'a str,
}

#[derive(Deserialize)]
struct PushResponseBody {
    #[serde(default)]
    results: Option<Vec<PushResultEntry>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct PushResultEntry {
    #[serde(default)]
    success: bool,
}

#[async_trait::async_trait]
impl PushGateway for HttpPushGateway {
    async fn send(&self, batch: &PushBatch) -> Result<DeliveryReceipt, GatewayError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| GatewayError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .json(&PushRequestBody {
                user_ids: &batch.user_ids,
                message: &batch.message,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let body: Option<PushResponseBody> = serde_json::from_slice(&bytes).ok();

        // A collaborator-reported failure wins over the bare status code so
        // its message reaches the operator.
        if let Some(error) = body.as_ref().and_then(|parsed| parsed.error.clone()) {
            return Err(GatewayError::new(FailureKind::Rejected, error));
        }
        if !status.is_success() {
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let Some(body) = body else {
            return Err(GatewayError::new(
                FailureKind::MalformedResponse,
                "response body is not valid JSON",
            ));
        };

        let results = body.results.unwrap_or_default();
        Ok(DeliveryReceipt {
            success_count: results.iter().filter(|entry| entry.success).count(),
            total: results.len(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}
