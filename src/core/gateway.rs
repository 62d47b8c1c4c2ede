use crate::domain::model::{CreateAccountPayload, SignupRequest, UpstreamReply};
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use std::time::Duration;

/// Client for the ATProto account-creation endpoint. One instance is shared
/// across requests so reqwest can pool connections; each call is a single
/// outbound POST with no retries.
pub struct AtprotoClient {
    client: Client,
    create_account_url: String,
    timeout: Duration,
}

impl AtprotoClient {
    pub fn new(create_account_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            create_account_url,
            timeout,
        }
    }

    /// Forwards a signup to the upstream, mapping `username` to `handle`.
    ///
    /// Any 2xx reply is returned with its status and body untouched. A
    /// non-2xx reply becomes `UpstreamError` carrying the same status and
    /// the parsed body. Connection failures, timeouts and undecodable
    /// bodies each get their own variant.
    pub async fn create_account(&self, signup: SignupRequest) -> Result<UpstreamReply> {
        let payload = CreateAccountPayload::from(signup);

        tracing::debug!(
            "Forwarding account creation for handle '{}' to {}",
            payload.handle,
            self.create_account_url
        );

        let response = self
            .client
            .post(&self.create_account_url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::from_send_error(e, self.timeout))?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::TimeoutError(self.timeout)
            } else if e.is_decode() {
                GatewayError::DecodeError(e)
            } else {
                GatewayError::TransportError(e)
            }
        })?;

        if !status.is_success() {
            return Err(GatewayError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}
