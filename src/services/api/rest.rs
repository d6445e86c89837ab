use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{ApiError, BookingApi, ResendResponse};
use crate::models::{Booking, CreateBookingRequest, Service};

/// Client for the external booking backend. The backend owns persistence,
/// verification codes, and email dispatch; we only speak its REST surface.
pub struct RestBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl RestBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Non-2xx responses are expected to carry a JSON body with a `message`
    /// field, surfaced verbatim; a missing field falls back to `fallback`.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(fallback)
            .to_string();

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BookingApi for RestBookingApi {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let response = self.client.get(self.url("/services")).send().await?;
        Self::decode(response, "Failed to fetch services").await
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError> {
        let response = self
            .client
            .post(self.url("/bookings"))
            .json(request)
            .send()
            .await?;
        Self::decode(response, "Failed to create booking").await
    }

    async fn verify_booking(&self, booking_id: &str, code: &str) -> Result<Booking, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/bookings/{booking_id}/verify")))
            .json(&json!({ "code": code }))
            .send()
            .await?;
        Self::decode(response, "Failed to verify booking code").await
    }

    async fn resend_code(&self, booking_id: &str) -> Result<ResendResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/bookings/{booking_id}/resend-code")))
            .json(&json!({}))
            .send()
            .await?;
        Self::decode(response, "Failed to resend verification code").await
    }
}
