pub mod rest;

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::{Booking, CreateBookingRequest, Service};

/// What a failed call means for the visitor. Server-reported rejections
/// carry a message meant to be shown verbatim; everything else collapses
/// to a generic retry prompt.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

impl ApiError {
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResendResponse {
    pub message: String,
}

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError>;

    async fn verify_booking(&self, booking_id: &str, code: &str) -> Result<Booking, ApiError>;

    async fn resend_code(&self, booking_id: &str) -> Result<ResendResponse, ApiError>;
}
