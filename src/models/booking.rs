use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Service;

/// A booking as confirmed by the backend. Created by the create call,
/// flipped to verified by the verify call; we never mutate it locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub status: BookingStatus,
    pub service_id: String,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub code_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// What the visitor has typed so far. Lives in the flow session and is
/// discarded once the booking is verified or the session lapses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub service_id: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingDraft {
    /// First required contact field that is still blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.email.trim().is_empty() {
            return Some("email");
        }
        if self.phone.trim().is_empty() {
            return Some("phone number");
        }
        if self.service_id.trim().is_empty() {
            return Some("service");
        }
        None
    }
}

/// Wire body for POST /bookings. The structured appointment fields are the
/// authoritative schedule; the description also embeds it as readable text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
}
