use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{BookingDraft, CreateBookingRequest};
use crate::services::api::BookingApi;
use crate::services::availability;

pub const CODE_LENGTH: usize = 6;
pub const SUCCESS_RESET_SECONDS: i64 = 5;
pub const SESSION_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FlowStep {
    Form,
    Verify,
    Success,
}

impl FlowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStep::Form => "form",
            FlowStep::Verify => "verify",
            FlowStep::Success => "success",
        }
    }
}

/// One visitor's passage through the booking form: collect the draft,
/// create the booking upstream, confirm the emailed code, then reset.
/// The backend alone knows and checks the verification code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingFlow {
    pub step: FlowStep,
    pub draft: BookingDraft,
    pub booking_id: Option<String>,
    pub code: String,
    pub form_error: Option<String>,
    pub verify_error: Option<String>,
    pub resend_error: Option<String>,
    pub resend_notice: Option<String>,
    pub reset_at: Option<NaiveDateTime>,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl BookingFlow {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            step: FlowStep::Form,
            draft: BookingDraft::default(),
            booking_id: None,
            code: String::new(),
            form_error: None,
            verify_error: None,
            resend_error: None,
            resend_notice: None,
            reset_at: None,
            last_activity: now,
            expires_at: now + Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn touch(&mut self, now: NaiveDateTime) {
        self.last_activity = now;
        self.expires_at = now + Duration::minutes(SESSION_TTL_MINUTES);
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    /// The success screen dismisses itself after a short delay. Applied
    /// lazily whenever the flow is loaded; everything is cleared.
    pub fn reset_if_due(&mut self, now: NaiveDateTime) {
        if self.step != FlowStep::Success {
            return;
        }
        if let Some(reset_at) = self.reset_at {
            if now >= reset_at {
                *self = Self::new(now);
            }
        }
    }

    /// Code input is constrained to digits and capped at six characters.
    pub fn set_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CODE_LENGTH)
            .collect();
    }

    /// Submit the draft. Local validation failures never reach the network;
    /// upstream rejections keep the flow on the form with the server's
    /// message shown as-is.
    pub async fn submit(&mut self, api: &dyn BookingApi, today: NaiveDate) {
        if self.step != FlowStep::Form {
            return;
        }
        self.form_error = None;

        let (Some(date), Some(time)) = (self.draft.date, self.draft.time.clone()) else {
            self.form_error =
                Some("Please select a date and time for your appointment.".to_string());
            return;
        };

        if let Some(field) = self.draft.missing_field() {
            self.form_error = Some(format!("Please fill in your {field}."));
            return;
        }

        if !availability::is_date_available(today, date) {
            self.form_error = Some(
                "That date is not available. Please pick a weekday within the next 30 days."
                    .to_string(),
            );
            return;
        }

        if !availability::is_valid_slot(&time) {
            self.form_error =
                Some("That time is not available. Please pick one of the offered slots.".to_string());
            return;
        }

        let request = compose_request(&self.draft, date, &time);

        match api.create_booking(&request).await {
            Ok(booking) => {
                self.booking_id = Some(booking.id);
                self.code.clear();
                self.verify_error = None;
                self.resend_error = None;
                self.resend_notice = None;
                self.step = FlowStep::Verify;
            }
            Err(e) => {
                self.form_error = Some(e.user_message());
            }
        }
    }

    /// Submit the emailed code. Anything other than exactly six digits is
    /// rejected before the network; an upstream rejection (wrong or expired
    /// code) keeps the flow on the verify step so the visitor can retry or
    /// ask for a resend.
    pub async fn submit_code(&mut self, api: &dyn BookingApi, now: NaiveDateTime) {
        if self.step != FlowStep::Verify {
            return;
        }
        self.verify_error = None;

        if self.code.len() != CODE_LENGTH {
            self.verify_error =
                Some("Please enter the 6-digit code from your email.".to_string());
            return;
        }

        let Some(booking_id) = self.booking_id.clone() else {
            // Verify is only ever entered after a successful create; if the
            // id is gone the only sane move is back to the form.
            self.step = FlowStep::Form;
            self.form_error = Some("Something went wrong. Please start over.".to_string());
            return;
        };

        match api.verify_booking(&booking_id, &self.code).await {
            Ok(_) => {
                self.step = FlowStep::Success;
                self.reset_at = Some(now + Duration::seconds(SUCCESS_RESET_SECONDS));
            }
            Err(e) => {
                self.verify_error = Some(e.user_message());
            }
        }
    }

    /// Ask the backend to email a fresh code. Outcome lands in its own
    /// notice/error pair, independent of the verify action.
    pub async fn resend_code(&mut self, api: &dyn BookingApi) {
        if self.step != FlowStep::Verify {
            return;
        }
        self.resend_error = None;
        self.resend_notice = None;

        let Some(booking_id) = self.booking_id.clone() else {
            return;
        };

        match api.resend_code(&booking_id).await {
            Ok(response) => {
                self.resend_notice = Some(response.message);
            }
            Err(e) => {
                self.resend_error = Some(e.user_message());
            }
        }
    }

    /// Abandon verification. Only the code and verify-side messages are
    /// cleared; the draft survives for another attempt.
    pub fn cancel_verification(&mut self) {
        if self.step != FlowStep::Verify {
            return;
        }
        self.step = FlowStep::Form;
        self.code.clear();
        self.verify_error = None;
        self.resend_error = None;
        self.resend_notice = None;
    }
}

/// "Wednesday, March 6, 2024" — the long form embedded in the composed
/// booking description.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn compose_request(draft: &BookingDraft, date: NaiveDate, time: &str) -> CreateBookingRequest {
    let description = format!(
        "Appointment scheduled for {} at {time}\n\n{}",
        format_long_date(date),
        draft.description,
    );

    CreateBookingRequest {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        description,
        service_id: draft.service_id.clone(),
        appointment_date: Some(date),
        appointment_time: Some(time.to_string()),
    }
}
