use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingDraft, Service};
use crate::services::availability::{self, MonthView};
use crate::services::flow::{BookingFlow, FlowStep};
use crate::state::AppState;

// GET /api/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.api.list_services().await?;
    Ok(Json(services))
}

// GET /api/slots
pub async fn list_slots() -> Json<Vec<String>> {
    Json(availability::time_slots())
}

// GET /api/availability?year=&month=
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Serialize)]
pub struct DayAvailability {
    pub day: u32,
    pub date: NaiveDate,
    pub available: bool,
}

#[derive(Serialize)]
pub struct MonthAvailability {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<DayAvailability>,
}

pub async fn month_availability(
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<MonthAvailability>, AppError> {
    let today = Utc::now().date_naive();

    let view = match (query.year, query.month) {
        (Some(year), Some(month)) => MonthView::new(year, month)
            .ok_or_else(|| AppError::BadRequest("month must be between 1 and 12".to_string()))?,
        (None, None) => MonthView::containing(today),
        _ => {
            return Err(AppError::BadRequest(
                "year and month must be given together".to_string(),
            ))
        }
    };

    let days = view
        .dates()
        .into_iter()
        .map(|date| DayAvailability {
            day: date.day(),
            date,
            available: availability::is_date_available(today, date),
        })
        .collect();

    Ok(Json(MonthAvailability {
        year: view.year,
        month: view.month,
        leading_blanks: view.leading_blanks(),
        days,
    }))
}

// ── Flow sessions ──

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// The flow state as the booking page renders it.
#[derive(Serialize)]
pub struct FlowResponse {
    pub step: &'static str,
    pub draft: BookingDraft,
    pub booking_id: Option<String>,
    pub code: String,
    pub form_error: Option<String>,
    pub verify_error: Option<String>,
    pub resend_error: Option<String>,
    pub resend_notice: Option<String>,
}

impl From<&BookingFlow> for FlowResponse {
    fn from(flow: &BookingFlow) -> Self {
        Self {
            step: flow.step.as_str(),
            draft: flow.draft.clone(),
            booking_id: flow.booking_id.clone(),
            code: flow.code.clone(),
            form_error: flow.form_error.clone(),
            verify_error: flow.verify_error.clone(),
            resend_error: flow.resend_error.clone(),
            resend_notice: flow.resend_notice.clone(),
        }
    }
}

// POST /api/booking/session
pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let now = Utc::now().naive_utc();
    let session_id = uuid::Uuid::new_v4().to_string();

    let mut sessions = state.sessions.lock().unwrap();
    sessions.retain(|_, flow| !flow.is_expired(now));
    sessions.insert(session_id.clone(), BookingFlow::new(now));

    tracing::info!(session_id = %session_id, "booking session created");
    Json(SessionResponse { session_id })
}

/// Clone the flow out so the map lock is not held across the remote call.
/// Due success-resets and expiry are applied here, on load.
fn load_flow(
    state: &AppState,
    session_id: &str,
    now: NaiveDateTime,
) -> Result<BookingFlow, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    match sessions.get_mut(session_id) {
        Some(flow) if !flow.is_expired(now) => {
            flow.reset_if_due(now);
            flow.touch(now);
            Ok(flow.clone())
        }
        _ => {
            sessions.remove(session_id);
            Err(AppError::SessionNotFound)
        }
    }
}

/// Last write wins. Concurrent verify and resend on one session may race;
/// each action only carries its own messages, so this is acceptable.
fn store_flow(state: &AppState, session_id: &str, flow: BookingFlow) {
    let mut sessions = state.sessions.lock().unwrap();
    sessions.insert(session_id.to_string(), flow);
}

// GET /api/booking/:id
pub async fn get_flow(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<FlowResponse>, AppError> {
    let now = Utc::now().naive_utc();
    let flow = load_flow(&state, &session_id, now)?;
    Ok(Json(FlowResponse::from(&flow)))
}

// POST /api/booking/:id/submit
#[derive(Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub description: String,
    pub service_id: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<FlowResponse>, AppError> {
    let now = Utc::now().naive_utc();
    let today = now.date();

    let mut flow = load_flow(&state, &session_id, now)?;
    flow.draft = BookingDraft {
        name: request.name,
        email: request.email,
        phone: request.phone,
        description: request.description,
        service_id: request.service_id,
        date: request.date,
        time: request.time,
    };
    flow.submit(state.api.as_ref(), today).await;

    if flow.step == FlowStep::Verify {
        tracing::info!(session_id = %session_id, booking_id = ?flow.booking_id, "booking created, awaiting verification");
    }

    let response = FlowResponse::from(&flow);
    store_flow(&state, &session_id, flow);
    Ok(Json(response))
}

// POST /api/booking/:id/verify
#[derive(Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<FlowResponse>, AppError> {
    let now = Utc::now().naive_utc();

    let mut flow = load_flow(&state, &session_id, now)?;
    flow.set_code(&request.code);
    flow.submit_code(state.api.as_ref(), now).await;

    if flow.step == FlowStep::Success {
        tracing::info!(session_id = %session_id, "booking verified");
    }

    let response = FlowResponse::from(&flow);
    store_flow(&state, &session_id, flow);
    Ok(Json(response))
}

// POST /api/booking/:id/resend
pub async fn resend(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<FlowResponse>, AppError> {
    let now = Utc::now().naive_utc();

    let mut flow = load_flow(&state, &session_id, now)?;
    flow.resend_code(state.api.as_ref()).await;

    let response = FlowResponse::from(&flow);
    store_flow(&state, &session_id, flow);
    Ok(Json(response))
}

// POST /api/booking/:id/back
pub async fn back(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<FlowResponse>, AppError> {
    let now = Utc::now().naive_utc();

    let mut flow = load_flow(&state, &session_id, now)?;
    flow.cancel_verification();

    let response = FlowResponse::from(&flow);
    store_flow(&state, &session_id, flow);
    Ok(Json(response))
}
