use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable offering as returned by the booking backend. Read-only from
/// our side; we fetch the list and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
