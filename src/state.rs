use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::services::api::BookingApi;
use crate::services::flow::BookingFlow;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn BookingApi>,
    /// In-flight booking flows keyed by session id. The lock is never held
    /// across an await; handlers clone a flow out and write it back.
    pub sessions: Mutex<HashMap<String, BookingFlow>>,
}
