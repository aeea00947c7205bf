//! Pipeline stage types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered pipeline stage with its default win probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: i64,
    pub name: String,
    pub order: i64,
    pub is_closed: bool,
    pub is_won: bool,
    pub default_probability: f64,
    pub deals_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted by stage create and partial-update calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct StagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_won: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_probability: Option<f64>,
}
