//! Company types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::ContactSummary;

/// Size bucket used when qualifying a target company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Company record with contact/deal counts and optional embedded contacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub legal_id: String,
    pub country: String,
    #[serde(default)]
    pub website: Option<String>,
    pub sector: String,
    pub size: CompanySize,
    #[serde(default)]
    pub notes: Option<String>,
    pub contacts_count: i64,
    pub deals_count: i64,
    #[serde(default)]
    pub contacts: Option<Vec<ContactSummary>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact company reference embedded in deal responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: i64,
    pub name: String,
    pub sector: String,
    pub country: String,
}

/// Fields accepted by company create and partial-update calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<CompanySize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
