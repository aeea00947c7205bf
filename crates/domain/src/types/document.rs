//! Document and NDA types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded document, optionally attached to a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub deal: Option<i64>,
    #[serde(default)]
    pub deal_title: Option<String>,
    pub filename: String,
    pub file: String,
    #[serde(default)]
    pub file_url: Option<String>,
    pub size: i64,
    pub size_human: String,
    pub content_type: String,
    pub file_extension: String,
    pub uploaded_by: i64,
    pub uploaded_by_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Which side of the deal the NDA binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counterparty {
    Buyer,
    Seller,
    Target,
}

/// NDA signature workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NdaStatus {
    Draft,
    Sent,
    Signed,
}

/// NDA tracked against a deal, optionally backed by an uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nda {
    pub id: i64,
    pub deal: i64,
    pub deal_title: String,
    pub counterparty: Counterparty,
    pub status: NdaStatus,
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file: Option<i64>,
    #[serde(default)]
    pub file_details: Option<Document>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by NDA create and partial-update calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct NdaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<Counterparty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NdaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
