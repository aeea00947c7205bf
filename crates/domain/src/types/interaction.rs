//! Interaction log types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel through which an interaction happened
///
/// Serialized under the wire name `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Email,
    Call,
    Meeting,
    Note,
}

/// Logged touchpoint with a deal, company, or contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: i64,
    #[serde(default)]
    pub deal: Option<i64>,
    #[serde(default)]
    pub deal_title: Option<String>,
    #[serde(default)]
    pub company: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub contact: Option<i64>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub subject: String,
    pub body: String,
    pub occurred_at: DateTime<Utc>,
    pub author: i64,
    pub author_name: String,
    pub related_entity: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by interaction create and partial-update calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct InteractionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InteractionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_under_the_type_field() {
        let payload = InteractionPayload {
            kind: Some(InteractionKind::Call),
            subject: Some("Intro call".to_string()),
            ..InteractionPayload::default()
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"type":"call","subject":"Intro call"}"#
        );
    }
}
