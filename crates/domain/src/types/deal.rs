//! Deal and kanban board types
//!
//! Deals reference their company, owner, and stage either as bare ids or as
//! embedded objects depending on the endpoint, so those fields use [`Ref`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::CompanySummary;
use super::stage::Stage;
use super::user::User;
use super::Ref;

/// Deal record in the M&A pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub company: Ref<CompanySummary>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub owner: Ref<User>,
    #[serde(default)]
    pub owner_name: Option<String>,
    pub stage: Ref<Stage>,
    #[serde(default)]
    pub stage_name: Option<String>,
    #[serde(default)]
    pub amount_estimate: Option<f64>,
    pub probability: f64,
    #[serde(default)]
    pub expected_value: Option<f64>,
    #[serde(default)]
    pub next_action_at: Option<DateTime<Utc>>,
    pub is_overdue: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interactions_count: Option<i64>,
    #[serde(default)]
    pub documents_count: Option<i64>,
    #[serde(default)]
    pub tasks_count: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact deal card shown on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanDeal {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub amount_estimate: Option<f64>,
    pub probability: f64,
    #[serde(default)]
    pub next_action_at: Option<DateTime<Utc>>,
    pub is_overdue: bool,
}

/// One stage column of the kanban snapshot, with its ordered deals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub stage: Stage,
    pub deals: Vec<KanbanDeal>,
    pub count: i64,
}

/// Fields accepted by deal create and partial-update calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct DealPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PATCH /deals/<id>/move_stage/`
#[derive(Debug, Clone, Serialize)]
pub struct MoveStageRequest {
    pub stage_id: i64,
    pub update_probability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_deserializes_with_bare_references() {
        let deal: Deal = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Project Atlas",
                "company": 7,
                "company_name": "Acme Holdings",
                "owner": 3,
                "owner_name": "Ana Diaz",
                "stage": 2,
                "stage_name": "Due Diligence",
                "amount_estimate": 1500000.0,
                "probability": 40.0,
                "expected_value": 600000.0,
                "next_action_at": "2024-05-01T09:00:00Z",
                "is_overdue": false,
                "description": null,
                "created_at": "2024-01-10T12:00:00Z",
                "updated_at": "2024-03-02T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.company.as_id(), Some(7));
        assert_eq!(deal.stage.as_id(), Some(2));
        assert_eq!(deal.company_name.as_deref(), Some("Acme Holdings"));
        assert!(deal.tasks_count.is_none());
    }

    #[test]
    fn kanban_column_deserializes_full_snapshot() {
        let columns: Vec<KanbanColumn> = serde_json::from_str(
            r#"[{
                "stage": {
                    "id": 1,
                    "name": "Sourcing",
                    "order": 1,
                    "is_closed": false,
                    "is_won": false,
                    "default_probability": 10.0,
                    "deals_count": 1,
                    "created_at": "2024-01-01T00:00:00Z"
                },
                "deals": [{
                    "id": 5,
                    "title": "Project Beacon",
                    "company_name": "Beacon SA",
                    "owner_name": "Lee Wong",
                    "amount_estimate": null,
                    "probability": 10.0,
                    "next_action_at": null,
                    "is_overdue": true
                }],
                "count": 1
            }]"#,
        )
        .unwrap();

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].stage.name, "Sourcing");
        assert_eq!(columns[0].deals[0].id, 5);
        assert!(columns[0].deals[0].is_overdue);
    }

    #[test]
    fn payload_skips_unset_fields() {
        let payload =
            DealPayload { title: Some("Renamed".to_string()), ..DealPayload::default() };

        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"title":"Renamed"}"#);
    }
}
