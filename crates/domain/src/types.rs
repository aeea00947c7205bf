//! Common data types used throughout the client

use serde::{Deserialize, Serialize};

pub mod company;
pub mod contact;
pub mod deal;
pub mod document;
pub mod interaction;
pub mod stage;
pub mod task;
pub mod user;

pub use company::{Company, CompanyPayload, CompanySize, CompanySummary};
pub use contact::{Contact, ContactPayload, ContactSummary, Seniority};
pub use deal::{Deal, DealPayload, KanbanColumn, KanbanDeal, MoveStageRequest};
pub use document::{Counterparty, Document, Nda, NdaPayload, NdaStatus};
pub use interaction::{Interaction, InteractionKind, InteractionPayload};
pub use stage::{Stage, StagePayload};
pub use task::{Task, TaskPayload, TaskStatus};
pub use user::{User, UserRole};

/// Paginated list envelope returned by every collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A related record that the API returns either as a bare id or expanded
/// into the full object, depending on the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(i64),
    Full(T),
}

impl<T> Ref<T> {
    /// The bare id, when the record was not expanded.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Full(_) => None,
        }
    }

    /// The expanded record, when present.
    pub fn as_full(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Full(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn page_deserializes_with_null_links() {
        let page: Page<Item> = serde_json::from_str(
            r#"{"count": 1, "next": null, "previous": null, "results": [{"id": 7, "name": "x"}]}"#,
        )
        .unwrap();

        assert_eq!(page.count, 1);
        assert!(page.next.is_none());
        assert_eq!(page.results, vec![Item { id: 7, name: "x".to_string() }]);
    }

    #[test]
    fn page_deserializes_without_link_fields() {
        let page: Page<Item> = serde_json::from_str(r#"{"count": 0, "results": []}"#).unwrap();

        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn reference_accepts_bare_id_or_expanded_object() {
        let bare: Ref<Item> = serde_json::from_str("42").unwrap();
        assert_eq!(bare.as_id(), Some(42));
        assert!(bare.as_full().is_none());

        let full: Ref<Item> = serde_json::from_str(r#"{"id": 3, "name": "acme"}"#).unwrap();
        assert!(full.as_id().is_none());
        assert_eq!(full.as_full().map(|item| item.id), Some(3));
    }
}
