//! Typed resource services
//!
//! One thin wrapper per CRM entity. Every method is a single API client
//! call with a fixed path template; list endpoints take query parameters
//! that are URL-encoded here. No business logic lives at this layer.

pub mod companies;
pub mod contacts;
pub mod deals;
pub mod documents;
pub mod interactions;
pub mod ndas;
pub mod stages;
pub mod tasks;

pub use companies::CompaniesApi;
pub use contacts::ContactsApi;
pub use deals::DealsApi;
pub use documents::DocumentsApi;
pub use interactions::InteractionsApi;
pub use ndas::NdasApi;
pub use stages::StagesApi;
pub use tasks::TasksApi;

use url::form_urlencoded;

/// Append an encoded query string when any parameters are present.
fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish();
    format!("{path}?{query}")
}
