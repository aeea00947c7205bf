//! API client for the Dealflow resource endpoints
//!
//! Single choke point for authenticated requests against the resource API:
//! header construction, JSON/multipart body handling, and response
//! classification. The auth endpoints have their own client in
//! [`crate::auth`] because they hit a different base URL and never carry a
//! stored bearer token.

pub mod auth;
pub mod client;
pub mod errors;

pub use auth::AccessTokenProvider;
pub use client::{ApiClient, UploadForm};
pub use errors::ApiError;

pub(crate) use client::classify;
