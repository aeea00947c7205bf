//! HTTP transport wrapper
//!
//! Keeps `reqwest` behind one seam so the rest of the crate only deals in
//! request builders and classified errors.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
