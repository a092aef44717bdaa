//! # Google Sheets Adapter
//!
//! Implements [`SheetStore`](crate::store::SheetStore) over the Sheets v4 REST
//! API, authenticated as a service account.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::ServiceAccount;
pub use client::GoogleSheet;
