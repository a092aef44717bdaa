//! # On-hands Core
//!
//! Keeps a [`Collection`](onhands_common::inventory::Collection) in step with
//! the remote on-hands sheet.
//!
//! * **[`codec`]**: one sheet row to one `(Identity, QuantityVector)` and back.
//! * **[`store`]**: the [`store::SheetStore`] port the engine talks through.
//! * **[`sync`]**: the read / write protocol.
//! * **[`sheets`]**: the Google Sheets implementation of the port.

pub mod codec;
pub mod sheets;
pub mod store;
pub mod sync;
