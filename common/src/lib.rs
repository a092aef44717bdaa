//! # On-hands Common
//!
//! Shared models for the on-hands inventory.
//!
//! * **[`inventory`]**: balls, game profiles, identities, quantity vectors and the
//!   [`inventory::collection::Collection`] they aggregate into. Pure, in-memory.
//! * **[`input`]**: the local text grammars and the reformat helper.
//! * **[`config`]**: where the backing spreadsheet lives and how to authenticate.
//! * **[`error`]**: the parse and arithmetic error taxonomy.

pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
