#![cfg(test)]
//! Integration tests for the sync engine, run against an in-memory sheet.

mod support;
mod sync;
