//! Studio Core — shared domain types.
//!
//! This crate defines the appointment record, the repository contract and
//! the error taxonomy that every other crate depends on. It contains no
//! infrastructure code.

pub mod appointment;
pub mod command;
pub mod error;
pub mod repository;
pub mod search;
