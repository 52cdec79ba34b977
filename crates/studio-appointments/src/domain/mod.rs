//! Domain layer: commands and the validation gateway.

pub mod commands;
pub mod validation;
