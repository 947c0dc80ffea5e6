// Shared utilities: configuration, errors, interrupts, logging and name validation

pub mod config;
pub mod error;
pub mod interrupt;
pub mod logger;
pub mod validation;
