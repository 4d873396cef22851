//! Request handlers

pub mod common;
pub mod conditions;
pub mod dashboard;
pub mod forecast;
pub mod health;
pub mod suggestions;
pub mod weather;
