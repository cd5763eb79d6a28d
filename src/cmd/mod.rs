//! Command module structure for the validators CLI

pub mod check;
pub mod config;
pub mod list;
