//! Scripts for deploying the Turing subscription manager contract to the
//! Boba networks.

#![deny(missing_docs)]

pub mod artifacts;
pub mod backend;
pub mod cli;
mod commands;
pub mod config;
pub mod constants;
pub mod deployments;
pub mod errors;
pub mod utils;

pub use commands::deploy;
