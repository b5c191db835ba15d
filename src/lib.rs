//! GitMatch terminal client.
//!
//! Lets a visitor enter two GitHub usernames and view an AI-generated
//! compatibility report fetched from the GitMatch backend and validated
//! against a fixed contract before display.
//!
//! # Modules
//!
//! - `config`: Environment configuration.
//! - `errors`: Comparison error taxonomy.
//! - `form`: Headless submission-form state machine.
//! - `models`: Request key and response contract types.
//! - `query`: Request-keyed memoization of comparison outcomes.
//! - `services`: HTTP clients (comparison endpoint, GitHub avatar lookup).
//! - `tui`: Terminal surface.

pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod query;
pub mod services;
pub mod tui;
