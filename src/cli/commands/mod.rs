//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Each handler validates its arguments, drives the domain layer in
//! [`crate::inventory`], and formats output. Handlers are the only place
//! where prompts and console output meet the document pipeline.

mod completion;
mod reconcile;

pub use completion::completions;
pub use reconcile::{collect_stock_date_requests, reconcile};
