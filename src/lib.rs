//! Restock - a CLI for reconciling inventory allocation XML feeds
//!
//! Restock merges selected records from a master inventory feed into an
//! existing output feed: records are chosen by product-ID prefix, their
//! allocation quantities are zeroed, the merged record list is re-sorted by
//! product ID, and an operator can interactively stamp "back in stock"
//! dates on individual products before the result is written.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the
//!   reconcile flow)
//! - [`inventory`] - Domain logic: selection, normalization, merge/sort,
//!   stock-date planning, date-expression parsing
//! - [`xml`] - Small mutable XML tree with indented serialization
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Restock maintains the following invariants:
//!
//! 1. A record belongs to exactly one document at a time; merging moves
//!    records, it never copies them
//! 2. The output document's records are always sorted ascending by
//!    `product-id` after a merge
//! 3. Interactive stock-date updates are validated in full before any
//!    mutation is applied, so a failed run never leaves a half-updated file
//! 4. Unparseable date expressions abort the run; an invalid date is never
//!    written into the tree

pub mod cli;
pub mod inventory;
pub mod ui;
pub mod xml;
