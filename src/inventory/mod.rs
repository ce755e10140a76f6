//! inventory
//!
//! Domain logic for inventory allocation feeds.
//!
//! # Modules
//!
//! - [`document`] - [`Inventory`]: a feed document plus its source path
//! - [`select`] - Product-ID prefix selection of records
//! - [`normalize`] - Zeroing of allocation quantities
//! - [`merge`] - Record relocation, sorting, and timestamp stamping
//! - [`stock_date`] - Staged "back in stock" date updates
//! - [`dates`] - Operator date-expression parsing
//! - [`timestamp`] - UTC timestamps and the feed's wire formats
//!
//! # Feed schema
//!
//! A feed is an XML document whose `records` container holds `record`
//! elements. A record is identified by its `product-id` attribute and
//! carries `allocation`, `ats`, and `allocation-timestamp` children, plus
//! optional `in-stock-date` and `in-stock-datetime` children.

pub mod dates;
pub mod document;
pub mod merge;
pub mod normalize;
pub mod select;
pub mod stock_date;
pub mod timestamp;

pub use document::{product_id, Inventory, InventoryError};
pub use select::PrefixSet;
pub use timestamp::UtcTimestamp;

/// Container element holding the feed's records.
pub const RECORDS_TAG: &str = "records";
/// A single inventory record.
pub const RECORD_TAG: &str = "record";
/// Record identity and sort key.
pub const PRODUCT_ID_ATTR: &str = "product-id";
/// Allocated stock quantity.
pub const ALLOCATION_TAG: &str = "allocation";
/// Available-to-sell quantity.
pub const ATS_TAG: &str = "ats";
/// When the allocation was last reconciled.
pub const ALLOCATION_TIMESTAMP_TAG: &str = "allocation-timestamp";
/// Back-in-stock date, date-only compatibility form.
pub const IN_STOCK_DATE_TAG: &str = "in-stock-date";
/// Back-in-stock date, full date-time form.
pub const IN_STOCK_DATETIME_TAG: &str = "in-stock-datetime";
