//! inventory::normalize
//!
//! Quantity reset for records about to be merged.

use crate::inventory::{ALLOCATION_TAG, ATS_TAG};
use crate::xml::Element;

/// Zero the `allocation` and `ats` quantities of each record.
///
/// Idempotent. A record missing either child is left as-is; the master
/// feed schema guarantees both are present.
pub fn normalize(records: &mut [Element]) {
    for record in records {
        record.set_child_text(ALLOCATION_TAG, "0");
        record.set_child_text(ATS_TAG, "0");
    }
}
