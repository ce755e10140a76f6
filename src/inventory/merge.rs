//! inventory::merge
//!
//! Record relocation into the target feed, ID ordering, and allocation
//! timestamp stamping.

use std::collections::HashMap;

use crate::inventory::{
    product_id, Inventory, InventoryError, UtcTimestamp, ALLOCATION_TIMESTAMP_TAG, RECORD_TAG,
};
use crate::xml::Element;

/// What a merge did to the target feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of records moved into the target.
    pub appended: usize,
    /// Product IDs that this merge caused to appear more than once, in
    /// sorted order. Duplicates are kept, not collapsed; the caller decides
    /// how loudly to complain.
    pub duplicates: Vec<String>,
}

/// Move the given records into the target's `records` container and
/// re-sort the full record list ascending by product ID.
///
/// The records must already be detached from their source document; they
/// are owned here and appended, never copied. Sorting is stable and uses
/// ordinal string comparison, so records with equal IDs keep their
/// relative order (pre-existing entries ahead of newly appended ones).
pub fn merge(target: &mut Inventory, records: Vec<Element>) -> Result<MergeReport, InventoryError> {
    let container = target.records_container_mut()?;

    let mut existing: HashMap<String, usize> = HashMap::new();
    for record in container.child_elements() {
        if record.name() == RECORD_TAG {
            *existing.entry(product_id(record).to_string()).or_insert(0) += 1;
        }
    }

    let appended = records.len();
    let mut duplicates = Vec::new();
    let mut incoming: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        let id = product_id(record);
        let seen = incoming.entry(id).or_insert(0);
        *seen += 1;
        if existing.get(id).copied().unwrap_or(0) > 0 || *seen > 1 {
            duplicates.push(id.to_string());
        }
    }
    duplicates.sort();
    duplicates.dedup();

    for record in records {
        container.push_element(record);
    }
    sort_records(container);

    Ok(MergeReport {
        appended,
        duplicates,
    })
}

/// Stamp every record's `allocation-timestamp` with the given time, in the
/// full ISO-8601 millisecond form. Records without the child are skipped.
pub fn stamp_allocation_timestamps(
    target: &mut Inventory,
    ts: &UtcTimestamp,
) -> Result<(), InventoryError> {
    let stamp = ts.to_iso_millis();
    let container = target.records_container_mut()?;
    for record in container.child_elements_mut() {
        if record.name() == RECORD_TAG {
            record.set_child_text(ALLOCATION_TIMESTAMP_TAG, &stamp);
        }
    }
    Ok(())
}

/// Stable-sort the container's records by product ID. Non-record children
/// (comments, stray elements) stay where they are, ahead of the sorted
/// record run.
fn sort_records(container: &mut Element) {
    let mut records = container.extract_child_elements(|elem| elem.name() == RECORD_TAG);
    records.sort_by(|a, b| product_id(a).cmp(product_id(b)));
    for record in records {
        container.push_element(record);
    }
}
