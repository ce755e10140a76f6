//! Property-based tests for the selection, merge, and serialization
//! invariants.
//!
//! These tests use proptest to verify invariants hold across randomly
//! generated feeds.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use restock::inventory::merge::merge;
use restock::inventory::normalize::normalize;
use restock::inventory::select::{take_matching, PrefixSet};
use restock::inventory::{product_id, Inventory, UtcTimestamp};
use restock::xml::Document;

/// Strategy for characters that appear in product IDs.
fn id_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
    ]
}

/// Strategy for product IDs.
fn product_id_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(id_char(), 1..10).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a feed's worth of product IDs.
fn id_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(product_id_strategy(), 0..max)
}

fn feed_xml(ids: &[String]) -> String {
    let mut text = String::from("<inventory><records>");
    for id in ids {
        text.push_str(&format!(
            r#"<record product-id="{id}"><allocation>5</allocation><allocation-timestamp>2024-01-01T00:00:00.000Z</allocation-timestamp><ats>5</ats></record>"#
        ));
    }
    text.push_str("</records></inventory>");
    text
}

fn inventory(ids: &[String]) -> Inventory {
    Inventory::parse_str(&feed_xml(ids), "feed.xml").expect("generated feed parses")
}

proptest! {
    /// Selection takes exactly the records whose ID starts with a supplied
    /// prefix, in document order, and leaves the rest behind.
    #[test]
    fn selection_matches_reference_filter(
        ids in id_list(12),
        prefixes in prop::collection::vec(product_id_strategy(), 1..4),
    ) {
        let mut source = inventory(&ids);
        let set = PrefixSet::parse(&prefixes.join(","));

        let taken = take_matching(&mut source, &set);
        let taken_ids: Vec<String> =
            taken.iter().map(|r| product_id(r).to_string()).collect();

        let expected: Vec<String> = ids
            .iter()
            .filter(|id| prefixes.iter().any(|p| id.starts_with(p.as_str())))
            .cloned()
            .collect();
        prop_assert_eq!(taken_ids, expected);

        let remaining: Vec<String> = ids
            .iter()
            .filter(|id| !prefixes.iter().any(|p| id.starts_with(p.as_str())))
            .cloned()
            .collect();
        let left: Vec<String> =
            source.records().map(|r| product_id(r).to_string()).collect();
        prop_assert_eq!(left, remaining);
    }

    /// Merging always leaves the target sorted ascending by product ID,
    /// with nothing lost, and sorting again changes nothing.
    #[test]
    fn merge_sorts_and_is_idempotent(
        target_ids in id_list(8),
        source_ids in id_list(8),
    ) {
        let mut target = inventory(&target_ids);
        let mut source = inventory(&source_ids);
        let records = source
            .records_container_mut()
            .unwrap()
            .extract_child_elements(|_| true);

        merge(&mut target, records).unwrap();

        let ids: Vec<String> =
            target.records().map(|r| product_id(r).to_string()).collect();
        prop_assert_eq!(ids.len(), target_ids.len() + source_ids.len());
        prop_assert!(ids.windows(2).all(|pair| pair[0] <= pair[1]));

        merge(&mut target, Vec::new()).unwrap();
        let resorted: Vec<String> =
            target.records().map(|r| product_id(r).to_string()).collect();
        prop_assert_eq!(resorted, ids);
    }

    /// An empty prefix set selects nothing at all.
    #[test]
    fn empty_prefix_set_selects_nothing(ids in id_list(8)) {
        let mut source = inventory(&ids);
        let taken = take_matching(&mut source, &PrefixSet::parse(""));
        prop_assert!(taken.is_empty());
        prop_assert_eq!(source.records().count(), ids.len());
    }

    /// Normalization is idempotent.
    #[test]
    fn normalization_is_idempotent(ids in id_list(8)) {
        let mut source = inventory(&ids);
        let mut records = source
            .records_container_mut()
            .unwrap()
            .extract_child_elements(|_| true);

        normalize(&mut records);
        let once = records.clone();
        normalize(&mut records);
        prop_assert_eq!(records, once);
    }

    /// A serialize/parse round trip preserves the tree.
    #[test]
    fn serialization_round_trips(ids in id_list(8)) {
        let doc = Document::parse_str(&feed_xml(&ids), "feed.xml").unwrap();
        let rendered = doc.serialize().unwrap();
        let reparsed = Document::parse_str(&rendered, "feed.xml").unwrap();
        prop_assert_eq!(doc, reparsed);
    }

    /// The date-only wire form is always the date prefix of the full form
    /// with a literal Z appended.
    #[test]
    fn date_z_is_the_truncated_iso_form(
        year in 2000..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        hour in 0..24u32,
        minute in 0..60u32,
    ) {
        let ts = UtcTimestamp::from_datetime(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap(),
        );
        let iso = ts.to_iso_millis();
        prop_assert_eq!(ts.to_date_z(), format!("{}Z", &iso[..10]));
    }
}
