//! inventory::select
//!
//! Product-ID prefix selection.
//!
//! Selection is a typed predicate over the `product-id` attribute rather
//! than a query string built from operator input, so IDs containing
//! selector metacharacters cannot change the meaning of the match.

use crate::inventory::{product_id, Inventory, RECORD_TAG};
use crate::xml::Element;

/// A set of product-ID prefixes entered by the operator.
///
/// Matching is case-sensitive exact-prefix, ORed across the set. A record's
/// membership depends only on its own ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: Vec<String>,
}

impl PrefixSet {
    /// Parse a comma-separated list, trimming whitespace around each item
    /// and dropping empty items. `"100, 200-"` yields two prefixes; `""`
    /// and `" , ,"` yield an empty set.
    pub fn parse(raw: &str) -> Self {
        let prefixes = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        Self { prefixes }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether the given product ID starts with any prefix in the set.
    pub fn matches(&self, product_id: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| product_id.starts_with(prefix))
    }
}

/// Remove and return, in document order, every record in the source feed
/// whose product ID matches the prefix set. Non-matching records stay
/// behind in the source tree.
pub fn take_matching(source: &mut Inventory, prefixes: &PrefixSet) -> Vec<Element> {
    match source.records_container_mut() {
        Ok(container) => container.extract_child_elements(|elem| {
            elem.name() == RECORD_TAG && prefixes.matches(product_id(elem))
        }),
        // Container presence is validated at load.
        Err(_) => Vec::new(),
    }
}
