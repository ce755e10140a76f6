//! inventory::stock_date
//!
//! Staged "back in stock" date updates.
//!
//! Updates run in two phases. [`StockDatePlan::build`] resolves and
//! validates every request (the record exists, the date parses) without
//! touching the tree; [`StockDatePlan::apply`] then performs all
//! mutations. A request that fails validation therefore aborts the run
//! before anything is written, and the output file is never left holding a
//! partial batch.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::inventory::dates::{parse_date_expression, DateExprError};
use crate::inventory::{
    product_id, Inventory, InventoryError, UtcTimestamp, ATS_TAG, IN_STOCK_DATETIME_TAG,
    IN_STOCK_DATE_TAG, RECORD_TAG,
};
use crate::xml::Element;

/// Errors from building a stock-date plan.
#[derive(Debug, Error)]
pub enum StockDateError {
    /// No record's product ID starts with the requested ID.
    #[error("product '{product_id}' not found in '{}'", path.display())]
    RecordNotFound {
        product_id: String,
        path: PathBuf,
    },

    /// The operator's date expression could not be understood.
    #[error(transparent)]
    Date(#[from] DateExprError),
}

/// One operator request: a product ID and the date expression typed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDateRequest {
    pub product_id: String,
    pub expression: String,
}

/// A validated update, ready to apply.
#[derive(Debug, Clone)]
struct StockDateUpdate {
    product_id: String,
    date: UtcTimestamp,
}

/// A fully validated batch of stock-date updates.
#[derive(Debug, Clone)]
pub struct StockDatePlan {
    updates: Vec<StockDateUpdate>,
}

impl StockDatePlan {
    /// Validate every request against the target feed.
    ///
    /// Requests match records by product-ID prefix. The first request with
    /// no matching record or an unparseable date fails the whole build;
    /// nothing is mutated at this stage.
    pub fn build(
        target: &Inventory,
        requests: &[StockDateRequest],
        now: &DateTime<Utc>,
    ) -> Result<Self, StockDateError> {
        let mut updates = Vec::with_capacity(requests.len());
        for request in requests {
            let matched = target
                .records()
                .any(|record| product_id(record).starts_with(&request.product_id));
            if !matched {
                return Err(StockDateError::RecordNotFound {
                    product_id: request.product_id.clone(),
                    path: target.path().to_path_buf(),
                });
            }
            let date = parse_date_expression(&request.expression, now)?;
            updates.push(StockDateUpdate {
                product_id: request.product_id.clone(),
                date: UtcTimestamp::from_datetime(date),
            });
        }
        Ok(Self { updates })
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Apply the batch to the target feed.
    ///
    /// Every record matching a request's ID prefix receives the update. The
    /// `in-stock-date` and `in-stock-datetime` children are created
    /// immediately before `ats` when missing and updated in place when
    /// present; applying twice never duplicates them.
    pub fn apply(&self, target: &mut Inventory) -> Result<(), InventoryError> {
        let container = target.records_container_mut()?;
        for update in &self.updates {
            for record in container.child_elements_mut() {
                if record.name() != RECORD_TAG
                    || !product_id(record).starts_with(&update.product_id)
                {
                    continue;
                }
                ensure_date_child(record, IN_STOCK_DATE_TAG);
                ensure_date_child(record, IN_STOCK_DATETIME_TAG);
                record.set_child_text(IN_STOCK_DATE_TAG, &update.date.to_date_z());
                record.set_child_text(IN_STOCK_DATETIME_TAG, &update.date.to_iso_millis());
            }
        }
        Ok(())
    }
}

/// Create the named child immediately before `ats` if it does not exist.
/// A record with no `ats` child gets the new element appended instead;
/// dropping a validated update would be worse than imperfect placement.
fn ensure_date_child(record: &mut Element, tag: &str) {
    if record.find_child(tag).is_some() {
        return;
    }
    match record.position_of_child(ATS_TAG) {
        Some(index) => record.insert_element(index, Element::new(tag)),
        None => record.push_element(Element::new(tag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap()
    }

    fn target() -> Inventory {
        Inventory::parse_str(
            r#"<inventory>
  <records>
    <record product-id="100-A">
      <allocation>0</allocation>
      <allocation-timestamp>2024-01-01T00:00:00.000Z</allocation-timestamp>
      <ats>0</ats>
    </record>
    <record product-id="150-X">
      <allocation>0</allocation>
      <allocation-timestamp>2024-01-01T00:00:00.000Z</allocation-timestamp>
      <in-stock-date>2024-06-01Z</in-stock-date>
      <in-stock-datetime>2024-06-01T00:00:00.000Z</in-stock-datetime>
      <ats>0</ats>
    </record>
  </records>
</inventory>"#,
            "output.xml",
        )
        .unwrap()
    }

    fn request(id: &str, expression: &str) -> StockDateRequest {
        StockDateRequest {
            product_id: id.to_string(),
            expression: expression.to_string(),
        }
    }

    fn child_names(record: &Element) -> Vec<&str> {
        record.child_elements().map(Element::name).collect()
    }

    #[test]
    fn creates_date_children_immediately_before_ats() {
        let mut target = target();
        let plan = StockDatePlan::build(
            &target,
            &[request("100-A", "2024-12-25T00:00:00.000Z")],
            &now(),
        )
        .unwrap();
        plan.apply(&mut target).unwrap();

        let record = target.records().next().unwrap();
        assert_eq!(
            child_names(record),
            vec![
                "allocation",
                "allocation-timestamp",
                "in-stock-date",
                "in-stock-datetime",
                "ats"
            ]
        );
        assert_eq!(record.find_child("in-stock-date").unwrap().text(), "2024-12-25Z");
        assert_eq!(
            record.find_child("in-stock-datetime").unwrap().text(),
            "2024-12-25T00:00:00.000Z"
        );
    }

    #[test]
    fn existing_date_children_are_updated_not_duplicated() {
        let mut target = target();
        let plan =
            StockDatePlan::build(&target, &[request("150-X", "2025-02-14")], &now()).unwrap();
        plan.apply(&mut target).unwrap();
        plan.apply(&mut target).unwrap();

        let record = target.records().nth(1).unwrap();
        assert_eq!(
            child_names(record),
            vec![
                "allocation",
                "allocation-timestamp",
                "in-stock-date",
                "in-stock-datetime",
                "ats"
            ]
        );
        assert_eq!(record.find_child("in-stock-date").unwrap().text(), "2025-02-14Z");
    }

    #[test]
    fn prefix_request_updates_every_matching_record() {
        let mut target = target();
        let plan = StockDatePlan::build(&target, &[request("1", "2025-03-01")], &now()).unwrap();
        plan.apply(&mut target).unwrap();

        for record in target.records() {
            assert_eq!(record.find_child("in-stock-date").unwrap().text(), "2025-03-01Z");
        }
    }

    #[test]
    fn unknown_product_fails_naming_id_and_file() {
        let target = target();
        let err = StockDatePlan::build(&target, &[request("999-Z", "2025-03-01")], &now())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("999-Z"));
        assert!(message.contains("output.xml"));
        assert!(matches!(err, StockDateError::RecordNotFound { .. }));
    }

    #[test]
    fn unparseable_date_fails_the_whole_build() {
        let target = target();
        let err = StockDatePlan::build(
            &target,
            &[
                request("100-A", "2025-03-01"),
                request("150-X", "sometime soon"),
            ],
            &now(),
        )
        .unwrap_err();
        assert!(matches!(err, StockDateError::Date(_)));
    }

    #[test]
    fn record_without_ats_still_receives_the_update() {
        let mut target = Inventory::parse_str(
            r#"<records><record product-id="700-Q"><allocation>0</allocation></record></records>"#,
            "output.xml",
        )
        .unwrap();
        let plan =
            StockDatePlan::build(&target, &[request("700-Q", "2025-03-01")], &now()).unwrap();
        plan.apply(&mut target).unwrap();

        let record = target.records().next().unwrap();
        assert_eq!(record.find_child("in-stock-date").unwrap().text(), "2025-03-01Z");
        assert_eq!(
            record.find_child("in-stock-datetime").unwrap().text(),
            "2025-03-01T00:00:00.000Z"
        );
    }
}
