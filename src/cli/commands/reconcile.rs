//! reconcile - merge master records into the output feed
//!
//! The one real command. Loads the two feeds, prompts the operator for
//! product-ID prefixes to merge, relocates and normalizes the matching
//! records, re-sorts the output, stamps allocation timestamps, runs the
//! optional stock-date update flow, and writes the result.
//!
//! When `-i` and `-o` name the same file the tool runs in single-file
//! mode: one document, no merge, and the serialized result goes to stdout
//! instead of back to disk.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::inventory::merge::{merge, stamp_allocation_timestamps};
use crate::inventory::normalize::normalize;
use crate::inventory::select::{take_matching, PrefixSet};
use crate::inventory::stock_date::{StockDatePlan, StockDateRequest};
use crate::inventory::{Inventory, UtcTimestamp};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Reconcile the master feed at `input` into the output feed at `output`.
pub fn reconcile(ctx: &Context, input: &Path, output_path: &Path) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let single_file = same_file(input, output_path);

    let mut target = Inventory::load(output_path)
        .with_context(|| format!("failed to load output feed '{}'", output_path.display()))?;

    if single_file {
        output::debug("input and output are the same file; merge skipped", verbosity);
    } else {
        let mut source = Inventory::load(input)
            .with_context(|| format!("failed to load input feed '{}'", input.display()))?;

        let raw = prompts::input(
            "Enter master product ID(s) to add to output file (comma separated):",
            Some(""),
            ctx.interactive,
        )?;
        let prefixes = PrefixSet::parse(&raw);

        if prefixes.is_empty() {
            output::debug("no product-ID prefixes supplied; merge skipped", verbosity);
        } else {
            let mut selected = take_matching(&mut source, &prefixes);
            output::debug(
                format!(
                    "{} record(s) matched {} prefix(es)",
                    selected.len(),
                    prefixes.len()
                ),
                verbosity,
            );
            normalize(&mut selected);
            let report = merge(&mut target, selected)?;
            for id in &report.duplicates {
                output::warn(
                    format!(
                        "product '{}' now appears more than once in '{}'",
                        id,
                        output_path.display()
                    ),
                    verbosity,
                );
            }
        }
    }

    let now = UtcTimestamp::now();
    stamp_allocation_timestamps(&mut target, &now)?;

    let requests = collect_stock_date_requests(ctx)?;
    if !requests.is_empty() {
        // Validate the whole batch before mutating anything.
        let plan = StockDatePlan::build(&target, &requests, now.as_datetime())
            .context("back in stock update failed")?;
        plan.apply(&mut target)?;
        output::debug(format!("applied {} stock-date update(s)", plan.len()), verbosity);
    }

    if single_file {
        print!("{}", target.serialize()?);
    } else {
        output::print(
            format!("Writing output to {}", output_path.display()),
            verbosity,
        );
        target.write()?;
    }

    Ok(())
}

/// Run the interactive stock-date flow and return the requests to apply.
///
/// Mirrors the operator conversation: confirm the update round, collect
/// IDs, choose shared-or-individual dates, then collect the dates. An
/// empty individual date skips that ID; an empty shared date skips the
/// whole set.
pub fn collect_stock_date_requests(ctx: &Context) -> Result<Vec<StockDateRequest>> {
    let wants_updates = prompts::confirm(
        r#"Do you want to set any "back in stock" dates for any products?"#,
        false,
        ctx.interactive,
    )?;
    if !wants_updates {
        return Ok(Vec::new());
    }

    let raw = prompts::input(
        "Enter product ID(s) you'd like to update (comma separated):",
        Some(""),
        ctx.interactive,
    )?;
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let shared = prompts::confirm(
        r#"Should the same "back in stock" date be used for all of these products?"#,
        true,
        ctx.interactive,
    )?;

    let mut requests = Vec::new();
    if shared {
        let date = prompts::input(
            r#"Enter the "back in stock" date for these products:"#,
            Some(""),
            ctx.interactive,
        )?;
        let date = date.trim();
        if !date.is_empty() {
            for id in ids {
                requests.push(StockDateRequest {
                    product_id: id,
                    expression: date.to_string(),
                });
            }
        }
    } else {
        for id in ids {
            let date = prompts::input(
                &format!(r#"Enter the "back in stock" date for product {}:"#, id),
                Some(""),
                ctx.interactive,
            )?;
            let date = date.trim();
            if !date.is_empty() {
                requests.push(StockDateRequest {
                    product_id: id,
                    expression: date.to_string(),
                });
            }
        }
    }
    Ok(requests)
}

/// Whether the two flags point at the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
