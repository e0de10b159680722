// SPDX-License-Identifier: Apache-2.0

//! Line-iteration loops that accumulate extraction results into tables.
//!
//! Processing is sequential and stateless across lines; the growing tables
//! are the only accumulated state.

use crate::category::{classify_line, OpCategory};
use crate::extract::{parse_design_identity, parse_operation_metrics, parse_run_summary};
use crate::record::Record;
use crate::table::{RecordTable, SummaryTable};
use anyhow::{Context, Result};
use std::io::BufRead;

/// The three per-operation tables of the `###` profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedTables {
    pub rewrite: RecordTable,
    pub refactor: RecordTable,
    pub resub: RecordTable,
}

impl CollectedTables {
    pub fn table(&self, category: OpCategory) -> &RecordTable {
        match category {
            OpCategory::Rewrite => &self.rewrite,
            OpCategory::Refactor => &self.refactor,
            OpCategory::Resub => &self.resub,
        }
    }

    pub fn table_mut(&mut self, category: OpCategory) -> &mut RecordTable {
        match category {
            OpCategory::Rewrite => &mut self.rewrite,
            OpCategory::Refactor => &mut self.refactor,
            OpCategory::Resub => &mut self.resub,
        }
    }

    pub fn sort_all(&mut self) {
        for category in OpCategory::ALL {
            self.table_mut(category).sort_by_and_nodes();
        }
    }
}

/// Reads `reader` line by line and routes per-operation records into the
/// matching category tables.
///
/// Both extractions run once per line and the resulting record is shared
/// across every matching category; a line where neither side parses
/// contributes nothing.
pub fn collect_operation_tables<R: BufRead>(
    reader: R,
    delimiter: &str,
) -> Result<CollectedTables> {
    let mut tables = CollectedTables::default();
    for line in reader.lines() {
        let line = line.context("failed to read log line")?;
        let categories = classify_line(&line);
        if categories.is_empty() {
            continue;
        }
        let identity = parse_design_identity(&line, delimiter);
        let metrics = parse_operation_metrics(&line, delimiter);
        let record = Record::merged(identity, metrics);
        if let Some(record) = record {
            for category in categories {
                tables.table_mut(category).push(record.clone());
            }
        }
    }
    Ok(tables)
}

/// Reads `reader` line by line for the run-summary profile, accumulating
/// baseline identity rows and combined summary rows independently.
pub fn collect_run_tables<R: BufRead>(
    reader: R,
    delimiter: &str,
) -> Result<(RecordTable, SummaryTable)> {
    let mut baseline = RecordTable::default();
    let mut summaries = SummaryTable::default();
    for line in reader.lines() {
        let line = line.context("failed to read log line")?;
        let line = line.trim();
        if let Some(identity) = parse_design_identity(line, delimiter) {
            baseline.push(Record::from_identity(identity));
        }
        if let Some(summary) = parse_run_summary(line, delimiter) {
            summaries.push(summary);
        }
    }
    Ok((baseline, summaries))
}
