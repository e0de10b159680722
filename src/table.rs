// SPDX-License-Identifier: Apache-2.0

//! Table finalization: per-category record accumulation, sorting, and
//! CSV/console serialization.

use crate::record::{Record, RunSummary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Recognized columns in canonical output order. A finalized table emits
/// the subset of these that is populated anywhere in the table; missing
/// cells serialize as empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Design,
    NumInputs,
    NumOutputs,
    AndNodes,
    Levels,
    AllTime,
    CutTime,
    ResynTime,
    LevUpdTime,
    AigConvTime,
    LevUpdNum,
    RevUpdNum,
    GainNodes,
    ReorderNodes,
    AndAfter,
    LevAfter,
}

impl Column {
    const ALL: [Column; 16] = [
        Column::Design,
        Column::NumInputs,
        Column::NumOutputs,
        Column::AndNodes,
        Column::Levels,
        Column::AllTime,
        Column::CutTime,
        Column::ResynTime,
        Column::LevUpdTime,
        Column::AigConvTime,
        Column::LevUpdNum,
        Column::RevUpdNum,
        Column::GainNodes,
        Column::ReorderNodes,
        Column::AndAfter,
        Column::LevAfter,
    ];

    fn header(self) -> &'static str {
        match self {
            Column::Design => "design",
            Column::NumInputs => "#input",
            Column::NumOutputs => "#output",
            Column::AndNodes => "#and",
            Column::Levels => "#level",
            Column::AllTime => "all_time",
            Column::CutTime => "cut_time",
            Column::ResynTime => "resyn_time",
            Column::LevUpdTime => "lev_upd_time",
            Column::AigConvTime => "aig_conv_time",
            Column::LevUpdNum => "lev_upd_num",
            Column::RevUpdNum => "rev_upd_num",
            Column::GainNodes => "gain_nodes",
            Column::ReorderNodes => "reorder_nodes",
            Column::AndAfter => "#and_rw",
            Column::LevAfter => "#lev_rw",
        }
    }
}

fn cell(record: &Record, column: Column) -> Option<String> {
    let identity = record.identity.as_ref();
    let metrics = record.metrics.as_ref();
    match column {
        Column::Design => identity.and_then(|id| id.design.clone()),
        Column::NumInputs => identity.map(|id| id.num_inputs.to_string()),
        Column::NumOutputs => identity.map(|id| id.num_outputs.to_string()),
        Column::AndNodes => identity.map(|id| id.and_nodes.to_string()),
        Column::Levels => identity.map(|id| id.levels.to_string()),
        Column::AllTime => metrics.and_then(|m| m.all_time).map(|v| v.to_string()),
        Column::CutTime => metrics.and_then(|m| m.cut_time).map(|v| v.to_string()),
        Column::ResynTime => metrics.and_then(|m| m.resyn_time).map(|v| v.to_string()),
        Column::LevUpdTime => metrics.and_then(|m| m.lev_upd_time).map(|v| v.to_string()),
        Column::AigConvTime => metrics.and_then(|m| m.aig_conv_time).map(|v| v.to_string()),
        Column::LevUpdNum => metrics.and_then(|m| m.lev_upd_num).map(|v| v.to_string()),
        Column::RevUpdNum => metrics.and_then(|m| m.rev_upd_num).map(|v| v.to_string()),
        Column::GainNodes => metrics.and_then(|m| m.gain_nodes).map(|v| v.to_string()),
        Column::ReorderNodes => metrics.and_then(|m| m.reorder_nodes).map(|v| v.to_string()),
        Column::AndAfter => metrics.and_then(|m| m.and_after).map(|v| v.to_string()),
        Column::LevAfter => metrics.and_then(|m| m.lev_after).map(|v| v.to_string()),
    }
}

/// Ordered sequence of records for one operation category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts ascending by AND-node count. Rows whose identity did not parse
    /// carry no key and order after all keyed rows, keeping their relative
    /// insertion order (stable sort).
    pub fn sort_by_and_nodes(&mut self) {
        self.records.sort_by_key(|record| match record.and_nodes() {
            Some(count) => (0u8, count),
            None => (1u8, 0),
        });
    }

    /// Canonical-order subset of columns populated anywhere in the table.
    fn active_columns(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .filter(|column| {
                self.records
                    .iter()
                    .any(|record| cell(record, *column).is_some())
            })
            .collect()
    }

    /// Writes the table as CSV with a header row. An empty table writes
    /// nothing.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        if self.records.is_empty() {
            return Ok(());
        }
        let columns = self.active_columns();
        let mut wtr = csv::WriterBuilder::new().from_writer(out);
        wtr.write_record(columns.iter().map(|column| column.header()))?;
        for record in &self.records {
            wtr.write_record(
                columns
                    .iter()
                    .map(|column| cell(record, *column).unwrap_or_default()),
            )?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write_csv(BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Writes comma-joined rows without a header, for console dumps.
    pub fn write_plain<W: Write>(&self, mut out: W) -> io::Result<()> {
        let columns = self.active_columns();
        for record in &self.records {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| cell(record, *column).unwrap_or_default())
                .collect();
            writeln!(out, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

/// Ordered sequence of run-summary rows. Every row carries the AND-node
/// key, so sorting has no missing-key case here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    rows: Vec<RunSummary>,
}

impl SummaryTable {
    pub fn push(&mut self, row: RunSummary) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RunSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_by_and_nodes(&mut self) {
        self.rows.sort_by_key(|row| row.and_nodes);
    }

    /// Writes comma-joined rows without a header: design, structure, then
    /// the timing triple.
    pub fn write_plain<W: Write>(&self, mut out: W) -> io::Result<()> {
        for row in &self.rows {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{}",
                row.design.as_deref().unwrap_or(""),
                row.num_inputs,
                row.num_outputs,
                row.and_nodes,
                row.levels,
                row.resynthesis,
                row.update,
                row.total,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DesignIdentity, OperationMetrics};
    use pretty_assertions::assert_eq;

    fn identity_record(design: &str, and_nodes: u64) -> Record {
        Record::from_identity(DesignIdentity {
            design: Some(design.to_string()),
            num_inputs: 3,
            num_outputs: 2,
            and_nodes,
            levels: 6,
        })
    }

    fn metrics_record(all_time: f64) -> Record {
        Record::merged(
            None,
            OperationMetrics {
                all_time: Some(all_time),
                ..Default::default()
            },
        )
        .expect("metrics alone should produce a record")
    }

    #[test]
    fn sorts_ascending_by_and_nodes() {
        let mut table = RecordTable::default();
        table.push(identity_record("big", 100));
        table.push(identity_record("small", 50));
        table.sort_by_and_nodes();
        let names: Vec<_> = table
            .records()
            .iter()
            .map(|r| r.identity.as_ref().unwrap().design.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["small".to_string(), "big".to_string()]);
    }

    #[test]
    fn keyless_rows_sort_last_in_insertion_order() {
        let mut table = RecordTable::default();
        table.push(metrics_record(2.0));
        table.push(identity_record("keyed", 10));
        table.push(metrics_record(1.0));
        table.sort_by_and_nodes();
        assert_eq!(table.records()[0].and_nodes(), Some(10));
        assert_eq!(
            table.records()[1].metrics.as_ref().unwrap().all_time,
            Some(2.0)
        );
        assert_eq!(
            table.records()[2].metrics.as_ref().unwrap().all_time,
            Some(1.0)
        );
    }

    #[test]
    fn csv_has_union_of_populated_columns() {
        let mut table = RecordTable::default();
        table.push(identity_record("adder", 57));
        table.push(metrics_record(1.23));
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("design,#input,#output,#and,#level,all_time")
        );
        assert_eq!(lines.next(), Some("adder,3,2,57,6,"));
        assert_eq!(lines.next(), Some(",,,,,1.23"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_table_writes_nothing() {
        let table = RecordTable::default();
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn csv_round_trips_populated_cells() {
        let mut table = RecordTable::default();
        let merged = Record::merged(
            Some(DesignIdentity {
                design: Some("adder".to_string()),
                num_inputs: 256,
                num_outputs: 129,
                and_nodes: 1020,
                levels: 76,
            }),
            OperationMetrics {
                all_time: Some(1.23),
                gain_nodes: Some(321),
                and_after: Some(980),
                ..Default::default()
            },
        )
        .unwrap();
        table.push(merged);

        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().unwrap().clone();
        let row = reader
            .records()
            .next()
            .expect("one data row expected")
            .unwrap();
        let get = |name: &str| {
            let idx = headers.iter().position(|h| h == name).unwrap();
            row.get(idx).unwrap().to_string()
        };
        assert_eq!(get("design"), "adder");
        assert_eq!(get("#input"), "256");
        assert_eq!(get("#output"), "129");
        assert_eq!(get("#and"), "1020");
        assert_eq!(get("#level"), "76");
        assert_eq!(get("all_time"), "1.23");
        assert_eq!(get("gain_nodes"), "321");
        assert_eq!(get("#and_rw"), "980");
    }

    #[test]
    fn plain_rows_have_no_header() {
        let mut table = RecordTable::default();
        table.push(identity_record("adder", 57));
        let mut out = Vec::new();
        table.write_plain(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "adder,3,2,57,6\n");
    }

    #[test]
    fn summary_rows_sort_and_format() {
        let mut table = SummaryTable::default();
        table.push(RunSummary {
            design: Some("big".to_string()),
            num_inputs: 8,
            num_outputs: 8,
            and_nodes: 200,
            levels: 12,
            resynthesis: 2.5,
            update: 0.5,
            total: 3.0,
        });
        table.push(RunSummary {
            design: Some("small".to_string()),
            num_inputs: 4,
            num_outputs: 4,
            and_nodes: 100,
            levels: 9,
            resynthesis: 1.25,
            update: 0.3,
            total: 1.6,
        });
        table.sort_by_and_nodes();
        let mut out = Vec::new();
        table.write_plain(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "small,4,4,100,9,1.25,0.3,1.6\nbig,8,8,200,12,2.5,0.5,3\n"
        );
    }
}
