// SPDX-License-Identifier: Apache-2.0

//! Implements the `log2csv` driver subcommand: extract per-operation
//! statistics tables from an ABC log and write one CSV per category.

use crate::config::{get_delimiter, get_output_dir, AbclogConfig};
use abclog::category::OpCategory;
use abclog::collect::collect_operation_tables;
use abclog::extract::OP_DELIMITER;
use clap::ArgMatches;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Output file stem: the input file name up to its first `.`.
fn output_stem(input_path: &str) -> &str {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(input_path);
    file_name.split('.').next().unwrap_or(file_name)
}

pub fn do_log2csv(matches: &ArgMatches, config: &Option<AbclogConfig>) -> Result<(), String> {
    let input_path = matches
        .get_one::<String>("log_input_file")
        .ok_or("log input file argument is required")?;
    let delimiter = get_delimiter(matches, config, OP_DELIMITER);
    let output_dir = get_output_dir(matches, config);

    let file =
        File::open(input_path).map_err(|e| format!("failed to open {}: {}", input_path, e))?;
    let mut tables = collect_operation_tables(BufReader::new(file), &delimiter)
        .map_err(|e| format!("failed to collect records: {:#}", e))?;
    tables.sort_all();

    std::fs::create_dir_all(&output_dir)
        .map_err(|e| format!("failed to create output directory {}: {}", output_dir, e))?;

    let stem = output_stem(input_path);
    for category in OpCategory::ALL {
        let out_path = Path::new(&output_dir).join(format!("{}_{}.csv", stem, category.as_str()));
        tables
            .table(category)
            .write_csv_file(&out_path)
            .map_err(|e| format!("{:#}", e))?;
        log::info!(
            "wrote {} {} records to {}",
            tables.table(category).len(),
            category.as_str(),
            out_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stem_strips_directories_and_extensions() {
        assert_eq!(output_stem("/logs/run1.log"), "run1");
        assert_eq!(output_stem("run1.log.txt"), "run1");
        assert_eq!(output_stem("run1"), "run1");
    }
}
