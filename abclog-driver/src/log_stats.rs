// SPDX-License-Identifier: Apache-2.0

//! Implements the `log-stats` driver subcommand: dump baseline and
//! run-summary rows from an ABC run log to stdout.

use crate::config::{get_delimiter, AbclogConfig};
use crate::report_cli_error::report_cli_error_and_exit;
use abclog::collect::collect_run_tables;
use abclog::extract::RUN_DELIMITER;
use clap::ArgMatches;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn handle_log_stats(matches: &ArgMatches, config: &Option<AbclogConfig>) {
    let input_path = matches
        .get_one::<String>("log_input_file")
        .expect("log input file is required");
    let delimiter = get_delimiter(matches, config, RUN_DELIMITER);

    let file = match File::open(input_path) {
        Ok(f) => f,
        Err(e) => report_cli_error_and_exit(
            "failed to open log file",
            Some("log-stats"),
            vec![("path", input_path), ("error", &e.to_string())],
        ),
    };

    let (mut baseline, mut summaries) = match collect_run_tables(BufReader::new(file), &delimiter)
    {
        Ok(tables) => tables,
        Err(e) => report_cli_error_and_exit(
            "failed to collect records",
            Some("log-stats"),
            vec![("path", input_path), ("error", &format!("{:#}", e))],
        ),
    };
    baseline.sort_by_and_nodes();
    summaries.sort_by_and_nodes();

    let stdout = std::io::stdout();
    if let Err(e) = baseline
        .write_plain(stdout.lock())
        .and_then(|_| summaries.write_plain(stdout.lock()))
    {
        report_cli_error_and_exit(
            "failed to write output",
            Some("log-stats"),
            vec![("error", &e.to_string())],
        );
    }

    if let Some(path) = matches.get_one::<String>("output_json").map(Path::new) {
        let out = serde_json::json!({
            "baseline": baseline.records(),
            "summary": summaries.rows(),
        });
        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => report_cli_error_and_exit(
                "failed to create JSON output file",
                Some("log-stats"),
                vec![
                    ("path", &path.display().to_string()),
                    ("error", &e.to_string()),
                ],
            ),
        };
        if let Err(e) = serde_json::to_writer_pretty(file, &out) {
            report_cli_error_and_exit(
                "failed to write JSON output",
                Some("log-stats"),
                vec![("error", &e.to_string())],
            );
        }
    }
}
