// SPDX-License-Identifier: Apache-2.0

//! Command line driver for ABC synthesis log statistics extraction.
//!
//! Commands are given like:
//!
//! ```text
//! abclog-driver <global-options> <command> <command-args-and-options>
//! ```
//!
//! Commands are:
//!
//! - log2csv: extracts per-operation (rewrite/refactor/resub) statistics
//!   tables from a log and writes one CSV file per category.
//! - log-stats: dumps baseline and run-summary statistics rows to stdout.
//!
//! Sample usage:
//!
//! ```shell
//! $ cargo run -- log2csv run1.log --output_dir exp-analysis
//! $ cargo run -- log-stats run1.log
//! ```

mod config;
mod log2csv;
mod log_stats;
mod report_cli_error;

use clap::{Arg, ArgAction};
use config::AbclogConfig;
use report_cli_error::report_cli_error_and_exit;
use serde::Deserialize;

#[derive(Deserialize)]
struct AbclogToml {
    extract: AbclogConfig,
}

trait AppExt {
    fn add_log_input_arg(self) -> Self;
    fn add_delimiter_arg(self) -> Self;
}

impl AppExt for clap::Command {
    fn add_log_input_arg(self) -> Self {
        (self as clap::Command).arg(
            Arg::new("log_input_file")
                .help("The input log file")
                .required(true)
                .index(1),
        )
    }

    fn add_delimiter_arg(self) -> Self {
        (self as clap::Command).arg(
            Arg::new("delimiter")
                .long("delimiter")
                .value_name("LITERAL")
                .help("Delimiter literal separating the baseline and operation segments")
                .action(ArgAction::Set),
        )
    }
}

fn main() {
    let _ = env_logger::try_init();

    log::info!(
        "abclog-driver starting; version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let matches = clap::Command::new("abclog-driver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Command line driver for ABC synthesis log statistics extraction")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("CONFIG")
                .help("Path to an abclog.toml file")
                .action(ArgAction::Set),
        )
        .subcommand(clap::Command::new("version").about("Prints the version of the driver"))
        .subcommand(
            clap::Command::new("log2csv")
                .about("Extracts per-operation statistics tables to CSV files")
                .add_log_input_arg()
                .add_delimiter_arg()
                .arg(
                    Arg::new("output_dir")
                        .long("output_dir")
                        .value_name("DIR")
                        .help("Directory to write the per-operation CSV files into")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            clap::Command::new("log-stats")
                .about("Dumps baseline and run-summary statistics to stdout")
                .add_log_input_arg()
                .add_delimiter_arg()
                .arg(
                    Arg::new("output_json")
                        .long("output_json")
                        .value_name("PATH")
                        .help("Write the collected tables as JSON to PATH")
                        .action(ArgAction::Set),
                ),
        )
        .get_matches();

    let mut toml_path: Option<String> = matches.get_one::<String>("config").map(|s| s.to_string());

    // If there is no config flag specified, but there is an abclog.toml in
    // the current directory, use that.
    if toml_path.is_none() {
        let cwd = std::env::current_dir().unwrap();
        let cwd_toml_path = cwd.join("abclog.toml");
        if cwd_toml_path.exists() {
            log::info!(
                "Using abclog.toml in current directory: {}",
                cwd_toml_path.display()
            );
            toml_path = Some(cwd_toml_path.to_str().unwrap().to_string());
        }
    }

    let config: Option<AbclogConfig> = toml_path.map(|path| {
        if !std::path::Path::new(&path).exists() {
            report_cli_error_and_exit("config toml file does not exist", None, vec![("path", &path)]);
        }
        let toml_str = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            report_cli_error_and_exit(
                "failed to read config toml file",
                None,
                vec![("path", &path), ("error", &e.to_string())],
            )
        });
        let parsed: AbclogToml = toml::from_str(&toml_str).unwrap_or_else(|e| {
            report_cli_error_and_exit(
                "failed to parse config toml file",
                None,
                vec![("path", &path), ("error", &e.to_string())],
            )
        });
        parsed.extract
    });

    if let Some(matches) = matches.subcommand_matches("log2csv") {
        if let Err(e) = log2csv::do_log2csv(matches, &config) {
            report_cli_error_and_exit(&e, Some("log2csv"), vec![]);
        }
    } else if let Some(matches) = matches.subcommand_matches("log-stats") {
        log_stats::handle_log_stats(matches, &config);
    } else if let Some(_matches) = matches.subcommand_matches("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
    } else {
        report_cli_error_and_exit("No valid subcommand provided.", None, vec![]);
    }
}
