// SPDX-License-Identifier: Apache-2.0

use clap::ArgMatches;
use serde::Deserialize;

/// Defaults loadable from an `abclog.toml` file; explicit command-line
/// flags take precedence over these.
#[derive(Deserialize)]
pub struct AbclogConfig {
    /// Directory the per-operation CSV tables are written into.
    pub output_dir: Option<String>,

    /// Delimiter literal separating the baseline and operation segments of
    /// a log line, overriding the subcommand's default.
    pub delimiter: Option<String>,
}

/// Helper for extracting the output directory from the command line flag,
/// if specified, or the config if it's present and the flag isn't.
pub fn get_output_dir(matches: &ArgMatches, config: &Option<AbclogConfig>) -> String {
    if let Some(output_dir) = matches.get_one::<String>("output_dir") {
        output_dir.to_string()
    } else if let Some(output_dir) = config.as_ref().and_then(|c| c.output_dir.clone()) {
        output_dir
    } else {
        "exp-analysis".to_string()
    }
}

/// Helper for extracting the delimiter literal from the command line flag,
/// the config, or the subcommand's default, in that order.
pub fn get_delimiter(
    matches: &ArgMatches,
    config: &Option<AbclogConfig>,
    default: &str,
) -> String {
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        delimiter.to_string()
    } else if let Some(delimiter) = config.as_ref().and_then(|c| c.delimiter.clone()) {
        delimiter
    } else {
        default.to_string()
    }
}
