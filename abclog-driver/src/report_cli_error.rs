// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;

/// Reports a fatal CLI error with optional detail pairs and exits non-zero.
pub fn report_cli_error_and_exit(
    message: &str,
    subcommand: Option<&str>,
    details: Vec<(&str, &str)>,
) -> ! {
    match subcommand {
        Some(subcommand) => {
            eprintln!("abclog-driver: {}: {}", subcommand, message.red().bold())
        }
        None => eprintln!("abclog-driver: {}", message.red().bold()),
    }
    for (key, value) in details {
        eprintln!("  {}: {}", key, value);
    }
    std::process::exit(1);
}
