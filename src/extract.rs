// SPDX-License-Identifier: Apache-2.0

//! Core log-line extraction: delimiter split plus labeled regex patterns.
//!
//! A line is split at the first occurrence of a delimiter literal. The
//! baseline patterns apply to the text before the delimiter, the operation
//! patterns to the text from the delimiter onward. Failure to locate the
//! delimiter or to match the baseline numeric pattern is logged and yields
//! no data; it is never fatal.

use crate::record::{DesignIdentity, OperationMetrics, RunSummary};
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter literal used by the per-operation log profile.
pub const OP_DELIMITER: &str = "###";

/// Delimiter literal used by the run-summary log profile.
pub const RUN_DELIMITER: &str = "statistics";

/// `label = <decimal>` timing token.
fn timing_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"(?s){}\s*=\s*([\d.]+)", label)).expect("timing pattern should be valid")
}

/// `label <integer>` counter token. The counters in the source logs carry
/// no `=` between label and value.
fn counter_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"(?s){}\s*(\d+)", label)).expect("counter pattern should be valid")
}

static DESIGN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/.*?/([^/]+)\.aig").expect("design name pattern should be valid"));

// Non-greedy across the whole segment: the i/o, and, and lev tokens appear
// in order with arbitrary text between them.
static IDENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)i/o\s*=\s*(\d+)/\s*(\d+).*?and\s*=\s*(\d+).*?lev\s*=\s*(\d+)")
        .expect("baseline pattern should be valid")
});

static ALL_TIME_RE: Lazy<Regex> = Lazy::new(|| timing_pattern("global_time"));
static CUT_TIME_RE: Lazy<Regex> = Lazy::new(|| timing_pattern("global_cut"));
static RESYN_TIME_RE: Lazy<Regex> = Lazy::new(|| timing_pattern("global_resynthesis_time"));
static LEV_UPD_TIME_RE: Lazy<Regex> = Lazy::new(|| timing_pattern("global_aig_update_time"));
static AIG_CONV_TIME_RE: Lazy<Regex> = Lazy::new(|| timing_pattern("global_aig_converter_time"));
static LEV_UPD_NUM_RE: Lazy<Regex> = Lazy::new(|| counter_pattern("global_level_updates"));
static REV_UPD_NUM_RE: Lazy<Regex> = Lazy::new(|| counter_pattern("global_reverse_updates"));
static GAIN_NODES_RE: Lazy<Regex> = Lazy::new(|| counter_pattern("global_node_rewritten"));
static REORDER_NODES_RE: Lazy<Regex> = Lazy::new(|| counter_pattern("global_reorder_nodes"));
static AND_AFTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)and\s*=\s*(\d+)").expect("and token pattern should be valid"));
static LEV_AFTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)lev\s*=\s*(\d+)").expect("lev token pattern should be valid"));

static SUMMARY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/.*?/([^/]+):").expect("summary name pattern should be valid"));

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)Resynthesis\s*=\s*([\d.]+)\s*sec.*?Update\s*=\s*([\d.]+)\s*sec.*?TOTAL\s*=\s*([\d.]+)\s*sec.*?i/o\s*=\s*(\d+)/\s*(\d+).*?and\s*=\s*(\d+).*?lev\s*=\s*(\d+)",
    )
    .expect("run summary pattern should be valid")
});

fn timing_field(segment: &str, re: &Regex) -> Option<f64> {
    re.captures(segment).and_then(|caps| caps[1].parse().ok())
}

fn counter_field(segment: &str, re: &Regex) -> Option<u64> {
    re.captures(segment).and_then(|caps| caps[1].parse().ok())
}

/// Parses the baseline statistics block preceding `delimiter`.
///
/// Returns `None` when the delimiter is absent or the numeric pattern does
/// not match, even if the design name was found; both cases are logged and
/// skipped.
pub fn parse_design_identity(line: &str, delimiter: &str) -> Option<DesignIdentity> {
    let split = match line.find(delimiter) {
        Some(idx) => idx,
        None => {
            log::warn!("delimiter {:?} not found in line; skipping", delimiter);
            return None;
        }
    };
    let preamble = &line[..split];
    let design = DESIGN_NAME_RE
        .captures(preamble)
        .map(|caps| caps[1].to_string());
    let caps = match IDENTITY_RE.captures(preamble) {
        Some(caps) => caps,
        None => {
            log::warn!("no baseline statistics match before delimiter; skipping");
            return None;
        }
    };
    Some(DesignIdentity {
        design,
        num_inputs: caps[1].parse().ok()?,
        num_outputs: caps[2].parse().ok()?,
        and_nodes: caps[3].parse().ok()?,
        levels: caps[4].parse().ok()?,
    })
}

/// Parses the operation statistics block from `delimiter` onward.
///
/// Every pattern is applied independently to the same segment; the result
/// carries only the fields that matched. A line without the delimiter
/// yields the empty record.
pub fn parse_operation_metrics(line: &str, delimiter: &str) -> OperationMetrics {
    let split = match line.find(delimiter) {
        Some(idx) => idx,
        None => {
            log::warn!("delimiter {:?} not found in line; skipping", delimiter);
            return OperationMetrics::default();
        }
    };
    let segment = &line[split..];
    OperationMetrics {
        all_time: timing_field(segment, &ALL_TIME_RE),
        cut_time: timing_field(segment, &CUT_TIME_RE),
        resyn_time: timing_field(segment, &RESYN_TIME_RE),
        lev_upd_time: timing_field(segment, &LEV_UPD_TIME_RE),
        aig_conv_time: timing_field(segment, &AIG_CONV_TIME_RE),
        lev_upd_num: counter_field(segment, &LEV_UPD_NUM_RE),
        rev_upd_num: counter_field(segment, &REV_UPD_NUM_RE),
        gain_nodes: counter_field(segment, &GAIN_NODES_RE),
        reorder_nodes: counter_field(segment, &REORDER_NODES_RE),
        and_after: counter_field(segment, &AND_AFTER_RE),
        lev_after: counter_field(segment, &LEV_AFTER_RE),
    }
}

/// Parses the run-summary block from `delimiter` onward: design name plus
/// the resynthesis/update/total timing triple and post-run structure,
/// matched all-or-nothing.
pub fn parse_run_summary(line: &str, delimiter: &str) -> Option<RunSummary> {
    let split = match line.find(delimiter) {
        Some(idx) => idx,
        None => {
            log::warn!("delimiter {:?} not found in line; skipping", delimiter);
            return None;
        }
    };
    let segment = &line[split..];
    let design = SUMMARY_NAME_RE
        .captures(segment)
        .map(|caps| caps[1].to_string());
    let caps = match SUMMARY_RE.captures(segment) {
        Some(caps) => caps,
        None => {
            log::warn!("no run summary match after delimiter; skipping");
            return None;
        }
    };
    Some(RunSummary {
        design,
        resynthesis: caps[1].parse().ok()?,
        update: caps[2].parse().ok()?,
        total: caps[3].parse().ok()?,
        num_inputs: caps[4].parse().ok()?,
        num_outputs: caps[5].parse().ok()?,
        and_nodes: caps[6].parse().ok()?,
        levels: caps[7].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identity_parses_preamble_fields() {
        let line = "read /foo/bar/design1.aig : i/o = 3/ 2 and = 57 lev = 6 rewrite ### and = 50";
        let identity = parse_design_identity(line, OP_DELIMITER).expect("baseline should parse");
        assert_eq!(
            identity,
            DesignIdentity {
                design: Some("design1".to_string()),
                num_inputs: 3,
                num_outputs: 2,
                and_nodes: 57,
                levels: 6,
            }
        );
    }

    #[test]
    fn identity_requires_delimiter() {
        let line = "read /foo/bar/design1.aig : i/o = 3/ 2 and = 57 lev = 6";
        assert_eq!(parse_design_identity(line, OP_DELIMITER), None);
    }

    #[test]
    fn identity_requires_numeric_pattern_even_with_name() {
        let line = "read /foo/bar/design1.aig ### and = 50";
        assert_eq!(parse_design_identity(line, OP_DELIMITER), None);
    }

    #[test]
    fn identity_name_is_optional() {
        let line = "i/o = 3/ 2 and = 57 lev = 6 ###";
        let identity = parse_design_identity(line, OP_DELIMITER).expect("baseline should parse");
        assert_eq!(identity.design, None);
        assert_eq!(identity.and_nodes, 57);
    }

    #[test]
    fn identity_does_not_read_past_delimiter() {
        // The numeric tokens live after the delimiter only, so the baseline
        // pattern has nothing to match on.
        let line = "rewrite ### i/o = 3/ 2 and = 57 lev = 6";
        assert_eq!(parse_design_identity(line, OP_DELIMITER), None);
    }

    #[test]
    fn metrics_match_independently() {
        let line = "rewrite ### global_time = 1.23 and = 100";
        let metrics = parse_operation_metrics(line, OP_DELIMITER);
        assert_eq!(metrics.all_time, Some(1.23));
        assert_eq!(metrics.and_after, Some(100));
        assert_eq!(metrics.cut_time, None);
        assert_eq!(metrics.resyn_time, None);
        assert_eq!(metrics.lev_upd_time, None);
        assert_eq!(metrics.aig_conv_time, None);
        assert_eq!(metrics.lev_upd_num, None);
        assert_eq!(metrics.rev_upd_num, None);
        assert_eq!(metrics.gain_nodes, None);
        assert_eq!(metrics.reorder_nodes, None);
        assert_eq!(metrics.lev_after, None);
    }

    #[test]
    fn metrics_parse_full_block() {
        let line = "rewrite ### global_time = 2.50 global_cut = 0.75 \
                    global_resynthesis_time = 1.10 global_aig_update_time = 0.40 \
                    global_aig_converter_time = 0.25 global_level_updates 12 \
                    global_reverse_updates 4 global_node_rewritten 321 \
                    global_reorder_nodes 17 and = 980 lev = 71";
        let metrics = parse_operation_metrics(line, OP_DELIMITER);
        assert_eq!(metrics.all_time, Some(2.5));
        assert_eq!(metrics.cut_time, Some(0.75));
        assert_eq!(metrics.resyn_time, Some(1.1));
        assert_eq!(metrics.lev_upd_time, Some(0.4));
        assert_eq!(metrics.aig_conv_time, Some(0.25));
        assert_eq!(metrics.lev_upd_num, Some(12));
        assert_eq!(metrics.rev_upd_num, Some(4));
        assert_eq!(metrics.gain_nodes, Some(321));
        assert_eq!(metrics.reorder_nodes, Some(17));
        assert_eq!(metrics.and_after, Some(980));
        assert_eq!(metrics.lev_after, Some(71));
    }

    #[test]
    fn metrics_without_delimiter_are_empty() {
        let line = "rewrite global_time = 1.23 and = 100";
        assert!(parse_operation_metrics(line, OP_DELIMITER).is_empty());
    }

    #[test]
    fn metrics_ignore_preamble_tokens() {
        // The `and = 57` before the delimiter belongs to the baseline block.
        let line = "i/o = 3/ 2 and = 57 lev = 6 rewrite ### global_time = 1.23";
        let metrics = parse_operation_metrics(line, OP_DELIMITER);
        assert_eq!(metrics.all_time, Some(1.23));
        assert_eq!(metrics.and_after, None);
        assert_eq!(metrics.lev_after, None);
    }

    #[test]
    fn run_summary_parses_combined_pattern() {
        let line = "abc statistics /foo/bar/adder: Resynthesis = 1.25 sec, \
                    Update = 0.30 sec, TOTAL = 1.60 sec : i/o = 256/ 129 and = 980 lev = 71";
        let summary = parse_run_summary(line, RUN_DELIMITER).expect("summary should parse");
        assert_eq!(
            summary,
            RunSummary {
                design: Some("adder".to_string()),
                num_inputs: 256,
                num_outputs: 129,
                and_nodes: 980,
                levels: 71,
                resynthesis: 1.25,
                update: 0.3,
                total: 1.6,
            }
        );
    }

    #[test]
    fn run_summary_is_all_or_nothing() {
        // Missing the TOTAL token: the combined pattern must not match.
        let line = "abc statistics /foo/bar/adder: Resynthesis = 1.25 sec, \
                    Update = 0.30 sec : i/o = 256/ 129 and = 980 lev = 71";
        assert_eq!(parse_run_summary(line, RUN_DELIMITER), None);
    }

    #[test]
    fn run_summary_requires_delimiter() {
        let line = "/foo/bar/adder: Resynthesis = 1.25 sec, Update = 0.30 sec, \
                    TOTAL = 1.60 sec : i/o = 256/ 129 and = 980 lev = 71";
        assert_eq!(parse_run_summary(line, RUN_DELIMITER), None);
    }
}
