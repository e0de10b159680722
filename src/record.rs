// SPDX-License-Identifier: Apache-2.0

//! Record types produced by log extraction.
//!
//! The recognized fields are fixed, but every extraction is per-pattern
//! optional: a record carries only the fields whose patterns matched on its
//! line. Serde renames follow the CSV header spellings so the JSON and CSV
//! surfaces agree.

use serde::Serialize;

/// Baseline structural statistics parsed from the segment preceding the
/// delimiter on one line.
///
/// The numeric pattern gates emission of the whole record; the design name
/// has its own pattern and may independently be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignIdentity {
    /// Design name, e.g. "tv80" for a `/path/to/tv80.aig` occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
    #[serde(rename = "#input")]
    pub num_inputs: u64,
    #[serde(rename = "#output")]
    pub num_outputs: u64,
    #[serde(rename = "#and")]
    pub and_nodes: u64,
    #[serde(rename = "#level")]
    pub levels: u64,
}

/// Per-operation statistics parsed from the segment following the delimiter.
///
/// Each field has an independent pattern; absence of one never blocks the
/// others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationMetrics {
    /// Total operation time in seconds (`global_time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_time: Option<f64>,
    /// Cut construction time in seconds (`global_cut`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_time: Option<f64>,
    /// Resynthesis time in seconds (`global_resynthesis_time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resyn_time: Option<f64>,
    /// AIG level update time in seconds (`global_aig_update_time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lev_upd_time: Option<f64>,
    /// AIG conversion time in seconds (`global_aig_converter_time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aig_conv_time: Option<f64>,
    /// Number of level updates (`global_level_updates`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lev_upd_num: Option<u64>,
    /// Number of reverse-level updates (`global_reverse_updates`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_upd_num: Option<u64>,
    /// Nodes gained by rewriting (`global_node_rewritten`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_nodes: Option<u64>,
    /// Nodes touched by reordering (`global_reorder_nodes`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_nodes: Option<u64>,
    /// AND-node count after the operation (`and = N`).
    #[serde(rename = "#and_rw", skip_serializing_if = "Option::is_none")]
    pub and_after: Option<u64>,
    /// Logic-level count after the operation (`lev = N`).
    #[serde(rename = "#lev_rw", skip_serializing_if = "Option::is_none")]
    pub lev_after: Option<u64>,
}

impl OperationMetrics {
    /// True when no pattern matched; an empty metrics record counts as
    /// absent for record emission.
    pub fn is_empty(&self) -> bool {
        self.all_time.is_none()
            && self.cut_time.is_none()
            && self.resyn_time.is_none()
            && self.lev_upd_time.is_none()
            && self.aig_conv_time.is_none()
            && self.lev_upd_num.is_none()
            && self.rev_upd_num.is_none()
            && self.gain_nodes.is_none()
            && self.reorder_nodes.is_none()
            && self.and_after.is_none()
            && self.lev_after.is_none()
    }
}

/// One emitted row: the shallow merge of the identity and metrics
/// extractions for a single line. At least one side is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(flatten)]
    pub identity: Option<DesignIdentity>,
    #[serde(flatten)]
    pub metrics: Option<OperationMetrics>,
}

impl Record {
    /// Merges the two per-line extractions, returning `None` when neither
    /// side parsed. Empty metrics count as absent.
    pub fn merged(identity: Option<DesignIdentity>, metrics: OperationMetrics) -> Option<Record> {
        let metrics = if metrics.is_empty() { None } else { Some(metrics) };
        if identity.is_none() && metrics.is_none() {
            return None;
        }
        Some(Record { identity, metrics })
    }

    /// Row built from a baseline identity alone.
    pub fn from_identity(identity: DesignIdentity) -> Record {
        Record {
            identity: Some(identity),
            metrics: None,
        }
    }

    /// Sort key for table finalization; absent when the identity (and hence
    /// the AND-node count) did not parse.
    pub fn and_nodes(&self) -> Option<u64> {
        self.identity.as_ref().map(|id| id.and_nodes)
    }
}

/// Combined row for the run-summary profile: baseline structure plus the
/// resynthesis/update/total timing triple, matched all-or-nothing by a
/// single pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Design name, e.g. "tv80" for a `/path/to/tv80:` occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
    #[serde(rename = "#input")]
    pub num_inputs: u64,
    #[serde(rename = "#output")]
    pub num_outputs: u64,
    #[serde(rename = "#and")]
    pub and_nodes: u64,
    #[serde(rename = "#level")]
    pub levels: u64,
    pub resynthesis: f64,
    pub update: f64,
    pub total: f64,
}
