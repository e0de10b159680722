// SPDX-License-Identifier: Apache-2.0

//! Parsing of ABC logic-synthesis log output into tabular statistics.
//!
//! Each log line carries a baseline statistics block and an operation
//! statistics block separated by a fixed delimiter literal. The modules here
//! turn one line into a structured record ([`extract`]), route records into
//! per-operation tables ([`category`], [`collect`]), and finalize/serialize
//! those tables ([`table`]).

pub mod category;
pub mod collect;
pub mod extract;
pub mod record;
pub mod table;
