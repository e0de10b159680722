// SPDX-License-Identifier: Apache-2.0

//! Operation categories and per-line classification.

/// Logic-optimization operation whose statistics a line reports. The
/// operations themselves are opaque labels here; only the keyword matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCategory {
    Rewrite,
    Refactor,
    Resub,
}

impl OpCategory {
    pub const ALL: [OpCategory; 3] = [OpCategory::Rewrite, OpCategory::Refactor, OpCategory::Resub];

    /// Keyword whose containment in a line attributes the line to this
    /// category; doubles as the output-file suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            OpCategory::Rewrite => "rewrite",
            OpCategory::Refactor => "refactor",
            OpCategory::Resub => "resub",
        }
    }

    pub fn matches(self, line: &str) -> bool {
        line.contains(self.as_str())
    }
}

/// Returns every category whose keyword the line contains, in the fixed
/// `ALL` order. Categories are not mutually exclusive: a line naming two
/// operations contributes a record to both.
pub fn classify_line(line: &str) -> Vec<OpCategory> {
    OpCategory::ALL
        .iter()
        .copied()
        .filter(|category| category.matches(line))
        .collect()
}
