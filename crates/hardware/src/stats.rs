//! Execution statistics collection and reporting.
//!
//! This module tracks what the step engine has executed. It provides:
//! 1. **Counters:** Steps executed, accumulated cycles, and breakpoint hits.
//! 2. **Instruction Histogram:** Execution count per mnemonic.
//! 3. **Reporting:** Sorted histogram views and a plain-text report.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Ordering of histogram rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoSort {
    /// Alphabetical by mnemonic.
    #[default]
    Key,
    /// Most frequent first; ties alphabetical.
    Count,
}

/// Execution statistics of one machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecStats {
    /// Instructions dispatched, including those whose step then failed.
    pub steps: u64,
    /// Sum of the cycle costs of executed instructions.
    pub cycles: u64,
    /// Steps on which a breakpoint or force-break fired.
    pub breakpoint_hits: u64,
    /// Execution count per mnemonic.
    pub instruction_histo: BTreeMap<String, u64>,
}

impl ExecStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one execution of `mnemonic`.
    pub fn record_instr(&mut self, mnemonic: &str) {
        *self.instruction_histo.entry(mnemonic.to_owned()).or_insert(0) += 1;
    }

    /// Histogram rows in the requested order.
    pub fn histogram_sorted(&self, order: HistoSort) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .instruction_histo
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        if order == HistoSort::Count {
            rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        }
        rows
    }

    /// Clears every counter and the histogram.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Plain-text report with the histogram in `order`.
    pub fn report(&self, order: HistoSort) -> String {
        let mut out = String::new();
        out.push_str("==========================================================\n");
        out.push_str("EXECUTION STATISTICS\n");
        out.push_str("==========================================================\n");
        out.push_str(&format!("steps                    {}\n", self.steps));
        out.push_str(&format!("cycles                   {}\n", self.cycles));
        out.push_str(&format!("breakpoint_hits          {}\n", self.breakpoint_hits));
        out.push_str("----------------------------------------------------------\n");
        out.push_str("INSTRUCTION HISTOGRAM\n");
        for (mnemonic, count) in self.histogram_sorted(order) {
            out.push_str(&format!("  {mnemonic:<22} {count}\n"));
        }
        out
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(HistoSort::Key))
    }
}
