//! Configuration for the machine core.
//!
//! This module defines the knobs a driver can set when building a [`Machine`](crate::Machine).
//! It provides:
//! 1. **Defaults:** Baseline behavior when a field is not supplied.
//! 2. **Structures:** `MachineConfig`, the flat set of run-time options.
//! 3. **Enums:** `UninitPolicy`, the treatment of reads from never-written state.
//!
//! Configuration is supplied as JSON (see [`MachineConfig::from_json`]) or built with
//! `MachineConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::common::error::{SimError, SimResult};

/// Default configuration values for the machine.
mod defaults {
    /// Whether the mnemonic histogram and cycle counters are updated on every step.
    pub const COLLECT_STATS: bool = true;

    /// Whether breakpoint and force-break hits are logged.
    pub const REPORT_BREAKPOINTS: bool = true;
}

/// Treatment of reads from DMEM cells or register portions that were never written.
///
/// The default only emits a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UninitPolicy {
    /// Log a `warn` event and return the stored value.
    #[default]
    #[serde(alias = "warn")]
    Warn,
    /// Fail the read with [`SimError::Uninitialized`](crate::SimError::Uninitialized).
    #[serde(alias = "strict")]
    Strict,
    /// Return the stored value silently.
    #[serde(alias = "ignore")]
    Ignore,
}

impl UninitPolicy {
    /// Applies the policy to a read; `initialized` is the tracked state of what was read.
    ///
    /// `what` is only evaluated when a diagnostic or error is produced.
    pub(crate) fn on_read(self, initialized: bool, what: impl FnOnce() -> String) -> SimResult<()> {
        if initialized {
            return Ok(());
        }
        match self {
            Self::Warn => {
                tracing::warn!("reading from uninitialized {}", what());
                Ok(())
            }
            Self::Strict => Err(SimError::Uninitialized(what())),
            Self::Ignore => Ok(()),
        }
    }
}

/// Run-time options of a machine instance.
///
/// # Examples
///
/// ```
/// use bnsim_core::config::{MachineConfig, UninitPolicy};
///
/// let json = r#"{ "uninit_reads": "Strict", "trace_instructions": true }"#;
/// let config = MachineConfig::from_json(json).unwrap();
/// assert_eq!(config.uninit_reads, UninitPolicy::Strict);
/// assert!(config.collect_stats);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Emit every step's trace string as a `debug` event.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Handling of reads from uninitialized DMEM cells and register portions.
    #[serde(default)]
    pub uninit_reads: UninitPolicy,

    /// Record the mnemonic histogram, step count and cycle count.
    #[serde(default = "MachineConfig::default_collect_stats")]
    pub collect_stats: bool,

    /// Log breakpoint and force-break hits at `info` level.
    #[serde(default = "MachineConfig::default_report_breakpoints")]
    pub report_breakpoints: bool,
}

impl MachineConfig {
    const fn default_collect_stats() -> bool {
        defaults::COLLECT_STATS
    }

    const fn default_report_breakpoints() -> bool {
        defaults::REPORT_BREAKPOINTS
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            uninit_reads: UninitPolicy::default(),
            collect_stats: Self::default_collect_stats(),
            report_breakpoints: Self::default_report_breakpoints(),
        }
    }
}
