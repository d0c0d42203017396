//! Assembler context.
//!
//! Symbol tables produced by the assembler, consulted only to resolve textual breakpoint
//! targets such as `break main`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Function and label symbol tables, keyed by address.
pub trait AsmContext: Send + Sync {
    /// Function names by start address.
    fn functions(&self) -> &BTreeMap<usize, String>;

    /// Label names by address.
    fn labels(&self) -> &BTreeMap<usize, String>;

    /// Looks up the address of `name`; functions take precedence over labels.
    fn resolve(&self, name: &str) -> Option<usize> {
        let find = |map: &BTreeMap<usize, String>| {
            map.iter()
                .find_map(|(&addr, sym)| (sym == name).then_some(addr))
        };
        find(self.functions()).or_else(|| find(self.labels()))
    }
}

/// Concrete symbol table, loadable from JSON.
///
/// # Examples
///
/// ```
/// use bnsim_core::isa::context::{AsmContext, SymbolTable};
///
/// let ctx: SymbolTable =
///     serde_json::from_str(r#"{ "functions": { "4": "main" }, "labels": { "9": "loop" } }"#)
///         .unwrap();
/// assert_eq!(ctx.resolve("main"), Some(4));
/// assert_eq!(ctx.resolve("loop"), Some(9));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    /// Function names by start address.
    #[serde(default)]
    pub functions: BTreeMap<usize, String>,
    /// Label names by address.
    #[serde(default)]
    pub labels: BTreeMap<usize, String>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a function symbol.
    #[must_use]
    pub fn with_function(mut self, addr: usize, name: impl Into<String>) -> Self {
        let _ = self.functions.insert(addr, name.into());
        self
    }

    /// Adds a label symbol.
    #[must_use]
    pub fn with_label(mut self, addr: usize, name: impl Into<String>) -> Self {
        let _ = self.labels.insert(addr, name.into());
        self
    }
}

impl AsmContext for SymbolTable {
    fn functions(&self) -> &BTreeMap<usize, String> {
        &self.functions
    }

    fn labels(&self) -> &BTreeMap<usize, String> {
        &self.labels
    }
}
