//! Disabled-tool filtering.
//!
//! Operators disable tools with a comma-separated list, e.g.
//! `DISABLED_TOOLS=ExecuteTerraformCommand,RunCheckovScan`.
//! Whitespace around names and empty segments are ignored; names are case-sensitive.
//!
//! The list is re-read from the source on every query, so a change to the
//! configuration is observed by the next call.

use std::collections::HashSet;

use crate::source::{ConfigSource, ProcessEnv};

/// Environment variable holding the disabled tool list.
pub const DISABLED_TOOLS_VAR: &str = "DISABLED_TOOLS";

/// Normalize a raw comma-separated list into a set of tool names.
///
/// Segments are trimmed and empty ones dropped, so `" A , ,B,"` yields `{"A", "B"}`.
pub fn parse_disabled_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Answers whether a tool is enabled, based on a disabled list read from a [`ConfigSource`].
#[derive(Debug, Clone)]
pub struct ToolFilter<S = ProcessEnv> {
    source: S,
    var: String,
}

impl ToolFilter<ProcessEnv> {
    /// Filter backed by the process environment's `DISABLED_TOOLS`.
    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for ToolFilter<ProcessEnv> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<S: ConfigSource> ToolFilter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            var: DISABLED_TOOLS_VAR.to_string(),
        }
    }

    /// Read the disabled list from `var` instead of `DISABLED_TOOLS`.
    pub fn with_var(mut self, var: impl Into<String>) -> Self {
        self.var = var.into();
        self
    }

    pub fn var_name(&self) -> &str {
        &self.var
    }

    /// Compute the current set of disabled tools.
    ///
    /// An unset or empty variable yields an empty set. Never fails.
    pub fn disabled_tools(&self) -> HashSet<String> {
        let raw = self.source.get(&self.var).unwrap_or_default();
        if raw.is_empty() {
            return HashSet::new();
        }

        let tools = parse_disabled_list(&raw);
        if !tools.is_empty() {
            let mut names: Vec<&str> = tools.iter().map(String::as_str).collect();
            names.sort_unstable();
            tracing::debug!("Disabled tools: {}", names.join(", "));
        }
        tools
    }

    /// Check if a tool is enabled (not in the disabled list).
    pub fn is_enabled(&self, tool_name: &str) -> bool {
        !self.disabled_tools().contains(tool_name)
    }

    /// Keep only the enabled names, preserving input order.
    ///
    /// The disabled list is read once for the whole batch.
    pub fn retain_enabled<I, T>(&self, names: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let disabled = self.disabled_tools();
        names
            .into_iter()
            .filter(|name| !disabled.contains(name.as_ref()))
            .collect()
    }
}

/// Get the set of tools disabled through the `DISABLED_TOOLS` environment variable.
pub fn disabled_tools() -> HashSet<String> {
    ToolFilter::from_env().disabled_tools()
}

/// Check if a tool is enabled according to the `DISABLED_TOOLS` environment variable.
pub fn tool_enabled(tool_name: &str) -> bool {
    ToolFilter::from_env().is_enabled(tool_name)
}
