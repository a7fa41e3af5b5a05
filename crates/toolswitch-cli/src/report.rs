//! Rendering of filter results for the CLI.

use std::fmt;
use std::process::ExitCode;

use serde::Serialize;
use toolswitch_config::{ConfigSource, ToolFilter};

/// Enablement of a single tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub enabled: bool,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.enabled { "enabled" } else { "disabled" };
        write!(f, "{}: {state}", self.name)
    }
}

/// Disabled tool names in sorted order.
pub fn sorted_disabled<S: ConfigSource>(filter: &ToolFilter<S>) -> Vec<String> {
    let mut names: Vec<String> = filter.disabled_tools().into_iter().collect();
    names.sort();
    names
}

/// Status of each requested name, against a single read of the disabled list.
pub fn check<S: ConfigSource>(filter: &ToolFilter<S>, names: &[String]) -> Vec<ToolStatus> {
    let disabled = filter.disabled_tools();
    names
        .iter()
        .map(|name| ToolStatus {
            name: name.clone(),
            enabled: !disabled.contains(name),
        })
        .collect()
}

/// Exit status for `check`: success only when every named tool is enabled.
pub fn exit_code(statuses: &[ToolStatus]) -> ExitCode {
    let disabled = statuses.iter().filter(|s| !s.enabled).count();
    if disabled == 0 {
        ExitCode::SUCCESS
    } else {
        tracing::debug!("{disabled} of {} tools disabled", statuses.len());
        ExitCode::FAILURE
    }
}
