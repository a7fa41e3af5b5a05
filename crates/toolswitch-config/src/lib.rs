//! toolswitch-config: operator-controlled tool disabling.
//!
//! Provides:
//! - Parsing of the comma-separated `DISABLED_TOOLS` variable into a set
//! - Enablement queries re-evaluated against the current configuration on every call
//! - Pluggable configuration sources (process env, closures, env files)

pub mod env_file;
pub mod filter;
pub mod source;

pub use env_file::{ConfigError, EnvFile, load_env_file};
pub use filter::{DISABLED_TOOLS_VAR, ToolFilter, disabled_tools, parse_disabled_list, tool_enabled};
pub use source::{ConfigSource, Layered, ProcessEnv};
