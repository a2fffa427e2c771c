//! Core domain types for hook input and decisions.

use serde::Deserialize;
use serde_json::Value;

use super::GuardError;

/// Hook input received from the agent.
///
/// Only `tool_input.command` is read. Every other field is ignored, and a
/// missing `tool_input` behaves like an empty command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Tool-specific input
    #[serde(default)]
    pub tool_input: ToolInput,
}

/// Tool input carrying the shell command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// Command to execute
    #[serde(default)]
    pub command: String,
}

impl HookInput {
    /// Parse a raw JSON payload.
    ///
    /// The payload goes through `serde_json::Value` first so a repeated key
    /// keeps its last value instead of failing as a duplicate field.
    pub fn from_json(raw: &str) -> Result<Self, GuardError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(serde_json::from_value(value)?)
    }

    /// The command string, empty when absent.
    pub fn command(&self) -> &str {
        &self.tool_input.command
    }
}

/// Processing decision with optional deny message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the operation
    Allow,
    /// Deny the operation; `message` is written to stderr
    Deny { message: String },
}

impl Decision {
    /// Get exit code for this decision.
    ///
    /// - Allow: 0
    /// - Deny: 2
    pub fn exit_code(&self) -> i32 {
        match self {
            Decision::Allow => 0,
            Decision::Deny { .. } => 2,
        }
    }

    /// Lowercase label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny { .. } => "deny",
        }
    }
}
