//! Main-branch push guard.

use regex::Regex;

use crate::domain::{Decision, GuardError, HookInput};

/// Matches `git push [-flag ...] origin main` and `git push main`, where
/// `main` must be followed by whitespace or the end of the command.
const MAIN_PUSH_PATTERN: &str =
    r"git push\s+(-[^\s]+\s+)*origin\s+main(\s|$)|git push\s+main(\s|$)";

const DENY_WARNING: &str = "!! Direct push to the main branch is forbidden!";
const DENY_SUGGESTION: &str = "-> Create a feature branch and merge it through a pull request.";

/// Guard that denies direct pushes to `main`.
pub struct PushGuard {
    pattern: Regex,
}

impl PushGuard {
    /// Create a new PushGuard.
    ///
    /// # Errors
    ///
    /// Returns error if the built-in pattern fails to compile.
    pub fn new() -> Result<Self, GuardError> {
        Ok(Self {
            pattern: Regex::new(MAIN_PUSH_PATTERN)?,
        })
    }

    /// Check whether the command pushes straight to `main`.
    pub fn matches(&self, command: &str) -> bool {
        self.pattern.is_match(command)
    }

    /// Decide on a parsed hook input.
    pub fn evaluate(&self, input: &HookInput) -> Decision {
        if self.matches(input.command()) {
            Decision::Deny {
                message: format!("{DENY_WARNING}\n{DENY_SUGGESTION}"),
            }
        } else {
            Decision::Allow
        }
    }
}
