//! Hook processing service.

use std::io::{self, Read, Write};

use tracing::{debug, info, warn};

use crate::domain::{Decision, GuardError, HookInput, PushGuard};

/// Service for processing a single hook event.
pub struct HookService {
    guard: Option<PushGuard>,
}

impl HookService {
    /// Create a new HookService.
    ///
    /// A guard that fails to build leaves the service allowing everything.
    pub fn new() -> Self {
        let guard = match PushGuard::new() {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!("Guard unavailable, allowing all commands: {}", e);
                None
            }
        };
        Self { guard }
    }

    /// Run the hook against stdin and stderr, returning the exit code.
    pub fn run(&self) -> i32 {
        let stdin = io::stdin();
        let stderr = io::stderr();
        self.run_with(stdin.lock(), stderr.lock())
    }

    /// Read one payload from `reader`, write any deny message to `err`, and
    /// return the exit code.
    pub fn run_with<R: Read, W: Write>(&self, reader: R, mut err: W) -> i32 {
        let decision = self.decide(Self::read_payload(reader));
        info!(decision = decision.as_str(), "Hook decision");

        if let Decision::Deny { message } = &decision {
            // A failed write still blocks; the exit code carries the decision.
            if let Err(e) = writeln!(err, "{}", message).and_then(|_| err.flush()) {
                warn!("Failed to write deny message: {}", e);
            }
        }

        decision.exit_code()
    }

    /// Read the whole stream and decode it as UTF-8.
    pub fn read_payload<R: Read>(mut reader: R) -> Result<String, GuardError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Turn a raw payload into a decision. Every failure allows.
    pub fn decide(&self, payload: Result<String, GuardError>) -> Decision {
        match payload.and_then(|raw| self.process(&raw)) {
            Ok(decision) => decision,
            Err(e) => {
                debug!("Failing open: {}", e);
                Decision::Allow
            }
        }
    }

    /// Parse a payload and evaluate it.
    pub fn process(&self, raw: &str) -> Result<Decision, GuardError> {
        debug!("Received input: {}", raw);

        let input = HookInput::from_json(raw)?;
        debug!(command = %input.command(), "Parsed hook input");

        Ok(match &self.guard {
            Some(guard) => guard.evaluate(&input),
            None => Decision::Allow,
        })
    }
}

impl Default for HookService {
    fn default() -> Self {
        Self::new()
    }
}
