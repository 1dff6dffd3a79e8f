//! Owner-mode gate.
//!
//! A UI permission flag behind a shared passcode. It hides mutation
//! affordances from casual visitors and protects nothing else.

use crate::config::OWNER_PASSCODE;
use crate::error::{AppError, Result};
use log::{info, warn};

/// Gate states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    /// Passcode prompt open; `error` holds the last rejection message.
    Challenge { error: Option<String> },
    Unlocked,
}

#[derive(Debug, Default)]
pub struct OwnerGate {
    state: GateState,
}

impl OwnerGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Fails with [`AppError::OwnerModeRequired`] unless unlocked.
    pub fn require_unlocked(&self) -> Result<()> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(AppError::OwnerModeRequired)
        }
    }

    /// Handles the owner-mode chord.
    ///
    /// Unlocked locks immediately; otherwise the challenge opens with a
    /// cleared error message.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            GateState::Unlocked => {
                info!("Owner mode disabled");
                GateState::Locked
            }
            _ => GateState::Challenge { error: None },
        };
    }

    /// Checks `passcode` against the owner passcode.
    ///
    /// A wrong passcode keeps the challenge open with a message; there is
    /// no attempt limit.
    pub fn submit(&mut self, passcode: &str) -> Result<()> {
        match &self.state {
            GateState::Challenge { .. } => {}
            GateState::Unlocked => return Ok(()),
            GateState::Locked => return Err(AppError::ChallengeNotOpen),
        }

        if passcode == OWNER_PASSCODE {
            info!("Owner mode enabled");
            self.state = GateState::Unlocked;
            Ok(())
        } else {
            warn!("Rejected owner passcode");
            let err = AppError::WrongPasscode;
            self.state = GateState::Challenge {
                error: Some(err.to_string()),
            };
            Err(err)
        }
    }

    /// Closes the passcode prompt without unlocking.
    pub fn dismiss(&mut self) {
        if matches!(self.state, GateState::Challenge { .. }) {
            self.state = GateState::Locked;
        }
    }

    /// Message to show under the passcode input, if any.
    pub fn challenge_error(&self) -> Option<&str> {
        match &self.state {
            GateState::Challenge { error } => error.as_deref(),
            _ => None,
        }
    }
}
