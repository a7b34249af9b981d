//! Client-side admin gate.
//!
//! The secret ships with the client bundle, so this only hides the add-form.
//! It is not access control; anything that must be protected needs a check
//! on the server.

use log::{info, warn};

use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGate {
    secret: String,
    entered: String,
    authenticated: bool,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            entered: String::new(),
            authenticated: false,
        }
    }

    pub fn entered(&self) -> &str {
        &self.entered
    }

    pub fn set_entered(&mut self, value: impl Into<String>) {
        self.entered = value.into();
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compares the entered password with the secret.
    pub fn submit(&mut self) -> Result<(), AuthError> {
        if self.entered == self.secret {
            info!("Admin panel unlocked");
            self.authenticated = true;
            Ok(())
        } else {
            warn!("Admin login rejected");
            Err(AuthError::WrongPassword)
        }
    }
}
