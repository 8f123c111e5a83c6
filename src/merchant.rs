//! Merchant role gate.
//!
//! A single shared passcode separates the customer surfaces from the
//! merchant panel (order management, catalog edits, shop reset). The gate
//! yields a [`Role`] value held in session memory; there is no lockout and
//! no expiry beyond the life of that value.

use tracing::{info, warn};

use crate::config::Config;

/// The two modes a session can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Merchant,
}

impl Role {
    pub fn is_merchant(self) -> bool {
        self == Role::Merchant
    }
}

/// The configured merchant secret.
#[derive(Debug, Clone)]
pub struct Passcode(String);

impl Passcode {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Compares without short-circuiting on the first mismatched byte.
    pub fn verify(&self, attempt: &str) -> bool {
        let secret = self.0.as_bytes();
        let attempt = attempt.as_bytes();
        if secret.len() != attempt.len() {
            return false;
        }
        secret
            .iter()
            .zip(attempt)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Gate in front of the merchant surfaces.
///
/// With no passcode configured, merchant login is disabled entirely.
pub struct MerchantGate {
    passcode: Option<Passcode>,
}

impl MerchantGate {
    pub fn new(passcode: Option<Passcode>) -> Self {
        Self { passcode }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.merchant_passcode.clone().map(Passcode::new))
    }

    /// Checks an attempt. A wrong passcode is a normal `Customer` outcome
    /// that callers surface as a warning; it is never an error.
    pub fn login(&self, attempt: &str) -> Role {
        match &self.passcode {
            Some(passcode) if passcode.verify(attempt) => {
                info!("merchant login accepted");
                Role::Merchant
            }
            Some(_) => {
                warn!("merchant login rejected");
                Role::Customer
            }
            None => {
                warn!("merchant login attempted but no passcode is configured");
                Role::Customer
            }
        }
    }
}
