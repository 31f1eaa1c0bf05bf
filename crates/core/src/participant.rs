//! # Participant Module
//!
//! A participant is a bidder registered with the auction house: identity
//! details plus a cash balance. The balance never goes negative - the only
//! mutation is a validated deduction when a bid is accepted.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bidder with identity details and a cash balance.
///
/// The name doubles as the participant's identity key within a house:
/// auction winners are recorded by name and resolved back to a
/// participant by linear lookup at report time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    phone_number: String,
    account_details: String,
    gender: String,
    balance: Decimal,
}

impl Participant {
    /// Create a new participant with an initial balance
    pub fn new(
        name: &str,
        balance: Decimal,
        phone_number: &str,
        account_details: &str,
        gender: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            account_details: account_details.to_string(),
            gender: gender.to_string(),
            balance,
        }
    }

    /// Participant name (identity key within a house)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact phone number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Bank account details
    pub fn account_details(&self) -> &str {
        &self.account_details
    }

    /// Gender as registered
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Current cash balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Check whether the participant can cover `amount`
    pub fn can_afford(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Deduct `amount` from the balance.
    ///
    /// Fails with [`CoreError::InsufficientBalance`] when `amount` exceeds
    /// the balance; no partial deduction is performed.
    pub fn deduct_balance(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount > self.balance {
            return Err(CoreError::InsufficientBalance {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Multi-line dump of all fields, in the house's display wording
    pub fn display_info(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Phone Number: {}\n", self.phone_number));
        out.push_str(&format!("Account Details: {}\n", self.account_details));
        out.push_str(&format!("Gender: {}\n", self.gender));
        out.push_str(&format!("Balance: {}\n", self.balance));
        out
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (balance: {})", self.name, self.balance)
    }
}
