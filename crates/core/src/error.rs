//! # Error Module
//!
//! Domain errors for the auction house core, defined with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every variant is recoverable at the call site: a failed operation
/// leaves all balances and auction state unchanged, and the caller
/// decides how to report the rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // === Bidding errors ===
    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    #[error("Invalid bid: {amount} does not exceed current bid {current}")]
    InvalidBid { amount: Decimal, current: Decimal },

    #[error("Auction is closed: {0}")]
    AuctionClosed(String),

    // === House errors ===
    #[error("Auction house is full: capacity {capacity} reached")]
    HouseFull { capacity: usize },

    #[error("Unknown auction index: {0}")]
    UnknownAuction(usize),

    #[error("Unknown participant index: {0}")]
    UnknownParticipant(usize),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check for an insufficient balance rejection
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, CoreError::InsufficientBalance { .. })
    }

    /// Check whether the error is a bid rejection (as opposed to a
    /// house-level addressing error)
    pub fn is_rejected_bid(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientBalance { .. }
                | CoreError::InvalidBid { .. }
                | CoreError::AuctionClosed(_)
        )
    }
}
