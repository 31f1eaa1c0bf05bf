//! # Auction Module
//!
//! The bidding state machine. An auction starts Open with the current bid
//! equal to the starting bid, accepts strictly increasing bids from
//! participants who can cover them, and closes exactly once - with a
//! winner if at least one bid was accepted.
//!
//! Item and art auctions share all bidding behavior; they differ only in
//! the metadata shown when the auction is displayed, so the variant lives
//! in a payload enum rather than a trait hierarchy.

use crate::error::{CoreError, CoreResult};
use crate::participant::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant-specific metadata for an auction listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AuctionKind {
    /// General item with a free-form description
    Item { description: String },
    /// Artwork attributed to an artist
    Art { artist: String },
}

impl AuctionKind {
    /// Heading used when the auction is displayed
    pub fn label(&self) -> &'static str {
        match self {
            AuctionKind::Item { .. } => "Item Auction",
            AuctionKind::Art { .. } => "Art Auction",
        }
    }

    /// The variant metadata as a (field label, value) pair
    pub fn metadata(&self) -> (&'static str, &str) {
        match self {
            AuctionKind::Item { description } => ("Description", description),
            AuctionKind::Art { artist } => ("Artist", artist),
        }
    }
}

/// Auction lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    /// Accepting bids
    Open,
    /// Terminal - current bid and winner are frozen
    Closed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Open => "Open",
            AuctionStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single auction: title, bidding state, and variant metadata.
///
/// The current bid is monotonically non-decreasing while the auction is
/// open. Once closed, neither the current bid nor the winner can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    title: String,
    starting_bid: Decimal,
    current_bid: Decimal,
    winner: Option<String>,
    status: AuctionStatus,
    kind: AuctionKind,
}

impl Auction {
    fn new(title: &str, starting_bid: Decimal, kind: AuctionKind) -> Self {
        Self {
            title: title.to_string(),
            starting_bid,
            current_bid: starting_bid,
            winner: None,
            status: AuctionStatus::Open,
            kind,
        }
    }

    /// Create an item auction
    pub fn item(title: &str, starting_bid: Decimal, description: &str) -> Self {
        Self::new(
            title,
            starting_bid,
            AuctionKind::Item {
                description: description.to_string(),
            },
        )
    }

    /// Create an art auction
    pub fn art(title: &str, starting_bid: Decimal, artist: &str) -> Self {
        Self::new(
            title,
            starting_bid,
            AuctionKind::Art {
                artist: artist.to_string(),
            },
        )
    }

    /// Place a bid for `bidder`.
    ///
    /// Preconditions, checked in order:
    /// 1. the auction is open, else [`CoreError::AuctionClosed`];
    /// 2. `amount` strictly exceeds the current bid (equal bids are
    ///    rejected), else [`CoreError::InvalidBid`];
    /// 3. `amount` is within the bidder's balance, else
    ///    [`CoreError::InsufficientBalance`].
    ///
    /// On success the full amount is deducted from the bidder immediately.
    /// A participant who is later outbid is NOT refunded - deduct-on-bid
    /// is the house's policy. On failure nothing changes.
    pub fn place_bid(&mut self, bidder: &mut Participant, amount: Decimal) -> CoreResult<()> {
        if self.status == AuctionStatus::Closed {
            return Err(CoreError::AuctionClosed(self.title.clone()));
        }
        if amount <= self.current_bid {
            return Err(CoreError::InvalidBid {
                amount,
                current: self.current_bid,
            });
        }
        if amount > bidder.balance() {
            return Err(CoreError::InsufficientBalance {
                needed: amount,
                available: bidder.balance(),
            });
        }

        bidder.deduct_balance(amount)?;
        self.current_bid = amount;
        self.winner = Some(bidder.name().to_string());
        Ok(())
    }

    /// Close the auction and report the winner.
    ///
    /// Returns the winner's name, or `None` when no bid was ever
    /// accepted. Closing an already-closed auction re-reports the same
    /// outcome; the frozen bid and winner are never touched again.
    pub fn close(&mut self) -> Option<&str> {
        self.status = AuctionStatus::Closed;
        self.winner.as_deref()
    }

    /// Auction title (assumed unique per house for display purposes)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The opening bid the auction was listed at
    pub fn starting_bid(&self) -> Decimal {
        self.starting_bid
    }

    /// The highest accepted bid so far (equals the starting bid before
    /// any bid is accepted)
    pub fn current_bid(&self) -> Decimal {
        self.current_bid
    }

    /// Name of the participant holding the current bid, if any
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Whether the auction still accepts bids
    pub fn is_open(&self) -> bool {
        self.status == AuctionStatus::Open
    }

    /// Lifecycle status
    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    /// Variant metadata
    pub fn kind(&self) -> &AuctionKind {
        &self.kind
    }

    /// Variant-specific multi-line dump in the house's display wording
    pub fn display_info(&self) -> String {
        let (meta_label, meta_value) = self.kind.metadata();
        let mut out = String::new();
        out.push_str(&format!("{}: {}\n", self.kind.label(), self.title));
        out.push_str(&format!("{}: {}\n", meta_label, meta_value));
        out.push_str(&format!("Starting Bid: {}\n", self.starting_bid));
        out.push_str(&format!("Current Bid: {}\n", self.current_bid));
        out.push_str(&format!("Auction Status: {}\n", self.status));
        out
    }
}

impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, current bid: {})",
            self.title, self.status, self.current_bid
        )
    }
}
