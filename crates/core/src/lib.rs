//! # Simauction Core
//!
//! Domain types for the auction house simulation.
//!
//! The crate is synchronous and I/O-free: every display operation returns
//! a `String` and the caller decides where the text goes.
//!
//! - [`Participant`] - a bidder with identity details and a cash balance
//! - [`Auction`] - the open/closed bidding state machine, with
//!   [`AuctionKind`] carrying the item/art variant metadata
//! - [`AuctionHouse`] - owns participants and auctions, renders listings
//!   and the end-of-day summary
//! - [`CoreError`] - recoverable rejection kinds for bids and additions
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use simauction_core::{Auction, AuctionHouse, Participant};
//!
//! let mut house = AuctionHouse::new();
//! house
//!     .add_participant(Participant::new(
//!         "John",
//!         Decimal::from(1000),
//!         "1234567890",
//!         "A123456789",
//!         "Male",
//!     ))
//!     .unwrap();
//! house
//!     .add_auction(Auction::item("Laptop", Decimal::from(500), "Brand new laptop"))
//!     .unwrap();
//!
//! house.place_bid(0, 0, Decimal::from(600)).unwrap();
//! assert_eq!(house.close_auction(0).unwrap(), Some("John".to_string()));
//! ```

pub mod auction;
pub mod error;
pub mod house;
pub mod participant;

// Re-export main types
pub use auction::{Auction, AuctionKind, AuctionStatus};
pub use error::{CoreError, CoreResult};
pub use house::AuctionHouse;
pub use participant::Participant;
