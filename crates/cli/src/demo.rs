//! Demo dataset - the sample participants and auctions used by the
//! interactive session and the report command.

use rust_decimal_macros::dec;
use simauction_core::{Auction, AuctionHouse, CoreResult, Participant};

/// Build the demo auction house: ten participants and two auctions.
///
/// With `capacity` set, the house is bounded and refuses additions past
/// the limit; the default demo fits exactly in a capacity of 10.
pub fn seed_house(capacity: Option<usize>) -> CoreResult<AuctionHouse> {
    let mut house = match capacity {
        Some(n) => AuctionHouse::with_capacity(n),
        None => AuctionHouse::new(),
    };

    for participant in demo_participants() {
        house.add_participant(participant)?;
    }

    house.add_auction(Auction::item("Laptop", dec!(500), "Brand new laptop"))?;
    house.add_auction(Auction::art("Painting", dec!(2000), "Renowned artist"))?;

    Ok(house)
}

fn demo_participants() -> Vec<Participant> {
    vec![
        Participant::new("John", dec!(1000), "1234567890", "A123456789", "Male"),
        Participant::new("Alice", dec!(2000), "9876543210", "B987654321", "Female"),
        Participant::new("Robert", dec!(0), "7894561230", "C789456123", "Male"),
        Participant::new("Tom", dec!(1500), "2345678901", "D234567890", "Male"),
        Participant::new("Emma", dec!(1800), "8765432109", "E876543210", "Female"),
        Participant::new("Alex", dec!(1200), "3456789012", "F345678901", "Male"),
        Participant::new("Sarah", dec!(2500), "7654321098", "G765432109", "Female"),
        Participant::new("Mike", dec!(3000), "4567890123", "H456789012", "Male"),
        Participant::new("Emily", dec!(1400), "6543210987", "I654321098", "Female"),
        Participant::new("Daniel", dec!(1600), "5678901234", "J567890123", "Male"),
    ]
}
