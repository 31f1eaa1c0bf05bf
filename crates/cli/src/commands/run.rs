//! Interactive auction session - the menu loop over the demo house.
//!
//! Rejected bids are reported and the session continues; only "Exit" or
//! end of input ends the loop.

use anyhow::Result;
use rust_decimal::Decimal;
use simauction_core::AuctionHouse;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::banner;
use crate::demo;

/// Seed the demo house and run the menu loop over stdin/stdout
pub fn interactive_session(capacity: Option<usize>) -> Result<()> {
    let mut house = demo::seed_house(capacity)?;
    info!(
        participants = house.participants().len(),
        auctions = house.auctions().len(),
        "auction session started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&mut house, stdin.lock(), stdout.lock())
}

/// Drive the menu loop, reading choices from `input` and writing all
/// session text to `output`.
///
/// Split out from [`interactive_session`] so tests can run whole
/// sessions from scripted input.
pub fn run_menu<R: BufRead, W: Write>(
    house: &mut AuctionHouse,
    mut input: R,
    mut output: W,
) -> Result<()> {
    write!(output, "{}", banner::render("Welcome to Auction House"))?;

    loop {
        write!(
            output,
            "\n----- Menu -----\n\
             1. Place Bid\n\
             2. Close Auction\n\
             3. Display Auctions\n\
             4. Display Participants\n\
             5. End of Day Summary\n\
             6. Exit\n\
             Enter your choice: "
        )?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.trim() {
            "1" => place_bid(house, &mut input, &mut output)?,
            "2" => close_auction(house, &mut input, &mut output)?,
            "3" => write!(output, "{}", house.display_auctions_info())?,
            "4" => write!(output, "{}", house.display_participants_info())?,
            "5" => write!(output, "{}", house.display_end_of_day_summary())?,
            "6" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    info!("auction session ended");
    Ok(())
}

fn place_bid<R: BufRead, W: Write>(
    house: &mut AuctionHouse,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let auction_prompt = format!(
        "Enter the auction index (0 to {}): ",
        house.auctions().len().saturating_sub(1)
    );
    let Some(auction_index) = prompt_number::<usize, _, _>(input, output, &auction_prompt)? else {
        return Ok(());
    };

    let participant_prompt = format!(
        "Enter the participant index (0 to {}): ",
        house.participants().len().saturating_sub(1)
    );
    let Some(participant_index) =
        prompt_number::<usize, _, _>(input, output, &participant_prompt)?
    else {
        return Ok(());
    };

    let Some(amount) = prompt_number::<Decimal, _, _>(input, output, "Enter the bid amount: ")?
    else {
        return Ok(());
    };

    match house.place_bid(auction_index, participant_index, amount) {
        Ok(()) => {
            info!(
                auction = auction_index,
                participant = participant_index,
                amount = %amount,
                "bid accepted"
            );
            writeln!(output, "Bid placed successfully!")?;
        }
        Err(err) if err.is_rejected_bid() => {
            warn!(%err, "bid rejected");
            writeln!(output, "Bid placement failed: {}", err)?;
        }
        Err(err) => {
            warn!(%err, "bid dispatch failed");
            writeln!(output, "Error: {}", err)?;
        }
    }

    Ok(())
}

fn close_auction<R: BufRead, W: Write>(
    house: &mut AuctionHouse,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let prompt = format!(
        "Enter the auction index (0 to {}) to close: ",
        house.auctions().len().saturating_sub(1)
    );
    let Some(auction_index) = prompt_number::<usize, _, _>(input, output, &prompt)? else {
        return Ok(());
    };

    match house.close_auction(auction_index) {
        Ok(Some(winner)) => {
            info!(auction = auction_index, winner = %winner, "auction closed");
            writeln!(output, "Auction closed. Winner: {}", winner)?;
        }
        Ok(None) => {
            info!(auction = auction_index, "auction closed without bids");
            writeln!(output, "Auction closed. No winner.")?;
        }
        Err(err) => {
            writeln!(output, "Error: {}", err)?;
        }
    }

    Ok(())
}

/// Prompt for a value and parse it; `None` means end of input or a line
/// that did not parse (already reported to the user).
fn prompt_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "Invalid input. Please enter a number.")?;
            Ok(None)
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session against the demo house and capture output
    fn run_session(script: &str) -> String {
        let mut house = demo::seed_house(None).unwrap();
        let mut output = Vec::new();
        run_menu(&mut house, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_banner_and_menu() {
        let output = run_session("6\n");
        assert!(output.contains("Welcome to Auction House"));
        assert!(output.contains("----- Menu -----"));
        assert!(output.contains("1. Place Bid"));
        assert!(output.contains("6. Exit"));
    }

    #[test]
    fn test_display_choices() {
        let output = run_session("3\n4\n6\n");
        assert!(output.contains("Auction House: Available Auctions"));
        assert!(output.contains("Item Auction: Laptop"));
        assert!(output.contains("Auction House: Participants"));
        assert!(output.contains("Name: John"));
    }

    #[test]
    fn test_successful_bid() {
        // John (index 0) bids 600 on the laptop (index 0)
        let output = run_session("1\n0\n0\n600\n6\n");
        assert!(output.contains("Enter the auction index (0 to 1): "));
        assert!(output.contains("Enter the participant index (0 to 9): "));
        assert!(output.contains("Enter the bid amount: "));
        assert!(output.contains("Bid placed successfully!"));
    }

    #[test]
    fn test_rejected_equal_bid() {
        // John bids 600, then Alice matches it and is rejected
        let output = run_session("1\n0\n0\n600\n1\n0\n1\n600\n6\n");
        assert!(output.contains("Bid placed successfully!"));
        assert!(output
            .contains("Bid placement failed: Invalid bid: 600 does not exceed current bid 600"));
    }

    #[test]
    fn test_bid_on_unknown_auction() {
        let output = run_session("1\n7\n0\n600\n6\n");
        assert!(output.contains("Error: Unknown auction index: 7"));
    }

    #[test]
    fn test_close_auction_without_bids() {
        let output = run_session("2\n1\n6\n");
        assert!(output.contains("Enter the auction index (0 to 1) to close: "));
        assert!(output.contains("Auction closed. No winner."));
    }

    #[test]
    fn test_close_auction_with_winner() {
        let output = run_session("1\n0\n1\n600\n2\n0\n5\n6\n");
        assert!(output.contains("Auction closed. Winner: Alice"));
        // the summary afterwards resolves the winner back to Alice
        assert!(output.contains("Participant Alice won the item."));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let output = run_session("9\n6\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_non_numeric_bid_input() {
        let output = run_session("1\nabc\n6\n");
        assert!(output.contains("Invalid input. Please enter a number."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        // no explicit Exit choice - the session ends at EOF
        let output = run_session("3\n");
        assert!(output.contains("Auction House: Available Auctions"));
    }
}
