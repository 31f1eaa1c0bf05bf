//! Decorative session banner.

/// Render `message` centered in an asterisk frame.
///
/// The frame is four characters wider than the message and five rows
/// tall, with the message on the middle row.
pub fn render(message: &str) -> String {
    let width = message.len() + 4;
    let height = 5;
    let mut out = String::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            if row == 0 || row == height - 1 || col == 0 || col == width - 1 {
                out.push('*');
                col += 1;
            } else if row == height / 2 && col == (width - message.len()) / 2 {
                out.push_str(message);
                col += message.len();
            } else {
                out.push(' ');
                col += 1;
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_geometry() {
        let banner = render("Welcome to Auction House");
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 5);
        let width = "Welcome to Auction House".len() + 4;
        for line in &lines {
            assert_eq!(line.len(), width);
        }

        // solid top and bottom borders
        assert!(lines[0].chars().all(|c| c == '*'));
        assert!(lines[4].chars().all(|c| c == '*'));

        // side borders on every row
        for line in &lines {
            assert!(line.starts_with('*'));
            assert!(line.ends_with('*'));
        }
    }

    #[test]
    fn test_banner_centers_message() {
        let banner = render("Hi");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines[2], "* Hi *");
        assert_eq!(lines[1], "*    *");
    }
}
