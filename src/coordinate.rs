//! Conversion between the 0-based internal coordinates and their display
//! form: a row letter followed by a 1-based column number (`"A1"`, `"C7"`).

use alloc::string::String;
use core::fmt;

use crate::common::{Coordinate, ParseError};

/// A line of player input after interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the session without a result.
    Quit,
    Help,
    Fire(Coordinate),
}

/// Letter used to label `row`.
pub fn row_label(row: usize) -> char {
    (b'A' + row as u8) as char
}

impl Coordinate {
    /// Display form, e.g. `(0, 0)` becomes `"A1"`.
    pub fn to_label(&self) -> String {
        alloc::format!("{}", self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col + 1)
    }
}

/// Parse a display-form coordinate for a board of edge `size`.
///
/// The first character, case-folded, selects the row; the remaining
/// characters must all be digits and name a 1-based column.
pub fn parse_coordinate(text: &str, size: usize) -> Result<Coordinate, ParseError> {
    let mut chars = text.chars();
    let (Some(first), Some(_)) = (chars.next(), chars.clone().next()) else {
        return Err(ParseError::BadFormat);
    };

    let row_ch = first.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(ParseError::RowOutOfRange);
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= size {
        return Err(ParseError::RowOutOfRange);
    }

    let rest = chars.as_str();
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::ColumnNotNumeric);
    }
    // all digits but too long for usize is still out of range
    let col = match rest.parse::<usize>() {
        Ok(col) => col,
        Err(_) => return Err(ParseError::ColumnOutOfRange),
    };
    if col == 0 || col > size {
        return Err(ParseError::ColumnOutOfRange);
    }
    Ok(Coordinate::new(row, col - 1))
}

/// Interpret one line of player input. The quit sentinel is recognised
/// before any coordinate parsing takes place.
pub fn parse_command(text: &str, size: usize) -> Result<Command, ParseError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if text == "?" || text.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }
    parse_coordinate(text, size).map(Command::Fire)
}
