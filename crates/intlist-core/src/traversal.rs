//! Read-only traversals: print and sum
//!
//! The free functions take the first node of a chain (`None` for an empty
//! list); the `IntList` methods delegate to them.

use std::fmt;
use std::io::{self, Write};

use crate::error::ListError;
use crate::list::{IntList, Node, values};

/// Text written before each value
pub const ELEMENT_PREFIX: &str = "A node: ";

/// Written after each value
pub const DELIMITER: char = '\t';

fn write_elements<W: fmt::Write>(front: Option<&Node>, out: &mut W) -> fmt::Result {
    for value in values(front) {
        write!(out, "{ELEMENT_PREFIX}{value}{DELIMITER}")?;
    }
    Ok(())
}

/// Write every value left to right, then a line terminator
///
/// # Errors
///
/// Returns the underlying I/O error if `out` rejects a write
pub fn write_to<W: Write>(front: Option<&Node>, out: &mut W) -> io::Result<()> {
    for value in values(front) {
        write!(out, "{ELEMENT_PREFIX}{value}{DELIMITER}")?;
    }
    writeln!(out)
}

/// Print every value to standard output, then a line terminator
///
/// # Errors
///
/// Returns the underlying I/O error if stdout is closed
pub fn print(front: Option<&Node>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_to(front, &mut stdout)?;
    stdout.flush()
}

/// Sum of all values, wrapping on `i32` overflow. Empty chains sum to 0.
#[must_use]
pub fn sum(front: Option<&Node>) -> i32 {
    values(front).fold(0, i32::wrapping_add)
}

/// Sum of all values, failing on the first addition that overflows
///
/// # Errors
///
/// Returns `ListError::SumOverflow` with the 1-based index of the element
/// whose addition left the `i32` range
pub fn checked_sum(front: Option<&Node>) -> Result<i32, ListError> {
    let mut total: i32 = 0;
    for (index, value) in values(front).enumerate() {
        total = total
            .checked_add(value)
            .ok_or(ListError::SumOverflow { steps: index + 1 })?;
    }
    Ok(total)
}

impl IntList {
    /// See [`write_to`]
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `out` rejects a write
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_to(self.head(), out)
    }

    /// See [`print`]
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if stdout is closed
    pub fn print(&self) -> io::Result<()> {
        print(self.head())
    }

    #[must_use]
    pub fn sum(&self) -> i32 {
        sum(self.head())
    }

    /// See [`checked_sum`]
    ///
    /// # Errors
    ///
    /// Returns `ListError::SumOverflow` if the total leaves the `i32` range
    pub fn checked_sum(&self) -> Result<i32, ListError> {
        checked_sum(self.head())
    }
}

/// Element text without the trailing line terminator
impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(self.head(), f)
    }
}
