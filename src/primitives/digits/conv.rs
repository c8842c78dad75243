//! Decimal and machine-integer conversions for `Digits`.

use super::core::{Digits, RADIX, RADIX_DECIMALS};

use crate::error::{Error, Result};

use std::fmt::{Display, Formatter};

impl Digits {
    /// Parses unsigned decimal text into cells of nine digits, starting from
    /// the least significant end.
    ///
    /// Leading zeros are accepted and dropped. Any sign must be stripped by
    /// the caller.
    ///
    /// # Errors
    /// [`Error::EmptyInput`] for empty text, [`Error::InvalidDigit`] for
    /// anything other than ASCII digits.
    pub fn parse_decimal(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        if let Some((index, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(Error::InvalidDigit { index, found });
        }

        let cells = text
            .as_bytes()
            .rchunks(RADIX_DECIMALS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32)
            })
            .collect();

        let mut out = Digits(cells);
        out.normalize();

        Ok(out)
    }
}

impl From<u32> for Digits {
    fn from(value: u32) -> Self {
        Digits::from_u32(value)
    }
}

impl From<u64> for Digits {
    fn from(value: u64) -> Self {
        Digits::from_u64(value)
    }
}

/// Attempts to narrow a magnitude into `u64` (fails above `u64::MAX`).
impl TryFrom<&Digits> for u64 {
    type Error = ();

    fn try_from(value: &Digits) -> std::result::Result<Self, Self::Error> {
        if value.0.len() > 3 {
            return Err(());
        }

        value.0.iter().rev().try_fold(0u64, |acc, &cell| {
            acc.checked_mul(RADIX as u64)
                .and_then(|v| v.checked_add(cell as u64))
                .ok_or(())
        })
    }
}

impl Display for Digits {
    /// Writes the plain decimal value: the top cell as is, every lower cell
    /// zero-padded to nine digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut cells = self.0.iter().rev();

        if let Some(top) = cells.next() {
            write!(f, "{}", top)?;
        }

        for cell in cells {
            write!(f, "{:09}", cell)?;
        }

        Ok(())
    }
}
