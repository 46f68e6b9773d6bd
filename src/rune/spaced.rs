//! Implements `SpacedRune`

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::utils::constants::{DOT_SPACER, SPACER};
use crate::SpacedRuneError;

/// A rune name split into its letters and a spacer bitmask.
///
/// Bit `i` of `spacers` means a spacer is displayed right after the letter at
/// index `i`, so `UNCOMMON•GOODS` is stored as `UNCOMMONGOODS` with bit 7 set.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    DeserializeFromStr,
    SerializeDisplay,
)]
pub struct SpacedRune {
    pub rune: String,
    pub spacers: u32,
}

impl SpacedRune {
    /// Creates a spaced rune from already split letters and spacers.
    ///
    /// # Errors
    /// * [`SpacedRuneError::Character`] if `rune` contains anything but `A-Z`.
    /// * [`SpacedRuneError::TrailingSpacer`] if a spacer bit is set at or beyond
    ///   the last letter.
    pub fn new(rune: impl Into<String>, spacers: u32) -> Result<Self, SpacedRuneError> {
        let rune = rune.into();

        if let Some(c) = rune.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(SpacedRuneError::Character(c));
        }

        check_trailing(&rune, spacers)?;

        Ok(Self { rune, spacers })
    }

    /// Whether a spacer is displayed right after the letter at `index`.
    pub fn has_spacer_after(&self, index: usize) -> bool {
        index < u32::BITS as usize && self.spacers & (1 << index) != 0
    }

    /// Renders the name using `separator` between spaced letters.
    pub fn to_string_with(&self, separator: char) -> String {
        let len = self.rune.len();
        let mut name = String::with_capacity(len * 2);

        for (i, c) in self.rune.chars().enumerate() {
            name.push(c);

            if i + 1 < len && self.has_spacer_after(i) {
                name.push(separator);
            }
        }

        name
    }
}

/// Position of the highest set bit plus one.
fn bit_length(spacers: u32) -> usize {
    (u32::BITS - spacers.leading_zeros()) as usize
}

fn check_trailing(rune: &str, spacers: u32) -> Result<(), SpacedRuneError> {
    if spacers != 0 && bit_length(spacers) >= rune.len() {
        return Err(SpacedRuneError::TrailingSpacer);
    }

    Ok(())
}

impl FromStr for SpacedRune {
    type Err = SpacedRuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rune = String::with_capacity(s.len());
        let mut spacers = 0u32;

        for c in s.chars() {
            match c {
                'A'..='Z' => rune.push(c),
                SPACER | DOT_SPACER => {
                    let position = rune
                        .len()
                        .checked_sub(1)
                        .ok_or(SpacedRuneError::LeadingSpacer)?;
                    let flag = u32::try_from(position)
                        .ok()
                        .and_then(|shift| 1u32.checked_shl(shift))
                        .ok_or(SpacedRuneError::SpacerOutOfRange(position))?;

                    if spacers & flag != 0 {
                        return Err(SpacedRuneError::DoubleSpacer);
                    }
                    spacers |= flag;
                }
                _ => return Err(SpacedRuneError::Character(c)),
            }
        }

        check_trailing(&rune, spacers)?;

        Ok(Self { rune, spacers })
    }
}

impl fmt::Display for SpacedRune {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_string_with(SPACER))
    }
}
