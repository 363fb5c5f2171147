use std::fmt;

use serde::Serialize;

use crate::hash::{fnv1a_64, hash_text, hashed_prefix};

pub const ID_MODULUS: u64 = 1_000_000;
pub const ID_DIGITS: usize = 6;

/// Six-digit display identifier derived from text.
///
/// Collisions between different inputs are expected; the value is meant to be
/// memorable, not unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFormat {
    /// `XX XX XX`
    #[default]
    Spaced,
    /// `XXXXXX`
    Plain,
}

impl Identifier {
    pub fn from_text(text: &str) -> Self {
        Self::from_hash(hash_text(text))
    }

    pub fn from_hash(hash: u64) -> Self {
        // Reduced below ID_MODULUS, so the value always fits.
        Self((hash % ID_MODULUS) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn digits(self) -> String {
        format!("{:0width$}", self.0, width = ID_DIGITS)
    }

    pub fn spaced(self) -> String {
        format_spaced(&self.digits())
    }

    pub fn render(self, format: IdFormat) -> String {
        match format {
            IdFormat::Spaced => self.spaced(),
            IdFormat::Plain => self.digits(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:0width$}", self.0, width = ID_DIGITS)
    }
}

/// Groups a six-character id as `XX XX XX`; any other input is returned as is.
pub fn format_spaced(digits: &str) -> String {
    if digits.len() != ID_DIGITS || !digits.is_ascii() {
        return digits.to_string();
    }
    format!("{} {} {}", &digits[0..2], &digits[2..4], &digits[4..6])
}

pub fn generate(text: &str, spaced: bool) -> String {
    let format = if spaced {
        IdFormat::Spaced
    } else {
        IdFormat::Plain
    };
    Identifier::from_text(text).render(format)
}

/// Full account of how an identifier was derived from its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digest {
    pub id: String,
    pub spaced: String,
    pub hash: u64,
    pub input_bytes: usize,
    pub hashed_bytes: usize,
    pub truncated: bool,
}

impl Digest {
    pub fn of(text: &str) -> Self {
        let prefix = hashed_prefix(text);
        let hash = fnv1a_64(prefix.as_bytes());
        let identifier = Identifier::from_hash(hash);
        Self {
            id: identifier.digits(),
            spaced: identifier.spaced(),
            hash,
            input_bytes: text.len(),
            hashed_bytes: prefix.len(),
            truncated: prefix.len() < text.len(),
        }
    }
}
