use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// The unique, numeric code of a part, e.g. `1001`.
#[derive(Debug, Clone, Copy, DeserializeFromStr, SerializeDisplay)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartCode(pub u32);

#[derive(Error, Debug, PartialEq)]
#[error("Invalid part code. value: '{value}', cause: {cause}")]
pub struct PartCodeError {
    value: String,
    cause: ParseIntError,
}

impl FromStr for PartCode {
    type Err = PartCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().parse::<u32>().map_err(|cause| PartCodeError {
            value: s.to_string(),
            cause,
        })?;

        Ok(PartCode(code))
    }
}

impl Display for PartCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PartCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A stocked item.
///
/// The code is fixed at creation.  The quantity can only be changed by the
/// [`crate::inventory::Inventory`] that holds the part, so that it can never go below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    code: PartCode,
    pub name: String,
    quantity: u32,
    pub location: String,
}

impl Part {
    pub fn new(name: String, code: PartCode, quantity: u32, location: String) -> Self {
        Self {
            code,
            name,
            quantity,
            location,
        }
    }

    pub fn code(&self) -> PartCode {
        self.code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
