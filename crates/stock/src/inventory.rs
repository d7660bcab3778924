use thiserror::Error;
use tracing::{info, trace, warn, Level};
use crate::part::{Part, PartCode};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Duplicate part code. code: {code}")]
    DuplicateCode { code: PartCode },

    #[error("Unknown part. code: {code}")]
    UnknownPart { code: PartCode },

    #[error("Insufficient stock. code: {code}, current quantity: {quantity}, change: {delta}")]
    InsufficientStock { code: PartCode, quantity: u32, delta: i64 },

    #[error("Quantity overflow. code: {code}, current quantity: {quantity}, change: {delta}")]
    QuantityOverflow { code: PartCode, quantity: u32, delta: i64 },
}

/// In-memory collection of parts, in insertion order.
///
/// Codes are unique within an inventory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inventory {
    parts: Vec<Part>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn add(&mut self, part: Part) -> Result<(), InventoryError> {
        if self.find_by_code(part.code()).is_some() {
            warn!("Rejected part with duplicate code. code: {}", part.code());
            return Err(InventoryError::DuplicateCode { code: part.code() })
        }

        info!("Added part. code: {}, name: '{}'", part.code(), part.name);
        self.parts.push(part);

        Ok(())
    }

    /// Returns `true` if a part was removed.
    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn remove(&mut self, code: PartCode) -> bool {
        let index = self.parts.iter().position(|part| part.code() == code);

        match index {
            Some(index) => {
                let part = self.parts.remove(index);
                info!("Removed part. code: {}, name: '{}'", code, part.name);
                true
            },
            None => {
                trace!("No part to remove. code: {}", code);
                false
            }
        }
    }

    pub fn find_by_code(&self, code: PartCode) -> Option<&Part> {
        self.parts.iter().find(|part| part.code() == code)
    }

    pub fn list(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Applies `delta` to the quantity of the part, a negative delta removes stock.
    ///
    /// The change is only committed if the resulting quantity is not negative and still fits.
    /// Returns the new quantity.
    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn adjust_quantity(&mut self, code: PartCode, delta: i64) -> Result<u32, InventoryError> {
        let part = self.parts.iter_mut()
            .find(|part| part.code() == code)
            .ok_or(InventoryError::UnknownPart { code })?;

        let quantity = part.quantity();

        let new_quantity = i64::from(quantity)
            .checked_add(delta)
            .ok_or(InventoryError::QuantityOverflow { code, quantity, delta })?;

        if new_quantity < 0 {
            warn!("Insufficient stock. code: {}, quantity: {}, delta: {}", code, quantity, delta);
            return Err(InventoryError::InsufficientStock { code, quantity, delta })
        }

        let new_quantity = u32::try_from(new_quantity)
            .map_err(|_err| InventoryError::QuantityOverflow { code, quantity, delta })?;

        part.set_quantity(new_quantity);
        info!("Adjusted quantity. code: {}, old: {}, new: {}", code, quantity, new_quantity);

        Ok(new_quantity)
    }
}
