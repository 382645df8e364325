use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::{Banknote, BanknotePack, Currency, Money};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("cannot stock {banknote} notes in a {inventory} inventory")]
    ForeignBanknote {
        banknote: Banknote,
        inventory: Currency,
    },
    #[error("cannot load a {loaded} inventory into a {configured} machine")]
    ForeignCurrency {
        loaded: Currency,
        configured: Currency,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StockEntry {
    banknote: Banknote,
    count: u32,
}

/// The machine's cash holding. Keeps at most one entry per banknote,
/// ordered by descending face value; the currency is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashInventory {
    currency: Currency,
    stock: Vec<StockEntry>,
}

impl CashInventory {
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            stock: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Merges `count` notes into the holding. Zero notes is a no-op,
    /// notes denominated in another currency are rejected.
    pub fn add_notes(&mut self, banknote: Banknote, count: u32) -> Result<(), InventoryError> {
        if banknote.currency() != self.currency {
            return Err(InventoryError::ForeignBanknote {
                banknote,
                inventory: self.currency,
            });
        }
        if count == 0 {
            return Ok(());
        }
        match self.stock.iter_mut().find(|entry| entry.banknote == banknote) {
            Some(entry) => entry.count += count,
            None => {
                self.stock.push(StockEntry { banknote, count });
                self.stock
                    .sort_by(|a, b| b.banknote.face_value().cmp(&a.banknote.face_value()));
            }
        }
        Ok(())
    }

    pub fn count_of(&self, banknote: Banknote) -> u32 {
        self.stock
            .iter()
            .find(|entry| entry.banknote == banknote)
            .map_or(0, |entry| entry.count)
    }

    /// Stock entries in descending face-value order.
    pub fn stock(&self) -> impl Iterator<Item = (Banknote, u32)> + '_ {
        self.stock.iter().map(|entry| (entry.banknote, entry.count))
    }

    pub fn total_value(&self) -> Money {
        let amount = self
            .stock
            .iter()
            .map(|entry| {
                Decimal::from(u64::from(entry.count) * u64::from(entry.banknote.face_value()))
            })
            .sum();
        Money::new(amount, self.currency)
    }

    /// Removes a dispensed allocation. Only packs the allocator derived
    /// from the current stock may be passed in.
    pub(crate) fn deduct(&mut self, packs: &[BanknotePack]) {
        for pack in packs {
            if let Some(entry) = self
                .stock
                .iter_mut()
                .find(|entry| entry.banknote == pack.banknote())
            {
                debug_assert!(entry.count >= pack.count());
                entry.count = entry.count.saturating_sub(pack.count());
            }
        }
    }
}
