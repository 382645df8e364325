use rust_decimal::Decimal;
use thiserror::Error;

use crate::inventory::CashInventory;
use crate::money::BanknotePack;

pub mod greedy;

/// Amount that cannot be covered by the banknotes on hand.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("a remainder of {remainder} cannot be paid out with the available banknotes")]
pub struct InfeasibleAmount {
    pub remainder: Decimal,
}

/// Strategy seam for turning an amount into banknote packs. The
/// transaction flow in [`crate::machine`] stays the same whichever
/// solver is plugged in.
pub trait BanknoteAllocator {
    /// Picks packs from `inventory` totalling exactly `amount`, highest
    /// denomination first, without mutating the inventory.
    fn allocate(
        &self,
        amount: Decimal,
        inventory: &CashInventory,
    ) -> Result<Vec<BanknotePack>, InfeasibleAmount>;
}
