use thiserror::Error;

use crate::allocator::BanknoteAllocator;
use crate::allocator::greedy::GreedyAllocator;
use crate::bank::{AuthorizationError, Bank, Card, ChargeError, PinCode};
use crate::inventory::{CashInventory, InventoryError};
use crate::money::{Currency, Money, Withdrawal};

#[derive(Debug, Error)]
pub enum WithdrawalError {
    #[error("requested {requested}, but this machine only dispenses {supported}")]
    WrongCurrency {
        requested: Currency,
        supported: Currency,
    },
    #[error("{amount} cannot be paid out from the current inventory")]
    WrongAmount { amount: Money },
    #[error("authorization failed: {0}")]
    AuthorizationFailed(#[from] AuthorizationError),
    #[error("charge failed after the cash was dispensed: {source}")]
    ChargeFailed {
        /// Banknotes that had already left the tray when the charge
        /// bounced. The inventory deduction is not rolled back.
        dispensed: Withdrawal,
        source: ChargeError,
    },
}

/// Cash machine holding an inventory and speaking to one bank.
///
/// A withdrawal is a single synchronous sequence: validate the currency,
/// authorize with the bank, allocate banknotes, debit the inventory,
/// charge the account. Every early exit leaves the inventory untouched.
pub struct CashMachine<B, A = GreedyAllocator> {
    bank: B,
    allocator: A,
    inventory: CashInventory,
}

impl<B: Bank> CashMachine<B> {
    pub fn new(bank: B, inventory: CashInventory) -> Self {
        Self {
            bank,
            allocator: GreedyAllocator,
            inventory,
        }
    }
}

impl<B: Bank, A: BanknoteAllocator> CashMachine<B, A> {
    pub fn with_allocator(bank: B, inventory: CashInventory, allocator: A) -> Self {
        Self {
            bank,
            allocator,
            inventory,
        }
    }

    pub fn inventory(&self) -> &CashInventory {
        &self.inventory
    }

    /// Replaces the holding, e.g. after a refill. The machine keeps the
    /// currency it was created with.
    pub fn set_inventory(&mut self, inventory: CashInventory) -> Result<(), InventoryError> {
        if inventory.currency() != self.inventory.currency() {
            return Err(InventoryError::ForeignCurrency {
                loaded: inventory.currency(),
                configured: self.inventory.currency(),
            });
        }
        self.inventory = inventory;
        Ok(())
    }

    /// Runs one withdrawal transaction end to end.
    ///
    /// The zero amount is not special: it passes the currency check, is
    /// authorized and charged like any other request, and dispenses an
    /// empty withdrawal.
    pub fn withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal, WithdrawalError> {
        let supported = self.inventory.currency();
        if amount.currency() != supported {
            return Err(WithdrawalError::WrongCurrency {
                requested: amount.currency(),
                supported,
            });
        }

        let token = self.bank.authorize(&pin.digits(), card.number())?;

        let packs = self
            .allocator
            .allocate(amount.amount(), &self.inventory)
            .map_err(|_| WithdrawalError::WrongAmount { amount })?;
        self.inventory.deduct(&packs);
        let withdrawal = Withdrawal::new(packs);
        tracing::debug!(amount = %amount, banknotes = %withdrawal, "withdrawal dispensed");

        if let Err(source) = self.bank.charge(token, amount) {
            tracing::warn!(amount = %amount, "charge failed after dispensing");
            return Err(WithdrawalError::ChargeFailed {
                dispensed: withdrawal,
                source,
            });
        }
        Ok(withdrawal)
    }
}
