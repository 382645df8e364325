use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::inventory::CashInventory;
use crate::money::BanknotePack;

use super::{BanknoteAllocator, InfeasibleAmount};

/// Takes the largest denomination still fitting the remaining amount,
/// capped by stock, and never backtracks. Amounts reachable only through
/// a different combination than the greedy one are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyAllocator;

impl BanknoteAllocator for GreedyAllocator {
    fn allocate(
        &self,
        amount: Decimal,
        inventory: &CashInventory,
    ) -> Result<Vec<BanknotePack>, InfeasibleAmount> {
        let mut remaining = amount;
        let mut packs = Vec::new();
        for (banknote, available) in inventory.stock() {
            if remaining.is_zero() {
                break;
            }
            let face = Decimal::from(banknote.face_value());
            if remaining < face {
                continue;
            }
            let wanted = (remaining / face).floor();
            // a demand beyond u32 is bounded by stock anyway
            let take = wanted.to_u32().map_or(available, |n| n.min(available));
            if take == 0 {
                continue;
            }
            remaining -= face * Decimal::from(take);
            packs.push(BanknotePack::new(take, banknote));
        }
        if remaining.is_zero() {
            Ok(packs)
        } else {
            Err(InfeasibleAmount { remainder: remaining })
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::money::{Banknote, Currency};

    use super::*;

    fn stocked(notes: &[(Banknote, u32)]) -> CashInventory {
        let mut inventory = CashInventory::empty(Currency::PLN);
        for (banknote, count) in notes {
            inventory.add_notes(*banknote, *count).unwrap();
        }
        inventory
    }

    fn allocate(amount: u32, inventory: &CashInventory) -> Vec<BanknotePack> {
        GreedyAllocator
            .allocate(Decimal::from_u32(amount).unwrap(), inventory)
            .unwrap()
    }

    #[test]
    fn single_banknote_covers_the_whole_amount() {
        let inventory = stocked(&[(Banknote::Pln200, 10), (Banknote::Pln100, 10)]);
        let packs = allocate(200, &inventory);
        assert_eq!(packs, vec![BanknotePack::new(1, Banknote::Pln200)]);
    }

    #[test]
    fn mixes_denominations_highest_first() {
        let inventory = stocked(&[
            (Banknote::Pln10, 10),
            (Banknote::Pln20, 10),
            (Banknote::Pln50, 10),
            (Banknote::Pln100, 10),
            (Banknote::Pln200, 10),
        ]);
        let packs = allocate(180, &inventory);
        assert_eq!(
            packs,
            vec![
                BanknotePack::new(1, Banknote::Pln100),
                BanknotePack::new(1, Banknote::Pln50),
                BanknotePack::new(1, Banknote::Pln20),
                BanknotePack::new(1, Banknote::Pln10),
            ]
        );
        assert_eq!(
            packs.iter().map(BanknotePack::value).sum::<Decimal>(),
            Decimal::from_u32(180).unwrap()
        );
    }

    #[test]
    fn zero_amount_allocates_nothing() {
        let inventory = stocked(&[(Banknote::Pln100, 10)]);
        assert!(allocate(0, &inventory).is_empty());
        assert!(allocate(0, &CashInventory::empty(Currency::PLN)).is_empty());
    }

    #[test]
    fn depleted_stock_falls_through_to_smaller_notes() {
        let inventory = stocked(&[(Banknote::Pln200, 1), (Banknote::Pln100, 3)]);
        let packs = allocate(400, &inventory);
        assert_eq!(
            packs,
            vec![
                BanknotePack::new(1, Banknote::Pln200),
                BanknotePack::new(2, Banknote::Pln100),
            ]
        );
    }

    #[test]
    fn unreachable_amount_reports_the_remainder() {
        let inventory = stocked(&[(Banknote::Pln200, 10), (Banknote::Pln10, 10)]);
        let err = GreedyAllocator
            .allocate(Decimal::from_u32(201).unwrap(), &inventory)
            .unwrap_err();
        assert_eq!(err.remainder, Decimal::from_u32(1).unwrap());
    }

    #[test]
    fn amount_beyond_total_holdings_is_infeasible() {
        let inventory = stocked(&[(Banknote::Pln100, 2)]);
        assert!(
            GreedyAllocator
                .allocate(Decimal::from_u32(500).unwrap(), &inventory)
                .is_err()
        );
    }

    #[test]
    fn negative_amount_is_infeasible() {
        let inventory = stocked(&[(Banknote::Pln10, 10)]);
        let err = GreedyAllocator
            .allocate(Decimal::from_i32(-10).unwrap(), &inventory)
            .unwrap_err();
        assert_eq!(err.remainder, Decimal::from_i32(-10).unwrap());
    }

    #[test]
    fn fractional_amount_is_infeasible() {
        let inventory = stocked(&[(Banknote::Pln10, 10)]);
        assert!(
            GreedyAllocator
                .allocate(Decimal::new(155, 1), &inventory)
                .is_err()
        );
    }

    // 60 = 3x20 exists, but greedy grabs the 50 first and strands a
    // remainder of 10. Documented behavior, not a bug.
    #[test]
    fn greedy_does_not_backtrack() {
        let inventory = stocked(&[(Banknote::Pln50, 1), (Banknote::Pln20, 3)]);
        let err = GreedyAllocator
            .allocate(Decimal::from_u32(60).unwrap(), &inventory)
            .unwrap_err();
        assert_eq!(err.remainder, Decimal::from_u32(10).unwrap());
    }
}
