use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::money::{Currency, Money, Withdrawal};

/// One dispensed withdrawal, flattened for CSV output. The `banknotes`
/// column is the space-joined pack list, e.g. `1x100 1x50`.
#[derive(Debug, Serialize)]
pub struct Receipt {
    pub card: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub banknotes: String,
}

impl Receipt {
    pub fn new(card: &str, amount: Money, withdrawal: &Withdrawal) -> Self {
        Self {
            card: card.to_owned(),
            amount: amount.amount(),
            currency: amount.currency(),
            banknotes: withdrawal.to_string(),
        }
    }
}

pub fn print_receipts<W>(
    output: &mut W,
    receipts: impl Iterator<Item = Receipt>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for receipt in receipts {
        if let Err(err) = writer.serialize(receipt) {
            anyhow::bail!("Failed to write receipt to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
