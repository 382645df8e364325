//! Bootstrap layer wiring the machine to CSV input and output. It could
//! live in its own crate, but the integration test drives the exact code
//! the binary runs, so I keep it here.

use std::io::{Read, Write};

use anyhow::Result;
use thiserror::Error;

use crate::bank::{Bank, Card, CredentialError, PinCode};
use crate::inventory::CashInventory;
use crate::machine::{CashMachine, WithdrawalError};
use crate::money::Money;
use csv_parser::CsvRequestParser;
use csv_printer::{Receipt, print_receipts};

pub mod csv_parser;
pub mod csv_printer;
pub mod demo_bank;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),
}

pub struct Service<'w, B, R, W: 'w> {
    pub bank: B,
    pub inventory: CashInventory,
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, RequestError)>,
}

impl<'w, B, R, W> Service<'w, B, R, W>
where
    B: Bank,
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvRequestParser::new(self.input);
        let mut machine = CashMachine::new(self.bank, self.inventory);
        let mut receipts = Vec::new();

        for (line, request) in parser {
            let pin: PinCode = match request.pin.parse() {
                Ok(pin) => pin,
                Err(err) => {
                    (self.error_printer)(line, RequestError::Credentials(err));
                    continue;
                }
            };
            let card = Card::new(request.card.as_str());
            let amount = Money::new(request.amount, request.currency);
            match machine.withdraw(&pin, &card, amount) {
                Ok(withdrawal) => {
                    receipts.push(Receipt::new(&request.card, amount, &withdrawal));
                }
                Err(err) => {
                    // cash that already left the tray still gets a receipt
                    if let WithdrawalError::ChargeFailed { dispensed, .. } = &err {
                        receipts.push(Receipt::new(&request.card, amount, dispensed));
                    }
                    (self.error_printer)(line, err.into());
                }
            }
        }

        print_receipts(self.output, receipts.into_iter())
    }
}
