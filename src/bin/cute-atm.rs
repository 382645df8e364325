use std::fs::File;

use anyhow::{Context, Result};
use cute_atm::bin_utils::{Service, demo_bank::DemoBank};
use cute_atm::inventory::CashInventory;
use cute_atm::money::{Banknote, Currency};

fn standard_inventory() -> Result<CashInventory> {
    let mut inventory = CashInventory::empty(Currency::PLN);
    for banknote in [
        Banknote::Pln10,
        Banknote::Pln20,
        Banknote::Pln50,
        Banknote::Pln100,
        Banknote::Pln200,
    ] {
        inventory.add_notes(banknote, 10)?;
    }
    Ok(inventory)
}

fn main() -> Result<()> {
    let format = tracing_subscriber::fmt::format().with_target(false).compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        bank: DemoBank,
        inventory: standard_inventory()?,
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| eprintln!("Request at line {line} failed: {err}")),
    };
    service.run()
}
