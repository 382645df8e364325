use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("`{0}` is not a three-letter ISO 4217 currency code")]
pub struct InvalidCurrency(pub String);

/// ISO 4217 currency unit, stored as its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    pub const PLN: Currency = Currency(*b"PLN");
    pub const EUR: Currency = Currency(*b"EUR");
    pub const USD: Currency = Currency(*b"USD");

    pub fn from_code(code: &str) -> Result<Self, InvalidCurrency> {
        match code.as_bytes() {
            [a, b, c] if code.bytes().all(|byte| byte.is_ascii_uppercase()) => Ok(Self([*a, *b, *c])),
            _ => Err(InvalidCurrency(code.to_owned())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a as char, b as char, c as char)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct CurrencyVisitor;

impl<'de> Visitor<'de> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a 3-letter ISO 4217 currency code")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Currency::from_code(&v.to_uppercase())
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(CurrencyVisitor)
    }
}

/// An amount in a concrete currency. Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Banknotes the machine recognizes. Variants are declared in ascending
/// face-value order and the derived `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Banknote {
    Pln10,
    Pln20,
    Pln50,
    Pln100,
    Pln200,
}

impl Banknote {
    pub const fn face_value(self) -> u32 {
        match self {
            Banknote::Pln10 => 10,
            Banknote::Pln20 => 20,
            Banknote::Pln50 => 50,
            Banknote::Pln100 => 100,
            Banknote::Pln200 => 200,
        }
    }

    pub const fn currency(self) -> Currency {
        match self {
            Banknote::Pln10
            | Banknote::Pln20
            | Banknote::Pln50
            | Banknote::Pln100
            | Banknote::Pln200 => Currency::PLN,
        }
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.face_value(), self.currency())
    }
}

/// A bundle of identical banknotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanknotePack {
    count: u32,
    banknote: Banknote,
}

impl BanknotePack {
    pub fn new(count: u32, banknote: Banknote) -> Self {
        Self { count, banknote }
    }

    pub fn banknote(&self) -> Banknote {
        self.banknote
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn value(&self) -> Decimal {
        Decimal::from(u64::from(self.count) * u64::from(self.banknote.face_value()))
    }
}

impl fmt::Display for BanknotePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.count, self.banknote.face_value())
    }
}

/// The banknote packs handed to a customer, highest denomination first.
/// Packs never have a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Withdrawal {
    packs: Vec<BanknotePack>,
}

impl Withdrawal {
    pub fn new(packs: Vec<BanknotePack>) -> Self {
        Self { packs }
    }

    pub fn packs(&self) -> &[BanknotePack] {
        &self.packs
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn total_value(&self) -> Decimal {
        self.packs.iter().map(BanknotePack::value).sum()
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pack in &self.packs {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{pack}")?;
            first = false;
        }
        Ok(())
    }
}
