use std::str::FromStr;

use thiserror::Error;

use crate::money::Money;

pub const PIN_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("a PIN consists of exactly four digits")]
    PinLength,
    #[error("PIN digits must be in the 0-9 range")]
    PinDigit,
}

/// Cash card, identified by an opaque number. The machine never looks
/// inside the number, it only forwards it to the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    number: String,
}

impl Card {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Fixed-length PIN, kept digit by digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinCode {
    digits: [u8; PIN_LENGTH],
}

impl PinCode {
    pub fn new(digits: [u8; PIN_LENGTH]) -> Result<Self, CredentialError> {
        if digits.iter().any(|digit| *digit > 9) {
            return Err(CredentialError::PinDigit);
        }
        Ok(Self { digits })
    }

    /// The PIN as the digit string the bank expects.
    pub fn digits(&self) -> String {
        self.digits
            .iter()
            .map(|digit| char::from(b'0' + digit))
            .collect()
    }
}

impl FromStr for PinCode {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PIN_LENGTH {
            return Err(CredentialError::PinLength);
        }
        let mut digits = [0u8; PIN_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            *slot = ch.to_digit(10).ok_or(CredentialError::PinDigit)? as u8;
        }
        Ok(Self { digits })
    }
}

/// Opaque proof issued by the bank that a credential pair was accepted.
/// Moved into [`Bank::charge`], so a token cannot outlive its
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the bank rejected the credential pair")]
pub struct AuthorizationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the bank could not apply the charge to the account")]
pub struct ChargeError;

/// Capability interface of the external bank. The machine only ever
/// exchanges credentials for a token and charges the authorized account;
/// everything else about the bank stays on the other side of this trait.
pub trait Bank {
    fn authorize(
        &self,
        pin: &str,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError>;

    fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), ChargeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_from_digits() {
        let pin = PinCode::new([1, 2, 3, 4]).unwrap();
        assert_eq!(pin.digits(), "1234");

        let err = PinCode::new([1, 2, 3, 14]).unwrap_err();
        assert!(matches!(err, CredentialError::PinDigit));
    }

    #[test]
    fn pin_from_text() {
        let pin: PinCode = "0907".parse().unwrap();
        assert_eq!(pin.digits(), "0907");

        assert!(matches!(
            "90210".parse::<PinCode>(),
            Err(CredentialError::PinLength)
        ));
        assert!(matches!(
            "12a4".parse::<PinCode>(),
            Err(CredentialError::PinDigit)
        ));
    }

    #[test]
    fn card_keeps_its_number_opaque() {
        let card = Card::new("4532-7712");
        assert_eq!(card.number(), "4532-7712");
    }
}
