use crate::bank::{AuthorizationError, AuthorizationToken, Bank, ChargeError};
use crate::money::Money;

/// Stand-in bank for the demo binary: approves every credential pair
/// and never bounces a charge. Tokens are derived from the card number.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoBank;

impl Bank for DemoBank {
    fn authorize(
        &self,
        _pin: &str,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        Ok(AuthorizationToken::new(format!("demo-{card_number}")))
    }

    fn charge(&self, _token: AuthorizationToken, amount: Money) -> Result<(), ChargeError> {
        tracing::info!(amount = %amount, "account charged");
        Ok(())
    }
}
