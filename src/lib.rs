/// Value objects for cash handling: currency codes, money amounts,
/// banknotes, banknote packs and the withdrawal receipt.
pub mod money;

/// The machine's cash holding, tracked per banknote denomination.
pub mod inventory;

/// Capability interface of the external bank, plus the credential and
/// token value objects exchanged with it.
pub mod bank;

/// Banknote allocation strategies. The trait isolates the solver from
/// the transaction flow, so the greedy default can be replaced with an
/// exact-change solver without touching [`machine`].
pub mod allocator;

/// The withdrawal transaction flow: validate, authorize, allocate,
/// debit, charge.
pub mod machine;

/// CSV request/receipt plumbing shared between the binary and the
/// integration test.
///
/// NOTE: Technically this belongs in the binary, but keeping it in the
/// library lets the integration test drive the exact code path the
/// binary runs.
pub mod bin_utils;
