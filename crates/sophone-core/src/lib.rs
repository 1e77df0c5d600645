//! # sophone-core: Somali Mobile Number Toolkit
//!
//! Validates and normalizes Somali mobile numbers, formats them for local,
//! international, and E.164 display, and resolves the operator and
//! mobile-money wallet behind a number's prefix.
//!
//! ## Pipeline
//!
//! ```text
//! raw input ─▶ canonical_digits ─▶ to_nsn ─▶ classify ─▶ Nsn ─▶ formatters / resolvers
//!                                               │
//!                                               └─▶ PhoneError {code, message, details}
//! ```
//!
//! 1. **Canonicalization** ([`canonical`]) keeps digits and `+`, then strips
//!    `+`, `00252`/`252`, and the trunk `0`. Total over all inputs.
//! 2. **Validation** ([`mod@validate`]) is the single source of failure
//!    classification. Its result is a validated [`Nsn`] or a [`PhoneError`].
//! 3. **Registries** ([`operator`], [`wallet`]) are compile-time tables with
//!    exhaustive `match`es; they are never mutated.
//! 4. **Calling conventions** ([`phone`], [`outcome`], [`batch`]) expose each
//!    operation as `Result`-returning, `Option`-returning (`_safe`), and as
//!    the aggregate [`validate()`] outcome.
//!
//! ## Crate Policy
//!
//! - No I/O, no global mutable state, no `unsafe`.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every public entry point accepts any [`PhoneInput`], so non-text input
//!   (`None`, JSON numbers) is rejected as `INVALID_INPUT` instead of being
//!   unrepresentable.
//!
//! ```
//! use sophone_core::{validate, Operator, Wallet};
//!
//! let outcome = validate("+252 61 123 4567");
//! let info = outcome.value().unwrap();
//! assert_eq!(info.e164, "+252611234567");
//! assert_eq!(info.local, "0611 234 567");
//! assert_eq!(info.operator, Some(Operator::Hormuud));
//! assert_eq!(info.wallet, Some(Wallet::Evc));
//! ```

pub mod batch;
pub mod canonical;
pub mod error;
pub mod input;
pub mod nsn;
pub mod operator;
pub mod outcome;
pub mod phone;
pub mod validate;
pub mod wallet;

// Re-export primary types for ergonomic imports.
pub use batch::{normalize_batch, validate_batch, BatchNormalization, BatchValidation};
pub use canonical::{canonical_digits, to_nsn, COUNTRY_CODE};
pub use error::{ErrorCode, ErrorDetails, PhoneError};
pub use input::PhoneInput;
pub use nsn::Nsn;
pub use operator::{
    all_operators, is_mobile_prefix, mobile_prefixes, operator_by_prefix, Operator, OperatorEntry,
    OperatorInfo, UnknownOperator, MOBILE_PREFIXES,
};
pub use outcome::{validate, PhoneNumberInfo, ValidationOutcome};
pub use phone::{
    format_international, format_international_safe, format_local, format_local_safe,
    get_operator, get_operator_info, get_operator_info_safe, get_operator_safe, get_wallet,
    get_wallet_info, get_wallet_info_safe, get_wallet_safe, normalize_e164, normalize_e164_safe,
};
pub use validate::{classify, is_valid_mobile, validation_error, NSN_LENGTH};
pub use wallet::{
    all_wallets, supported_wallets, wallet_by_name, wallet_by_operator, UnknownWallet, Wallet,
    WalletEntry, WalletInfo,
};
