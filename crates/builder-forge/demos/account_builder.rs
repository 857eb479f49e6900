//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Account`
//! Source: fixtures/account.json
//! Generated by `builder-forge`

use crate::domain::Account;
/// Fluent builder for `Account`.
///
/// `build` writes every field, using its zero-equivalent when it was never set.
///
/// Fields behind a setter are injected leniently: a rejected value is logged and skipped, which can leave
/// the result partially populated.
pub struct AccountBuilder {
    result: Option<Account>,
    owner: Option<String>,
    active: bool,
    balance: i64,
    currency: Option<String>,
}
impl AccountBuilder {
    /// Creates a builder holding zero-equivalents for every field.
    #[must_use]
    pub fn create() -> Self {
        Self {
            result: None,
            owner: None,
            active: false,
            balance: 0i64,
            currency: None,
        }
    }
    /// Sets `Account::owner`.
    pub fn with_owner(mut self, owner: impl Into<Option<String>>) -> Self {
        self.owner = owner.into();
        self
    }
    /// Sets `Account::active`, `Ledger::balance`, selected by the argument type.
    pub fn with<A: AccountBuilderWithArg>(mut self, arg: A) -> Self {
        arg.apply(&mut self);
        self
    }
    /// Sets `Ledger::currency`.
    pub fn with_currency(mut self, currency: impl Into<Option<String>>) -> Self {
        self.currency = currency.into();
        self
    }
    /// Sets every field to its zero-equivalent: `0`, `false` or `'\0'` for scalars, `None` for everything else.
    #[must_use]
    pub fn clear(self) -> Self {
        self.with_owner(None::<String>)
            .with(false)
            .with(0i64)
            .with_currency(None::<String>)
    }
    /// Continues building from an existing instance.
    ///
    /// Stored values are cleared and only fields set after this call are written by `build`.
    /// Passing `None` leaves the builder unchanged.
    #[must_use]
    pub fn starting_from(mut self, instance: impl Into<Option<Account>>) -> Self {
        if let Some(instance) = instance.into() {
            self = self.clear();
            self.result = Some(instance);
        }
        self
    }
    /// Writes the stored fields into the result and returns it.
    ///
    /// Without a seeded instance the result is created by `Account::try_new`; its failure is returned as an error.
    ///
    /// A field whose setter rejects the value is reported on stderr and skipped; the
    /// remaining fields are still written.
    pub fn build(self) -> Result<Account, AccountBuilderError> {
        let mut result = match self.result {
            Some(instance) => instance,
            None => {
                Account::try_new()
                    .map_err(|error| AccountBuilderError::Construction(
                        error.to_string(),
                    ))?
            }
        };
        result.owner = self.owner;
        result.active = self.active;
        if let Err(error) = result.ledger.set_balance(self.balance) {
            eprintln!("AccountBuilder: failed to inject `Ledger::balance`: {error}");
        }
        if let Err(error) = result.ledger.set_currency(self.currency) {
            eprintln!("AccountBuilder: failed to inject `Ledger::currency`: {error}");
        }
        Ok(result)
    }
}
impl Default for AccountBuilder {
    fn default() -> Self {
        Self::create()
    }
}
/// Argument types accepted by `AccountBuilder::with`.
pub trait AccountBuilderWithArg {
    /// Stores the argument in the builder slot it belongs to.
    fn apply(self, builder: &mut AccountBuilder);
}
impl AccountBuilderWithArg for bool {
    fn apply(self, builder: &mut AccountBuilder) {
        builder.active = self;
    }
}
impl AccountBuilderWithArg for i64 {
    fn apply(self, builder: &mut AccountBuilder) {
        builder.balance = self;
    }
}
/// Error returned by `AccountBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountBuilderError {
    /// The constructor of the target returned an error.
    Construction(String),
}
impl std::fmt::Display for AccountBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction(reason) => {
                write!(f, "failed to construct `Account`: {reason}")
            }
        }
    }
}
impl std::error::Error for AccountBuilderError {}
