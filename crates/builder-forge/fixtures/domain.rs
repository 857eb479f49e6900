//! Target types described by `hierarchy.json` and `account.json`.

#![allow(dead_code)]

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gadget {
  pub label: String,
}

#[derive(Debug, Default)]
pub struct GadgetBuilder {
  label: String,
}

impl GadgetBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn label(mut self, label: &str) -> Self {
    self.label = label.to_string();
    self
  }

  pub fn build(self) -> Gadget {
    Gadget { label: self.label }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Base {
  pub there: Option<i32>,
  pub here: Option<String>,
  pub ratio: f64,
  pub gadget: Option<Gadget>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sub {
  pub base: Base,
  pub here: Option<String>,
  pub there: Option<String>,
  pub list: Option<Vec<String>>,
  pub some_char: char,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripleSub {
  pub sub: Sub,
  pub depth: u8,
  pub here: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
  balance: i64,
  currency: Option<String>,
}

impl Ledger {
  pub fn balance(&self) -> i64 {
    self.balance
  }

  pub fn currency(&self) -> Option<&str> {
    self.currency.as_deref()
  }

  pub fn set_balance(&mut self, balance: i64) -> Result<(), String> {
    if balance < 0 {
      return Err(format!("balance must not be negative, got {balance}"));
    }
    self.balance = balance;
    Ok(())
  }

  pub fn set_currency(&mut self, currency: Option<String>) -> Result<(), String> {
    if let Some(code) = &currency
      && code.len() != 3
    {
      return Err(format!("`{code}` is not a three-letter currency code"));
    }
    self.currency = currency;
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
  pub ledger: Ledger,
  pub owner: Option<String>,
  pub active: bool,
}

impl Account {
  pub fn try_new() -> Result<Self, String> {
    Ok(Self {
      ledger: Ledger::default(),
      owner: None,
      active: true,
    })
  }

  pub fn closed() -> Result<Self, String> {
    Err("account registry is closed".to_string())
  }
}
