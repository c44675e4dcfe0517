//! Amounts held in several currencies at once.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg};

use serde::{Deserialize, Serialize};

use super::Currency;

/// A set of amounts, at most one per currency.
///
/// Present values of multi-currency instruments are reported in this form so
/// that no FX conversion is implied. Combining two values adds the entries
/// currency by currency; a currency missing on one side counts as zero.
///
/// Entries are kept in a `BTreeMap`, so iteration order (and therefore any
/// accumulation built on top of it) is deterministic.
///
/// All combinators return a new value; an existing amount is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleCurrencyAmount {
    amounts: BTreeMap<Currency, f64>,
}

impl MultipleCurrencyAmount {
    /// Creates an empty amount (the additive identity).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an amount with a single currency entry.
    #[must_use]
    pub fn of(currency: Currency, amount: f64) -> Self {
        let mut amounts = BTreeMap::new();
        amounts.insert(currency, amount);
        Self { amounts }
    }

    /// Returns the amount held in `currency`, if any.
    #[must_use]
    pub fn amount(&self, currency: Currency) -> Option<f64> {
        self.amounts.get(&currency).copied()
    }

    /// Returns the amount held in `currency`, treating absence as zero.
    #[must_use]
    pub fn amount_or_zero(&self, currency: Currency) -> f64 {
        self.amount(currency).unwrap_or(0.0)
    }

    /// Currencies with an entry, in ascending order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.amounts.keys().copied()
    }

    /// Iterates over `(currency, amount)` pairs in ascending currency order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.amounts.iter().map(|(ccy, amount)| (*ccy, *amount))
    }

    /// Number of currency entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Returns the sum of `self` and `other`.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        let mut amounts = self.amounts.clone();
        for (ccy, amount) in &other.amounts {
            *amounts.entry(*ccy).or_insert(0.0) += amount;
        }
        Self { amounts }
    }

    /// Returns a copy with `amount` added to the `currency` entry.
    #[must_use]
    pub fn plus_amount(&self, currency: Currency, amount: f64) -> Self {
        let mut amounts = self.amounts.clone();
        *amounts.entry(currency).or_insert(0.0) += amount;
        Self { amounts }
    }

    /// Returns a copy with every entry multiplied by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            amounts: self
                .amounts
                .iter()
                .map(|(ccy, amount)| (*ccy, amount * factor))
                .collect(),
        }
    }

    /// Compares two amounts entry by entry within an absolute tolerance.
    ///
    /// Currencies present on only one side are compared against zero.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.currencies()
            .chain(other.currencies())
            .all(|ccy| (self.amount_or_zero(ccy) - other.amount_or_zero(ccy)).abs() <= tolerance)
    }
}

impl Add for MultipleCurrencyAmount {
    type Output = MultipleCurrencyAmount;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Add<&MultipleCurrencyAmount> for &MultipleCurrencyAmount {
    type Output = MultipleCurrencyAmount;

    fn add(self, rhs: &MultipleCurrencyAmount) -> Self::Output {
        self.plus(rhs)
    }
}

impl Mul<f64> for MultipleCurrencyAmount {
    type Output = MultipleCurrencyAmount;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiplied_by(rhs)
    }
}

impl Neg for MultipleCurrencyAmount {
    type Output = MultipleCurrencyAmount;

    fn neg(self) -> Self::Output {
        self.multiplied_by(-1.0)
    }
}

impl FromIterator<(Currency, f64)> for MultipleCurrencyAmount {
    fn from_iter<I: IntoIterator<Item = (Currency, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (ccy, amount)| acc.plus_amount(ccy, amount))
    }
}

impl fmt::Display for MultipleCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (ccy, amount)) in self.amounts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ccy} {amount}")?;
        }
        write!(f, "]")
    }
}
