//! Node-level curve sensitivities.
//!
//! A [`MulticurveSensitivity`] maps a curve name to a list of
//! `(node_time, value)` pairs; a [`MultipleCurrencyMulticurveSensitivity`]
//! keys those by currency. Combining concatenates the lists; [`cleaned`]
//! sorts each list by node time and sums entries that share a node time.
//! Equality is tolerance-based and always compares the cleaned forms, with
//! absent currencies, curves and nodes read as zero.
//!
//! [`cleaned`]: MulticurveSensitivity::cleaned

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use meridian_core::Currency;

/// Sensitivities to curve nodes, keyed by curve name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MulticurveSensitivity {
    sensitivities: BTreeMap<String, Vec<(f64, f64)>>,
}

impl MulticurveSensitivity {
    /// Creates an empty sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sensitivity to a single curve.
    #[must_use]
    pub fn of_curve(name: impl Into<String>, nodes: Vec<(f64, f64)>) -> Self {
        let mut sensitivities = BTreeMap::new();
        sensitivities.insert(name.into(), nodes);
        Self { sensitivities }
    }

    /// Returns the `(node_time, value)` pairs for a curve.
    #[must_use]
    pub fn curve(&self, name: &str) -> Option<&[(f64, f64)]> {
        self.sensitivities.get(name).map(Vec::as_slice)
    }

    /// Returns the curve names in ascending order.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sensitivities.keys().map(String::as_str)
    }

    /// Iterates over `(curve name, nodes)` in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(f64, f64)])> + '_ {
        self.sensitivities
            .iter()
            .map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Returns true if no curve is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Returns the combination of `self` and `other`.
    ///
    /// Node lists of a curve present on both sides are concatenated, `self`
    /// first.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        let mut sensitivities = self.sensitivities.clone();
        for (name, nodes) in &other.sensitivities {
            sensitivities
                .entry(name.clone())
                .or_default()
                .extend_from_slice(nodes);
        }
        Self { sensitivities }
    }

    /// Returns a copy with every value multiplied by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|(name, nodes)| {
                    let scaled = nodes.iter().map(|(t, v)| (*t, v * factor)).collect();
                    (name.clone(), scaled)
                })
                .collect(),
        }
    }

    /// Returns a copy with each node list sorted by time and equal times summed.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|(name, nodes)| (name.clone(), clean_nodes(nodes)))
                .collect(),
        }
    }

    /// Compares two sensitivities within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let left = self.cleaned();
        let right = other.cleaned();

        left.sensitivities
            .keys()
            .chain(right.sensitivities.keys())
            .all(|name| {
                nodes_approx_eq(
                    left.curve(name).unwrap_or_default(),
                    right.curve(name).unwrap_or_default(),
                    tolerance,
                )
            })
    }
}

fn clean_nodes(nodes: &[(f64, f64)]) -> Vec<(f64, f64)> {
    // `+ 0.0` folds -0.0 into 0.0 so both land on the same node.
    let mut sorted: Vec<(f64, f64)> = nodes.iter().map(|&(t, v)| (t + 0.0, v)).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cleaned: Vec<(f64, f64)> = Vec::with_capacity(sorted.len());
    for (time, value) in sorted {
        match cleaned.last_mut() {
            Some(last) if last.0.total_cmp(&time) == Ordering::Equal => last.1 += value,
            _ => cleaned.push((time, value)),
        }
    }
    cleaned
}

/// Merge-walks two cleaned node lists; a time on one side only compares to zero.
fn nodes_approx_eq(left: &[(f64, f64)], right: &[(f64, f64)], tolerance: f64) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < left.len() || j < right.len() {
        let (diff, advance_left, advance_right) = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => match l.0.total_cmp(&r.0) {
                Ordering::Equal => (l.1 - r.1, true, true),
                Ordering::Less => (l.1, true, false),
                Ordering::Greater => (r.1, false, true),
            },
            (Some(l), None) => (l.1, true, false),
            (None, Some(r)) => (r.1, false, true),
            (None, None) => break,
        };
        if diff.abs() > tolerance || diff.is_nan() {
            return false;
        }
        i += usize::from(advance_left);
        j += usize::from(advance_right);
    }
    true
}

impl Add for MulticurveSensitivity {
    type Output = MulticurveSensitivity;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Mul<f64> for MulticurveSensitivity {
    type Output = MulticurveSensitivity;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiplied_by(rhs)
    }
}

/// Curve sensitivities keyed by the currency of the valued flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleCurrencyMulticurveSensitivity {
    sensitivities: BTreeMap<Currency, MulticurveSensitivity>,
}

impl MultipleCurrencyMulticurveSensitivity {
    /// Creates an empty sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sensitivity with a single currency entry.
    #[must_use]
    pub fn of(currency: Currency, sensitivity: MulticurveSensitivity) -> Self {
        let mut sensitivities = BTreeMap::new();
        sensitivities.insert(currency, sensitivity);
        Self { sensitivities }
    }

    /// Returns the sensitivity for `currency`, if present.
    #[must_use]
    pub fn sensitivity(&self, currency: Currency) -> Option<&MulticurveSensitivity> {
        self.sensitivities.get(&currency)
    }

    /// Returns the currencies in ascending order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.sensitivities.keys().copied()
    }

    /// Iterates over `(currency, sensitivity)` in ascending currency order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, &MulticurveSensitivity)> + '_ {
        self.sensitivities.iter().map(|(ccy, sens)| (*ccy, sens))
    }

    /// Returns the number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if no currency is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Returns the combination of `self` and `other`.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        other
            .sensitivities
            .iter()
            .fold(self.clone(), |acc, (ccy, sens)| acc.plus_currency(*ccy, sens))
    }

    /// Returns a copy with `sensitivity` combined into the `currency` entry.
    #[must_use]
    pub fn plus_currency(&self, currency: Currency, sensitivity: &MulticurveSensitivity) -> Self {
        let mut sensitivities = self.sensitivities.clone();
        let combined = match sensitivities.get(&currency) {
            Some(existing) => existing.plus(sensitivity),
            None => sensitivity.clone(),
        };
        sensitivities.insert(currency, combined);
        Self { sensitivities }
    }

    /// Returns a copy with every value multiplied by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|(ccy, sens)| (*ccy, sens.multiplied_by(factor)))
                .collect(),
        }
    }

    /// Returns a copy with every curve's node list cleaned.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|(ccy, sens)| (*ccy, sens.cleaned()))
                .collect(),
        }
    }

    /// Compares two sensitivities within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let empty = MulticurveSensitivity::new();
        self.currencies().chain(other.currencies()).all(|ccy| {
            self.sensitivity(ccy)
                .unwrap_or(&empty)
                .approx_eq(other.sensitivity(ccy).unwrap_or(&empty), tolerance)
        })
    }
}

impl Add for MultipleCurrencyMulticurveSensitivity {
    type Output = MultipleCurrencyMulticurveSensitivity;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Mul<f64> for MultipleCurrencyMulticurveSensitivity {
    type Output = MultipleCurrencyMulticurveSensitivity;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiplied_by(rhs)
    }
}
