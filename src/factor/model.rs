//! Integer encoding of factors and their levels.
//!
//! Every level of every factor maps to one integer of a shared alphabet.
//! Each factor owns a contiguous half-open sub-range `[min, max)` of that
//! alphabet, and the ranges are laid out back to back in declaration order.

use super::parser::FactorDefinition;
use crate::error::{Error, Result};
use rand::Rng;

/// Encoded range of one factor's levels.
///
/// # Examples
///
/// ```
/// use pairwise_ga::factor::FactorInfo;
///
/// let info = FactorInfo::new(4, 7);
/// assert_eq!(info.range(), 3);
/// assert!(info.contains(6));
/// assert!(!info.contains(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorInfo {
    /// First encoded value (inclusive).
    pub min: usize,
    /// One past the last encoded value.
    pub max: usize,
}

impl FactorInfo {
    /// Creates a factor range `[min, max)`.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Number of levels in this factor.
    pub fn range(&self) -> usize {
        self.max.saturating_sub(self.min)
    }

    /// Returns `true` if the factor has no levels.
    pub fn is_empty(&self) -> bool {
        self.range() == 0
    }

    /// Returns `true` if `value` encodes a level of this factor.
    pub fn contains(&self, value: usize) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Draws a level of this factor uniformly at random.
    ///
    /// # Panics
    /// Panics if the factor is empty. [`FactorModel::validate`] rejects
    /// such models before any value is generated.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(self.min..self.max)
    }
}

/// Sum of the ranges of all factors: the alphabet size of the pair matrix.
pub fn factor_total(infos: &[FactorInfo]) -> usize {
    infos.iter().map(FactorInfo::range).sum()
}

/// Builds `params` factors of `levels` levels each, laid out from 0.
///
/// ```
/// use pairwise_ga::factor::{build_factor_infos, FactorInfo};
///
/// let infos = build_factor_infos(3, 2);
/// assert_eq!(infos[2], FactorInfo::new(4, 6));
/// ```
pub fn build_factor_infos(params: usize, levels: usize) -> Vec<FactorInfo> {
    (0..params)
        .map(|i| FactorInfo::new(i * levels, (i + 1) * levels))
        .collect()
}

/// The factor set of one run: encoded ranges plus optional names.
///
/// Models built from parsed definitions keep factor and level names so that
/// encoded rows can be decoded; models built from bare ranges are anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorModel {
    infos: Vec<FactorInfo>,
    names: Option<Vec<FactorDefinition>>,
}

impl FactorModel {
    /// Wraps pre-computed ranges.
    pub fn from_infos(infos: Vec<FactorInfo>) -> Self {
        Self { infos, names: None }
    }

    /// Assigns each definition a contiguous range sized to its level count,
    /// in the order given.
    pub fn from_definitions(definitions: &[FactorDefinition]) -> Self {
        let mut next = 0;
        let infos = definitions
            .iter()
            .map(|def| {
                let info = FactorInfo::new(next, next + def.levels.len());
                next = info.max;
                info
            })
            .collect();
        Self {
            infos,
            names: Some(definitions.to_vec()),
        }
    }

    /// Factor ranges in column order.
    pub fn infos(&self) -> &[FactorInfo] {
        &self.infos
    }

    /// Number of factors (row length).
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Returns `true` if the model has no factors.
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Alphabet size of the pair-count matrix.
    pub fn total(&self) -> usize {
        factor_total(&self.infos)
    }

    /// Draws one random row: a uniformly chosen level for every factor.
    pub fn generate_row<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        self.infos.iter().map(|info| info.generate(rng)).collect()
    }

    /// Rejects models no row can be generated for.
    pub fn validate(&self) -> Result<()> {
        if self.infos.is_empty() {
            return Err(Error::NoFactors);
        }
        if let Some((index, info)) = self.infos.iter().enumerate().find(|(_, i)| i.is_empty()) {
            return Err(Error::EmptyFactor {
                index,
                min: info.min,
                max: info.max,
            });
        }
        Ok(())
    }

    /// Translates an encoded row back into `(factor, level)` name pairs.
    ///
    /// Returns `None` for anonymous models, for rows of the wrong length,
    /// and for values outside their column's range.
    pub fn decode<'a>(&'a self, row: &[usize]) -> Option<Vec<(&'a str, &'a str)>> {
        let names = self.names.as_ref()?;
        if row.len() != self.infos.len() {
            return None;
        }
        row.iter()
            .zip(&self.infos)
            .zip(names)
            .map(|((&value, info), def)| {
                if !info.contains(value) {
                    return None;
                }
                let level = def.levels.get(value - info.min)?;
                Some((def.name.as_str(), level.as_str()))
            })
            .collect()
    }
}
