//! Factor model: parameters under test and their encoded levels.
//!
//! - [`parse_factor_definitions`] reads `Name: level, level, ...` text
//! - [`FactorModel`] assigns every level a unique integer, one contiguous
//!   range per factor, and decodes rows back to names

mod model;
mod parser;

pub use model::{build_factor_infos, factor_total, FactorInfo, FactorModel};
pub use parser::{parse_factor_definitions, read_factor_definitions, FactorDefinition};
