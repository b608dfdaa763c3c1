//! Parser for the factor-definition text format.
//!
//! One factor per line:
//!
//! ```text
//! Browser: Chrome, Firefox, Safari
//! OS:      Linux, macOS
//! ```
//!
//! Names and levels are trimmed, blank lines are skipped and empty level
//! tokens (`A: a1,,a2`) are dropped. Declaration order is kept so the same
//! file always yields the same encoding.

use crate::error::{Error, Result};
use std::path::Path;

/// One parsed factor: its name and level names in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorDefinition {
    pub name: String,
    pub levels: Vec<String>,
}

/// Parses factor definitions from text.
///
/// # Errors
/// - [`Error::MissingSeparator`] for a non-blank line without `:`
/// - [`Error::EmptyName`] for a line like `: a, b`
/// - [`Error::DuplicateFactor`] when a name is declared twice
///
/// Line numbers in errors are 1-based.
///
/// Empty level tokens are dropped rather than kept as `""` levels, so
/// `A: a1,,a2` has two levels and `B:` has none. This differs from a plain
/// split on every comma.
///
/// ```
/// use pairwise_ga::factor::parse_factor_definitions;
///
/// let defs = parse_factor_definitions("A: A1,A2\nB: B1, B2, B3\n").unwrap();
/// assert_eq!(defs[1].name, "B");
/// assert_eq!(defs[1].levels, ["B1", "B2", "B3"]);
/// ```
pub fn parse_factor_definitions(input: &str) -> Result<Vec<FactorDefinition>> {
    let mut definitions: Vec<FactorDefinition> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (name, levels) = line
            .split_once(':')
            .ok_or(Error::MissingSeparator { line: line_no })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName { line: line_no });
        }
        if definitions.iter().any(|d| d.name == name) {
            return Err(Error::DuplicateFactor {
                line: line_no,
                name: name.to_string(),
            });
        }

        let levels = levels
            .split(',')
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .map(str::to_string)
            .collect();

        definitions.push(FactorDefinition {
            name: name.to_string(),
            levels,
        });
    }

    Ok(definitions)
}

/// Reads and parses a definition file.
pub fn read_factor_definitions<P: AsRef<Path>>(path: P) -> Result<Vec<FactorDefinition>> {
    let text = std::fs::read_to_string(path)?;
    parse_factor_definitions(&text)
}
