//! Version banner parsing and comparison.
//!
//! `nikto -Version` prints a few header lines followed by a table of
//! components and their versions, columns separated by runs of whitespace:
//!
//! ```text
//! Nikto main                     2.1.6
//! LibWhisker                     2.5
//! ```

use crate::error::{NiktoGateError, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static COLUMN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("column separator regex is valid"));

/// Place-value weights for (major, minor, patch). Each weight exceeds the
/// largest contribution of every lower component, so ordering by weight is
/// lexicographic for all `u32` triples.
const WEIGHTS: [u128; 3] = [100_000_000_000_000_000_000, 10_000_000_000, 1];

/// A (major, minor, patch) version of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Weighted numeric encoding used for the minimum-version comparison
    pub fn weight(&self) -> u128 {
        [self.major, self.minor, self.patch]
            .iter()
            .zip(WEIGHTS)
            .map(|(component, weight)| u128::from(*component) * weight)
            .sum()
    }

    /// True when this version is at least `required`
    pub fn satisfies(&self, required: &VersionTriple) -> bool {
        self.weight() >= required.weight()
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = NiktoGateError;

    /// Accepts one to three dot-separated numbers; missing components are zero.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NiktoGateError::InvalidVersion(s.to_string());

        let parts = s
            .trim()
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match parts.as_slice() {
            [major] => Ok(Self::new(*major, 0, 0)),
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for VersionTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionTriple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse the version table out of banner lines.
///
/// The first `header_lines` lines are skipped. Remaining lines are split on runs
/// of two or more whitespace characters; lines with fewer than two fields or a
/// non-numeric version are ignored. Component names are lowercased.
pub fn parse_version_banner<'a, I>(lines: I, header_lines: usize) -> HashMap<String, VersionTriple>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut versions = HashMap::new();

    for line in lines.into_iter().skip(header_lines) {
        let fields: Vec<&str> = COLUMN_SEPARATOR.split(line.trim_end()).collect();
        if fields.len() < 2 {
            continue;
        }

        let name = fields[0].trim().to_lowercase();
        match fields[1].parse::<VersionTriple>() {
            Ok(version) => {
                debug!("Banner component '{}' at version {}", name, version);
                versions.insert(name, version);
            }
            Err(_) => debug!("Skipping banner line without a version: {:?}", line),
        }
    }

    versions
}

/// Look up `component` in a parsed banner and check it against `required`
pub fn verify_component_version(
    versions: &HashMap<String, VersionTriple>,
    component: &str,
    required: &VersionTriple,
) -> Result<VersionTriple> {
    let found = versions
        .get(&component.to_lowercase())
        .copied()
        .ok_or_else(|| NiktoGateError::MissingVersionComponent(component.to_string()))?;

    if !found.satisfies(required) {
        return Err(NiktoGateError::VersionTooLow {
            found: found.to_string(),
            required: required.to_string(),
        });
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const REQUIRED: VersionTriple = VersionTriple::new(2, 1, 4);

    fn banner(version_line: &str) -> Vec<String> {
        let mut lines = vec![String::new(); 5];
        lines.push(version_line.to_string());
        lines
    }

    fn check(major: u32, minor: u32, patch: u32) -> Result<VersionTriple> {
        let lines = banner(&format!("nikto main   {major}.{minor}.{patch}"));
        let versions = parse_version_banner(lines.iter().map(String::as_str), 5);
        verify_component_version(&versions, "nikto main", &REQUIRED)
    }

    #[test]
    fn test_identical_version_is_accepted() {
        assert_eq!(check(2, 1, 4).unwrap(), REQUIRED);
    }

    #[test]
    fn test_greater_version_is_accepted() {
        assert!(check(100, 1, 1).is_ok());
        assert!(check(2, 2, 0).is_ok());
        assert!(check(2, 1, 5).is_ok());
    }

    #[test]
    fn test_lower_versions_are_rejected() {
        for (major, minor, patch) in [(1, 1, 1), (1, 100, 100), (2, 0, 100), (2, 1, 3)] {
            let err = check(major, minor, patch).unwrap_err();
            match err {
                NiktoGateError::VersionTooLow { found, required } => {
                    assert_eq!(found, format!("{major}.{minor}.{patch}"));
                    assert_eq!(required, "2.1.4");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_missing_component() {
        let lines = banner("LibWhisker    2.5");
        let versions = parse_version_banner(lines.iter().map(String::as_str), 5);
        let err = verify_component_version(&versions, "nikto main", &REQUIRED).unwrap_err();
        assert!(matches!(err, NiktoGateError::MissingVersionComponent(ref c) if c == "nikto main"));
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let lines = ["nikto main   9.9.9", "", "", "", ""];
        let versions = parse_version_banner(lines, 5);
        assert!(versions.is_empty());
    }

    #[test]
    fn test_parse_realistic_banner() {
        let text = "\
- Nikto v2.1.6
---------------------------------------------------------------------------
+ Nikto Versions
---------------------------------------------------------------------------
File                           Version      Last Mod
-----------------------------  --------     ----------
Nikto main                     2.1.6
LibWhisker                     2.5
nikto_core.plugin              2.1.6
Single token line
---------------------------------------------------------------------------
";
        let versions = parse_version_banner(text.lines(), 5);
        assert_eq!(versions.get("nikto main"), Some(&VersionTriple::new(2, 1, 6)));
        assert_eq!(versions.get("libwhisker"), Some(&VersionTriple::new(2, 5, 0)));
        assert_eq!(versions.get("nikto_core.plugin"), Some(&VersionTriple::new(2, 1, 6)));
        assert_eq!(versions.len(), 3);
    }

    #[test]
    fn test_single_space_does_not_split_fields() {
        let lines = banner("nikto main 2.1.6");
        let versions = parse_version_banner(lines.iter().map(String::as_str), 5);
        assert!(versions.is_empty());
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("2.1.4".parse::<VersionTriple>().unwrap(), REQUIRED);
        assert_eq!("3".parse::<VersionTriple>().unwrap(), VersionTriple::new(3, 0, 0));
        assert!("2.1.4.1".parse::<VersionTriple>().is_err());
        assert!("2.x.4".parse::<VersionTriple>().is_err());
        assert!("".parse::<VersionTriple>().is_err());
        assert_eq!(REQUIRED.to_string(), "2.1.4");
    }

    proptest! {
        #[test]
        fn prop_weight_orders_lexicographically(
            a in (any::<u32>(), any::<u32>(), any::<u32>()),
            b in (any::<u32>(), any::<u32>(), any::<u32>()),
        ) {
            let a = VersionTriple::new(a.0, a.1, a.2);
            let b = VersionTriple::new(b.0, b.1, b.2);
            prop_assert_eq!(a.weight().cmp(&b.weight()), a.cmp(&b));
        }
    }
}
