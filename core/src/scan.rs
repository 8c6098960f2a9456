#![deny(missing_docs)]

//! # Scan Selection
//!
//! Decides which types a scanner should look at, from the
//! `mp.openapi.scan.*` include and exclude lists.
//!
//! Entries are either literal names or anchored regular expressions. An entry
//! made only of identifier characters, `.`, `$` and `::` is literal; anything
//! else is compiled as a regex. Rust style `::` separators are treated as `.`.

use crate::error::{OasError, OasResult};
use regex::Regex;

/// One include or exclude entry.
#[derive(Debug, Clone)]
pub struct ScanPattern {
    source: String,
    regex: Option<Regex>,
}

impl ScanPattern {
    /// Parses an entry, compiling it when it is not a literal name.
    ///
    /// # Errors
    ///
    /// [`OasError::Config`] when the entry is neither literal nor a valid regex.
    pub fn parse(entry: &str) -> OasResult<Self> {
        let source = normalize_path(entry.trim());
        let literal = source
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$'));
        let regex = if literal {
            None
        } else {
            let compiled = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
                OasError::Config(format!("invalid scan pattern '{}': {}", entry, e))
            })?;
            Some(compiled)
        };
        Ok(Self { source, regex })
    }

    /// The entry as written, with `::` normalized.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn matches(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(candidate),
            None => self.source == candidate,
        }
    }

    /// Length of the longest prefix of `package` (itself or an ancestor) this
    /// entry matches.
    fn package_match(&self, package: &str) -> Option<usize> {
        ancestors(package)
            .filter(|candidate| self.matches(candidate))
            .map(str::len)
            .max()
    }
}

/// Include / exclude lists for scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// `mp.openapi.scan.disable`
    pub disable: bool,
    /// `mp.openapi.scan.packages`
    pub packages: Vec<ScanPattern>,
    /// `mp.openapi.scan.classes`
    pub classes: Vec<ScanPattern>,
    /// `mp.openapi.scan.exclude.packages`
    pub exclude_packages: Vec<ScanPattern>,
    /// `mp.openapi.scan.exclude.classes`
    pub exclude_classes: Vec<ScanPattern>,
}

impl ScanConfig {
    /// Whether the type at `type_path` (e.g. `com.acme.api.Pet` or
    /// `acme::api::Pet`) should be scanned.
    ///
    /// Precedence, strongest first: scanning disabled, explicit class
    /// exclusion, explicit class inclusion, then the more specific of the
    /// package include and package exclude matches (exclusion wins ties).
    /// Without any include list everything not excluded is scanned.
    pub fn should_scan(&self, type_path: &str) -> bool {
        if self.disable {
            return false;
        }
        let type_path = normalize_path(type_path);
        if self.exclude_classes.iter().any(|p| p.matches(&type_path)) {
            return false;
        }
        if self.classes.iter().any(|p| p.matches(&type_path)) {
            return true;
        }

        let package = type_path
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("");
        let included = best_match(&self.packages, package);
        let excluded = best_match(&self.exclude_packages, package);
        match (included, excluded) {
            (Some(include), Some(exclude)) => include > exclude,
            (None, Some(_)) => false,
            (Some(_), None) => true,
            (None, None) => self.packages.is_empty() && self.classes.is_empty(),
        }
    }
}

fn best_match(patterns: &[ScanPattern], package: &str) -> Option<usize> {
    patterns
        .iter()
        .filter_map(|pattern| pattern.package_match(package))
        .max()
}

fn ancestors(package: &str) -> impl Iterator<Item = &str> {
    package
        .match_indices('.')
        .map(move |(index, _)| &package[..index])
        .chain(std::iter::once(package))
        .filter(|candidate| !candidate.is_empty())
}

fn normalize_path(path: &str) -> String {
    path.replace("::", ".")
}

/// Parses a list of entries.
pub(crate) fn parse_patterns(entries: &[String]) -> OasResult<Vec<ScanPattern>> {
    entries.iter().map(|entry| ScanPattern::parse(entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(entries: &[&str]) -> Vec<ScanPattern> {
        entries.iter().map(|e| ScanPattern::parse(e).unwrap()).collect()
    }

    #[test]
    fn test_everything_scanned_by_default() {
        let config = ScanConfig::default();
        assert!(config.should_scan("com.acme.Pet"));
        assert!(config.should_scan("Pet"));
    }

    #[test]
    fn test_disable_wins() {
        let config = ScanConfig {
            disable: true,
            classes: patterns(&["com.acme.Pet"]),
            ..Default::default()
        };
        assert!(!config.should_scan("com.acme.Pet"));
    }

    #[test]
    fn test_package_includes_subpackages_only_on_boundaries() {
        let config = ScanConfig {
            packages: patterns(&["com.acme"]),
            ..Default::default()
        };
        assert!(config.should_scan("com.acme.Pet"));
        assert!(config.should_scan("com.acme.api.v1.Pet"));
        assert!(!config.should_scan("com.acmecorp.Pet"));
        assert!(!config.should_scan("org.other.Pet"));
    }

    #[test]
    fn test_class_include_beats_package_exclude() {
        let config = ScanConfig {
            exclude_packages: patterns(&["com.acme.internal"]),
            classes: patterns(&["com.acme.internal.Exposed"]),
            ..Default::default()
        };
        assert!(config.should_scan("com.acme.internal.Exposed"));
        assert!(!config.should_scan("com.acme.internal.Hidden"));
        assert!(!config.should_scan("com.other.Pet"));
    }

    #[test]
    fn test_class_exclude_beats_everything() {
        let config = ScanConfig {
            packages: patterns(&["com.acme"]),
            classes: patterns(&["com.acme.Secret"]),
            exclude_classes: patterns(&["com.acme.Secret"]),
            ..Default::default()
        };
        assert!(!config.should_scan("com.acme.Secret"));
        assert!(config.should_scan("com.acme.Pet"));
    }

    #[test]
    fn test_more_specific_package_wins() {
        let config = ScanConfig {
            packages: patterns(&["com.acme.api.public"]),
            exclude_packages: patterns(&["com.acme.api"]),
            ..Default::default()
        };
        assert!(config.should_scan("com.acme.api.public.Pet"));
        assert!(!config.should_scan("com.acme.api.Internal"));

        let reversed = ScanConfig {
            packages: patterns(&["com.acme"]),
            exclude_packages: patterns(&["com.acme.internal"]),
            ..Default::default()
        };
        assert!(reversed.should_scan("com.acme.Pet"));
        assert!(!reversed.should_scan("com.acme.internal.Pet"));
    }

    #[test]
    fn test_regex_entries_and_rust_paths() {
        let config = ScanConfig {
            classes: patterns(&[r"acme::api::.*Resource"]),
            exclude_packages: patterns(&["acme::api"]),
            ..Default::default()
        };
        assert!(config.should_scan("acme::api::PetResource"));
        assert!(!config.should_scan("acme::api::PetDto"));
        assert!(ScanPattern::parse("com.acme.(").is_err());
    }
}
