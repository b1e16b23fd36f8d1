//! Plotting scale inference from MESA column naming conventions.

use serde::Serialize;

/// Axis scale the explorer should use for a column by default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

impl Scale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefixes marking a column as already holding a logarithm.
const LOG_PREFIXES: &[&str] = &["log", "lg"];

/// Infixes marking a logarithmic quantity inside a compound name
/// (`center_log_rho`, `h1_lg_something`).
const LOG_INFIXES: &[&str] = &["_log", "_lg"];

/// Classify a column identifier as logarithmic or linear.
///
/// Matching is case-insensitive. The function is total: any string,
/// including the empty one, maps to exactly one [`Scale`].
///
/// ```
/// use mesa_explorer_columns::{Scale, classify};
///
/// assert_eq!(classify("log_Teff"), Scale::Log);
/// assert_eq!(classify("lgRho"), Scale::Log);
/// assert_eq!(classify("mass"), Scale::Linear);
/// ```
pub fn classify(identifier: &str) -> Scale {
    let lowered = identifier.to_lowercase();
    let is_log = LOG_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
        || LOG_INFIXES.iter().any(|infix| lowered.contains(infix));
    if is_log { Scale::Log } else { Scale::Linear }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_matches_are_log() {
        assert_eq!(classify("log_Teff"), Scale::Log);
        assert_eq!(classify("logR"), Scale::Log);
        assert_eq!(classify("lgRho"), Scale::Log);
        assert_eq!(classify("lg"), Scale::Log);
    }

    #[test]
    fn infix_matches_are_log() {
        assert_eq!(classify("x_log"), Scale::Log);
        assert_eq!(classify("center_log_rho"), Scale::Log);
        assert_eq!(classify("h1_lg_something"), Scale::Log);
    }

    #[test]
    fn everything_else_is_linear() {
        assert_eq!(classify("mass"), Scale::Linear);
        assert_eq!(classify("zone"), Scale::Linear);
        assert_eq!(classify(""), Scale::Linear);
        // "log" only counts at the start or after an underscore
        assert_eq!(classify("xlog"), Scale::Linear);
        assert_eq!(classify("blog"), Scale::Linear);
        assert_eq!(classify("l_g"), Scale::Linear);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("LOG_X"), classify("log_x"));
        assert_eq!(classify("LgP"), Scale::Log);
        assert_eq!(classify("Center_LOG_T"), Scale::Log);
        assert_eq!(classify("MASS"), Scale::Linear);
    }

    #[test]
    fn display_matches_csv_spelling() {
        assert_eq!(Scale::Log.to_string(), "log");
        assert_eq!(Scale::Linear.to_string(), "linear");
        assert_eq!(Scale::default(), Scale::Linear);
    }
}
