use std::path::PathBuf;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cases file. Reads stdin when unset.
    pub input: Option<PathBuf>,
    /// Stop at the first evaluation error instead of reporting it inline.
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            fail_fast: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input: lookup("DOCMAP_EVAL_INPUT")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            fail_fast: lookup("DOCMAP_EVAL_FAIL_FAST")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fail_fast),
        }
    }
}
