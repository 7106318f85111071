use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use medisched_core::RuleSet;
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "medisched.log";

/// Runtime settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    /// `MEDISCHED_LOG`: tracing filter directive.
    pub log_filter: String,
    /// `MEDISCHED_LOG_FILE`: where log lines go while the terminal is in raw mode.
    pub log_file: PathBuf,
    /// `MEDISCHED_RULES`: optional rules installed on top of the required fields.
    pub rule_names: Vec<String>,
}

impl AppConfig {
    pub(crate) fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            log_filter: non_empty("MEDISCHED_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            log_file: non_empty("MEDISCHED_LOG_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
            rule_names: non_empty("MEDISCHED_RULES")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Baseline rules plus every configured optional rule that is known.
    pub(crate) fn rule_set(&self) -> RuleSet {
        let mut rules = RuleSet::baseline();
        for name in &self.rule_names {
            match medisched_rules::by_name(name) {
                Some(rule) => rules = rules.with_rule(rule),
                None => warn!(rule = %name, "ignoring unknown validation rule"),
            }
        }
        info!(rules = ?rules.names(), "validation rules installed");
        rules
    }

    pub(crate) fn shared_rule_set(&self) -> Arc<RuleSet> {
        Arc::new(self.rule_set())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]);
        assert_eq!(config.log_filter, "info", "filter");
        assert_eq!(config.log_file, PathBuf::from("medisched.log"), "log file");
        assert!(config.rule_names.is_empty(), "no optional rules");
        assert_eq!(config.rule_set().names(), vec!["required-fields"], "baseline only");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("MEDISCHED_LOG", "  "), ("MEDISCHED_RULES", "")]);
        assert_eq!(config.log_filter, "info", "filter");
        assert!(config.rule_names.is_empty(), "rules");
    }

    #[test]
    fn rules_are_split_trimmed_and_filtered() {
        let config = config(&[
            ("MEDISCHED_LOG", "medisched_core=debug"),
            ("MEDISCHED_LOG_FILE", "/tmp/book.log"),
            ("MEDISCHED_RULES", " doctor-conflict, ,nonsense,date-format "),
        ]);
        assert_eq!(config.log_filter, "medisched_core=debug", "filter");
        assert_eq!(config.log_file, PathBuf::from("/tmp/book.log"), "log file");
        assert_eq!(
            config.rule_names,
            vec!["doctor-conflict", "nonsense", "date-format"],
            "names as configured"
        );
        assert_eq!(
            config.rule_set().names(),
            vec!["required-fields", "doctor-conflict", "date-format"],
            "unknown names are skipped"
        );
    }
}
