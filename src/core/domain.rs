use std::env;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub type BookId = u64;
pub type ReaderId = u64;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> u64;
    fn version(&self) -> i64;
}

pub const DEFAULT_RENTAL_LIMIT: usize = 4;

// Configuration abstracts config options for a catalog instance
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub rental_limit: usize,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            rental_limit: DEFAULT_RENTAL_LIMIT,
            json_logs: false,
        }
    }

    pub fn with_rental_limit(mut self, rental_limit: usize) -> Self {
        self.rental_limit = rental_limit;
        self
    }

    /// Reads `LIBRARY_BRANCH_ID`, `LIBRARY_RENTAL_LIMIT` and `LIBRARY_JSON_LOGS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> LibraryResult<Self> {
        let branch_id = lookup("LIBRARY_BRANCH_ID").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch_id.as_str());
        if let Some(limit) = lookup("LIBRARY_RENTAL_LIMIT") {
            config.rental_limit = parse_rental_limit(limit.as_str())?;
        }
        if let Some(json) = lookup("LIBRARY_JSON_LOGS") {
            config.json_logs = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.rental_limit == 0 {
            return Err(LibraryError::invalid_argument(
                "rental limit must be a positive number", Some("rental_limit".to_string())));
        }
        Ok(())
    }
}

fn parse_rental_limit(value: &str) -> LibraryResult<usize> {
    value.trim().parse::<usize>().map_err(|err| LibraryError::invalid_argument(
        format!("invalid rental limit {:?}: {}", value, err).as_str(), Some("rental_limit".to_string())))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env;
    use crate::core::domain::{Configuration, parse_rental_limit};
    use crate::core::library::LibraryError;

    fn load(vars: &[(&str, &str)]) -> Result<Configuration, LibraryError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Configuration::from_lookup(|key| vars.get(key).cloned())
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(4, config.rental_limit);
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_zero_rental_limit() {
        let config = Configuration::new("test").with_rental_limit(0);
        assert!(matches!(config.validate(), Err(LibraryError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_rental_limit() {
        assert_eq!(2, parse_rental_limit(" 2 ").expect("should parse"));
        assert!(parse_rental_limit("-1").is_err());
        assert!(parse_rental_limit("two").is_err());
    }

    #[tokio::test]
    async fn test_should_load_defaults_for_unset_vars() {
        let config = load(&[]).expect("should load config");
        assert_eq!(Configuration::new("dev"), config);
    }

    #[tokio::test]
    async fn test_should_load_config_vars() {
        let config = load(&[
            ("LIBRARY_BRANCH_ID", "north"),
            ("LIBRARY_RENTAL_LIMIT", "2"),
            ("LIBRARY_JSON_LOGS", " TRUE "),
        ]).expect("should load config");
        assert_eq!("north", config.branch_id.as_str());
        assert_eq!(2, config.rental_limit);
        assert!(config.json_logs);

        for flag in ["1", "yes", "Yes"] {
            assert!(load(&[("LIBRARY_JSON_LOGS", flag)]).expect("should load config").json_logs);
        }
        for flag in ["0", "false", "no", ""] {
            assert!(!load(&[("LIBRARY_JSON_LOGS", flag)]).expect("should load config").json_logs);
        }
    }

    #[tokio::test]
    async fn test_should_reject_bad_rental_limit_var() {
        assert!(matches!(load(&[("LIBRARY_RENTAL_LIMIT", "many")]), Err(LibraryError::InvalidArgument { .. })));
        assert!(matches!(load(&[("LIBRARY_RENTAL_LIMIT", "0")]), Err(LibraryError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_should_read_process_env() {
        env::set_var("LIBRARY_BRANCH_ID", "env-branch");
        env::set_var("LIBRARY_RENTAL_LIMIT", "3");
        env::set_var("LIBRARY_JSON_LOGS", "true");
        let res = Configuration::from_env();
        env::remove_var("LIBRARY_BRANCH_ID");
        env::remove_var("LIBRARY_RENTAL_LIMIT");
        env::remove_var("LIBRARY_JSON_LOGS");

        let config = res.expect("should load config");
        assert_eq!("env-branch", config.branch_id.as_str());
        assert_eq!(3, config.rental_limit);
        assert!(config.json_logs);
    }
}
