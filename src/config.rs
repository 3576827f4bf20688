use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PINTS_INFO_PATH: &str = "data/pints_info.json";
const DEFAULT_RECORDS_PATH: &str = "data/records.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Aggregate document served to the dashboard.
    pub pints_info_path: PathBuf,
    /// Where submitted pint records are kept.
    pub records_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let pints_info_path = lookup("PINTS_INFO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PINTS_INFO_PATH));
        let records_path = lookup("RECORDS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH));

        Self {
            port,
            pints_info_path,
            records_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.pints_info_path, PathBuf::from("data/pints_info.json"));
        assert_eq!(config.records_path, PathBuf::from("data/records.json"));
    }

    #[test]
    fn reads_overrides_and_ignores_bad_port() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "not-a-port"),
            ("PINTS_INFO_PATH", "/tmp/info.json"),
            ("RECORDS_PATH", "/tmp/records.json"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.pints_info_path, PathBuf::from("/tmp/info.json"));
        assert_eq!(config.records_path, PathBuf::from("/tmp/records.json"));
    }
}
