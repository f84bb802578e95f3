/// Service configuration read from environment variables.
///
/// Implementors derive `serde::Deserialize`. Field names map to upper-case
/// variable names (`database_url` → `DATABASE_URL`).
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from an explicit set of `(NAME, value)` pairs.
    fn load<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Load from the process environment.
    ///
    /// # Panics
    ///
    /// Panics naming the offending variable when one is missing or malformed.
    fn from_env() -> Self {
        Self::load(std::env::vars()).unwrap_or_else(|e| panic!("invalid configuration: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        database_url: String,
        #[serde(default)]
        port: u16,
    }

    impl Config for Sample {}

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn should_map_upper_case_names_to_fields() {
        let config = Sample::load(vars(&[("DATABASE_URL", "postgres://db"), ("PORT", "81")])).unwrap();
        assert_eq!(config.database_url, "postgres://db");
        assert_eq!(config.port, 81);
    }

    #[test]
    fn should_report_missing_variable() {
        let err = Sample::load(vars(&[("PORT", "81")])).unwrap_err();
        assert!(err.to_string().contains("database_url"), "{err}");
    }
}
