use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the table receiving ingested records.
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - target table (default: "moviedrop")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "moviedrop".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_from_env() {
        // Default applies when the variable is unset; explicit values win.
        env::remove_var("TABLE_NAME");
        assert_eq!(Config::from_env().table_name, "moviedrop");

        env::set_var("TABLE_NAME", "movies-prod");
        assert_eq!(Config::from_env().table_name, "movies-prod");
        env::remove_var("TABLE_NAME");
    }
}
