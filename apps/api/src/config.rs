use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of a remote entity-recognizer sidecar. When absent the
    /// built-in rule recognizer is used instead.
    pub recognizer_url: Option<String>,
    /// Path to a JSON array of skill vocabulary phrases. When absent the
    /// built-in default vocabulary is used.
    pub skills_file: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            recognizer_url: optional_env("RECOGNIZER_URL"),
            skills_file: optional_env("SKILLS_FILE"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Loads the skill vocabulary: a JSON string array from `skills_file` when
/// configured, otherwise the built-in default list.
pub fn load_vocabulary(config: &Config) -> Result<Vec<String>> {
    match &config.skills_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read skills file '{path}'"))?;
            let vocab: Vec<String> = serde_json::from_str(&raw)
                .with_context(|| format!("Skills file '{path}' is not a JSON string array"))?;
            Ok(vocab)
        }
        None => Ok(default_vocabulary()),
    }
}

pub fn default_vocabulary() -> Vec<String> {
    ["Python", "JavaScript", "React", "Node.js", "SQL", "Docker", "AWS"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_nonempty() {
        let vocab = default_vocabulary();
        assert!(vocab.contains(&"Python".to_string()));
        assert!(vocab.contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_load_vocabulary_falls_back_to_default() {
        let config = Config {
            recognizer_url: None,
            skills_file: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(load_vocabulary(&config).unwrap(), default_vocabulary());
    }
}
