use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub roster_path: Option<String>,
}

fn default_pretty() -> bool {
    true
}

fn default_difficulty() -> String {
    "beginner".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SENSEI_DEFAULT_DIFFICULTY") {
            self.quiz.default_difficulty = v;
        }
        if let Ok(v) = std::env::var("SENSEI_ROSTER") {
            self.matching.roster_path = Some(v);
        }
        if let Ok(v) = std::env::var("SENSEI_PRETTY") {
            self.output.pretty = v == "true" || v == "1";
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn clear_sensei_vars() {
        for key in ["SENSEI_DEFAULT_DIFFICULTY", "SENSEI_ROSTER", "SENSEI_PRETTY"] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_file_missing() {
        clear_sensei_vars();
        let config = Config::load(Path::new("/does/not/exist.toml")).unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.quiz.default_difficulty, "beginner");
        assert!(config.matching.roster_path.is_none());
    }

    #[test]
    #[serial]
    fn parse_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"
[output]
pretty = false

[quiz]
default_difficulty = "advanced"

[matching]
roster_path = "./mentors.json"
"#
        )
        .unwrap();

        clear_sensei_vars();
        let config = Config::load(&path).unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.quiz.default_difficulty, "advanced");
        assert_eq!(config.matching.roster_path.as_deref(), Some("./mentors.json"));
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let config: Config = toml::from_str(
            r#"
[quiz]
default_difficulty = "expert"
"#,
        )
        .unwrap();

        assert_eq!(config.quiz.default_difficulty, "expert");
        assert!(config.output.pretty);
        assert!(config.matching.roster_path.is_none());
    }

    #[test]
    #[serial]
    fn env_overrides() {
        let mut config = Config::default();
        assert_eq!(config.quiz.default_difficulty, "beginner");

        unsafe { std::env::set_var("SENSEI_DEFAULT_DIFFICULTY", "intermediate") };
        unsafe { std::env::set_var("SENSEI_ROSTER", "./team.json") };
        unsafe { std::env::set_var("SENSEI_PRETTY", "0") };
        config.apply_env_overrides();
        clear_sensei_vars();

        assert_eq!(config.quiz.default_difficulty, "intermediate");
        assert_eq!(config.matching.roster_path.as_deref(), Some("./team.json"));
        assert!(!config.output.pretty);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(back.quiz.default_difficulty, config.quiz.default_difficulty);
        assert_eq!(back.output.pretty, config.output.pretty);
    }
}
