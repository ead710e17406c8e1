use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sensei_match::{MentorRecord, batch_match};
use sensei_quiz::{
    AnswerKey, QuestionCategory, QuizResult, generate_quiz, generate_quiz_with, grade,
};
use serde::Serialize;

use crate::config::Config;

mod config;
mod init;

fn main() -> anyhow::Result<()> {
    init_subscriber();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version") {
        println!("sensei v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_path = resolve_config_path(&args);
    let config = Config::load(&config_path)?;

    match args.first().map(String::as_str) {
        Some("quiz") => run_quiz(&args[1..], &config),
        Some("grade") => run_grade(&args[1..], &config),
        Some("match") => run_match(&args[1..], &config),
        Some("categories") => {
            run_categories();
            Ok(())
        }
        Some("init") => init::run(flag_value(&args, "--output").map(PathBuf::from)),
        Some(other) => bail!("unknown command: {other}"),
        None => {
            print_usage();
            Ok(())
        }
    }
}

fn run_quiz(args: &[String], config: &Config) -> anyhow::Result<()> {
    let Some(skill) = args.first().filter(|a| !a.starts_with('-')) else {
        bail!("usage: sensei quiz <skill> [--difficulty <level>] [--seed <n>]");
    };

    let difficulty = flag_value(args, "--difficulty")
        .unwrap_or_else(|| config.quiz.default_difficulty.clone());

    let quiz = match flag_value(args, "--seed") {
        Some(raw) => {
            let seed: u64 = raw.parse().context("--seed expects an unsigned integer")?;
            let mut rng = StdRng::seed_from_u64(seed);
            generate_quiz_with(skill, &difficulty, &mut rng)?
        }
        None => generate_quiz(skill, &difficulty)?,
    };

    print_json(&quiz, config.output.pretty)
}

fn run_grade(args: &[String], config: &Config) -> anyhow::Result<()> {
    let usage = "usage: sensei grade --quiz <file.json> --answers <A,B,C,-,...>";
    let Some(quiz_path) = flag_value(args, "--quiz") else {
        bail!(usage);
    };
    let Some(raw_answers) = flag_value(args, "--answers") else {
        bail!(usage);
    };

    let content = std::fs::read_to_string(&quiz_path)
        .with_context(|| format!("failed to read quiz file {quiz_path}"))?;
    let quiz: QuizResult = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse quiz file {quiz_path}"))?;

    let answers = parse_answers(&raw_answers)?;
    let report = grade(&quiz.questions, &answers, quiz.difficulty);
    print_json(&report, config.output.pretty)
}

fn run_match(args: &[String], config: &Config) -> anyhow::Result<()> {
    let skills: Vec<String> = args
        .iter()
        .take_while(|a| !a.starts_with('-'))
        .cloned()
        .collect();
    if skills.is_empty() {
        bail!("usage: sensei match <skill>... [--roster <file.json>]");
    }

    let mentors = resolve_roster(args, config)?;
    tracing::debug!(mentors = mentors.len(), "roster loaded");

    let results = batch_match(&skills, &mentors);
    if let [single] = results.as_slice() {
        print_json(single, config.output.pretty)
    } else {
        print_json(&results, config.output.pretty)
    }
}

fn run_categories() {
    for category in QuestionCategory::ALL {
        println!("{category}");
    }
}

/// Parses a comma-separated answer list. Accepts bare letters (`a`, `C`)
/// and the full option labels (`Option B`); `-` or an empty entry marks a
/// skipped question.
fn parse_answers(raw: &str) -> anyhow::Result<Vec<Option<AnswerKey>>> {
    raw.split(',').map(parse_answer).collect()
}

fn parse_answer(raw: &str) -> anyhow::Result<Option<AnswerKey>> {
    let entry = raw.trim();
    if entry.is_empty() || entry == "-" {
        return Ok(None);
    }

    let letter = entry
        .strip_prefix("Option ")
        .or_else(|| entry.strip_prefix("option "))
        .unwrap_or(entry);
    let key = match letter {
        "A" | "a" => AnswerKey::A,
        "B" | "b" => AnswerKey::B,
        "C" | "c" => AnswerKey::C,
        "D" | "d" => AnswerKey::D,
        _ => bail!("invalid answer {raw:?}, expected A-D or - for a skipped question"),
    };
    Ok(Some(key))
}

/// An explicitly flagged roster file must load; a roster configured in
/// the config file degrades to the demo roster with a warning.
fn resolve_roster(args: &[String], config: &Config) -> anyhow::Result<Vec<MentorRecord>> {
    if let Some(path) = flag_value(args, "--roster") {
        return load_roster(Path::new(&path));
    }
    if let Some(path) = &config.matching.roster_path {
        match load_roster(Path::new(path)) {
            Ok(mentors) => return Ok(mentors),
            Err(e) => tracing::warn!("configured roster unavailable, using the demo roster: {e:#}"),
        }
    }
    Ok(demo_roster())
}

fn load_roster(path: &Path) -> anyhow::Result<Vec<MentorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse roster file {}", path.display()))
}

/// Built-in roster used when no roster file is configured. Mirrors the
/// shape of a real mentor export, including one unverified entry and one
/// lowercase skill name.
fn demo_roster() -> Vec<MentorRecord> {
    vec![
        MentorRecord {
            user_id: "mentor001".into(),
            skill_name: "SQL".into(),
            verification_status: "verified".into(),
            verification_score: 95,
            experience_level: "Expert".into(),
        },
        MentorRecord {
            user_id: "mentor002".into(),
            skill_name: "MySQL".into(),
            verification_status: "verified".into(),
            verification_score: 88,
            experience_level: "Advanced".into(),
        },
        MentorRecord {
            user_id: "mentor003".into(),
            skill_name: "SQL".into(),
            verification_status: "unverified".into(),
            verification_score: 75,
            experience_level: "Intermediate".into(),
        },
        MentorRecord {
            user_id: "mentor004".into(),
            skill_name: "Python".into(),
            verification_status: "verified".into(),
            verification_score: 92,
            experience_level: "Expert".into(),
        },
        MentorRecord {
            user_id: "mentor005".into(),
            skill_name: "sql".into(),
            verification_status: "verified".into(),
            verification_score: 90,
            experience_level: "Advanced".into(),
        },
    ]
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_usage() {
    println!("sensei v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  sensei quiz <skill> [--difficulty <level>] [--seed <n>]");
    println!("  sensei grade --quiz <file.json> --answers <A,B,C,-,...>");
    println!("  sensei match <skill>... [--roster <file.json>]");
    println!("  sensei categories");
    println!("  sensei init [--output <path>]");
    println!();
    println!("Global flags:");
    println!("  --config <path>   config file (default: config/default.toml)");
    println!("  --version         print version and exit");
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

/// Priority: CLI --config > `SENSEI_CONFIG` env > config/default.toml
fn resolve_config_path(args: &[String]) -> PathBuf {
    if let Some(path) = flag_value(args, "--config") {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("SENSEI_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("config/default.toml")
}

// Logs go to stderr so JSON output on stdout stays pipeable.
fn init_subscriber() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn flag_value_finds_the_pair() {
        let args = args(&["quiz", "SQL", "--difficulty", "advanced", "--seed", "42"]);
        assert_eq!(
            flag_value(&args, "--difficulty").as_deref(),
            Some("advanced")
        );
        assert_eq!(flag_value(&args, "--seed").as_deref(), Some("42"));
        assert!(flag_value(&args, "--roster").is_none());
    }

    #[test]
    fn flag_value_ignores_trailing_flag_without_value() {
        let args = args(&["quiz", "SQL", "--difficulty"]);
        assert!(flag_value(&args, "--difficulty").is_none());
    }

    #[test]
    #[serial]
    fn resolve_config_path_priority() {
        let plain = args(&["quiz", "SQL"]);
        unsafe { std::env::remove_var("SENSEI_CONFIG") };
        assert_eq!(
            resolve_config_path(&plain),
            PathBuf::from("config/default.toml")
        );

        unsafe { std::env::set_var("SENSEI_CONFIG", "/tmp/sensei.toml") };
        assert_eq!(
            resolve_config_path(&plain),
            PathBuf::from("/tmp/sensei.toml")
        );

        let flagged = args(&["quiz", "SQL", "--config", "custom.toml"]);
        assert_eq!(resolve_config_path(&flagged), PathBuf::from("custom.toml"));
        unsafe { std::env::remove_var("SENSEI_CONFIG") };
    }

    #[test]
    fn parse_answers_accepts_letters_labels_and_skips() {
        let answers = parse_answers("a,B, Option C ,-,,d").unwrap();
        assert_eq!(
            answers,
            [
                Some(AnswerKey::A),
                Some(AnswerKey::B),
                Some(AnswerKey::C),
                None,
                None,
                Some(AnswerKey::D),
            ]
        );
    }

    #[test]
    fn parse_answers_rejects_unknown_entries() {
        let err = parse_answers("A,B,E").unwrap_err();
        assert!(err.to_string().contains("invalid answer"));
    }

    #[test]
    fn demo_roster_has_the_expected_entries() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].user_id, "mentor001");
        assert_eq!(roster[2].verification_status, "unverified");
        assert_eq!(roster[4].skill_name, "sql");
    }

    #[test]
    fn load_roster_reads_a_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentors.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"[
    {{"user_id": "m1", "skill_name": "Rust", "verification_status": "verified", "verification_score": 81, "experience_level": "Advanced"}},
    {{"user_id": "m2"}}
]"#
        )
        .unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].skill_name, "Rust");
        assert_eq!(roster[1].experience_level, "Unknown");
    }

    #[test]
    fn load_roster_reports_parse_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_roster(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse roster file"));
    }

    #[test]
    fn load_roster_reports_missing_files() {
        let err = load_roster(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read roster file"));
    }

    #[test]
    fn explicit_roster_flag_failures_are_fatal() {
        let args = args(&["SQL", "--roster", "/does/not/exist.json"]);
        let err = resolve_roster(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("failed to read roster file"));
    }

    #[test]
    fn configured_roster_failures_fall_back_to_the_demo_roster() {
        let mut config = Config::default();
        config.matching.roster_path = Some("/does/not/exist.json".to_owned());

        let mentors = resolve_roster(&args(&["SQL"]), &config).unwrap();
        assert_eq!(mentors, demo_roster());
    }

    #[test]
    fn configured_roster_is_loaded_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentors.json");
        std::fs::write(
            &path,
            r#"[{"user_id": "m1", "skill_name": "Rust", "verification_status": "verified", "verification_score": 81, "experience_level": "Advanced"}]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.matching.roster_path = Some(path.display().to_string());

        let mentors = resolve_roster(&args(&["Rust"]), &config).unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].user_id, "m1");
    }

    #[test]
    fn missing_roster_settings_use_the_demo_roster() {
        let mentors = resolve_roster(&args(&["SQL"]), &Config::default()).unwrap();
        assert_eq!(mentors, demo_roster());
    }
}
