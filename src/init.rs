use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};
use sensei_quiz::Difficulty;

use crate::config::Config;

#[derive(Default)]
pub(crate) struct WizardState {
    pub(crate) default_difficulty: String,
    pub(crate) pretty: bool,
    pub(crate) roster_path: Option<String>,
}

pub fn run(output: Option<PathBuf>) -> anyhow::Result<()> {
    println!("sensei init - configuration wizard\n");

    let mut state = WizardState {
        default_difficulty: "beginner".into(),
        pretty: true,
        ..WizardState::default()
    };

    step_quiz(&mut state)?;
    step_output(&mut state)?;
    step_matching(&mut state)?;
    step_review_and_write(&state, output)?;

    Ok(())
}

fn step_quiz(state: &mut WizardState) -> anyhow::Result<()> {
    println!("== Step 1/4: Quiz Defaults ==\n");

    let levels = Difficulty::ALL.map(|d| d.as_str());
    let selection = Select::new()
        .with_prompt("Default quiz difficulty")
        .items(levels)
        .default(0)
        .interact()?;
    state.default_difficulty = levels[selection].to_owned();

    println!();
    Ok(())
}

fn step_output(state: &mut WizardState) -> anyhow::Result<()> {
    println!("== Step 2/4: Output ==\n");

    state.pretty = Confirm::new()
        .with_prompt("Pretty-print JSON output?")
        .default(true)
        .interact()?;

    println!();
    Ok(())
}

fn step_matching(state: &mut WizardState) -> anyhow::Result<()> {
    println!("== Step 3/4: Mentor Roster ==\n");

    let raw: String = Input::new()
        .with_prompt("Roster file path (leave empty for the built-in demo roster)")
        .default(String::new())
        .interact_text()?;
    state.roster_path = if raw.is_empty() { None } else { Some(raw) };

    println!();
    Ok(())
}

fn step_review_and_write(state: &WizardState, output: Option<PathBuf>) -> anyhow::Result<()> {
    println!("== Step 4/4: Review & Write ==\n");

    let config = build_config(state);
    let toml_str = toml::to_string_pretty(&config)?;

    println!("--- Generated config ---");
    println!("{toml_str}");
    println!("------------------------\n");

    let path = match output {
        Some(path) => path,
        None => {
            let raw: String = Input::new()
                .with_prompt("Write config to")
                .default("config/default.toml".to_owned())
                .interact_text()?;
            PathBuf::from(raw)
        }
    };

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &toml_str)?;
    println!("Config written to {}", path.display());

    print_next_steps(&path);

    Ok(())
}

fn print_next_steps(path: &std::path::Path) {
    println!("\nNext steps:");
    println!(
        "  1. Generate a quiz: sensei quiz SQL --config {}",
        path.display()
    );
    println!(
        "  2. Match mentors:   sensei match SQL --config {}",
        path.display()
    );
}

pub(crate) fn build_config(state: &WizardState) -> Config {
    let mut config = Config::default();
    config
        .quiz
        .default_difficulty
        .clone_from(&state.default_difficulty);
    config.output.pretty = state.pretty;
    config.matching.roster_path.clone_from(&state.roster_path);
    config
}
