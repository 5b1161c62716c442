use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use mealmind_planner::nutrition::{
    compute_daily_calories, compute_daily_requirements, compute_macros, compute_nutrition_plan,
    Profile,
};
use mealmind_planner::state::AppState;

/// Daily calorie, macronutrient and per-meal targets from a nutrition profile.
#[derive(Parser)]
#[command(name = "mealmind-planner", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Daily calorie target
    Calories(InputArgs),
    /// Daily macronutrient grams
    Macros(InputArgs),
    /// Daily calories and macros together
    Requirements(InputArgs),
    /// Daily requirements plus per-meal targets (meal splits from MEAL_SPLITS)
    Plan(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Profile JSON file; `-` or no value reads stdin
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "mealmind_planner=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout carries the result, so logs go to stderr
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let state = AppState::init()?;

    let rendered = match &cli.command {
        Command::Calories(args) => {
            let profile = load_profile(args)?;
            let calories = compute_daily_calories(&profile);
            render(&json!({ "dailyCalories": calories }), args.pretty)?
        }
        Command::Macros(args) => {
            let profile = load_profile(args)?;
            render(&compute_macros(&profile), args.pretty)?
        }
        Command::Requirements(args) => {
            let profile = load_profile(args)?;
            render(&compute_daily_requirements(&profile), args.pretty)?
        }
        Command::Plan(args) => {
            let profile = load_profile(args)?;
            let plan = compute_nutrition_plan(&profile, &state.config.meal_splits);
            tracing::info!(
                daily_calories = plan.daily.daily_calories,
                meals = plan.meals.len(),
                "nutrition plan computed"
            );
            render(&plan, args.pretty)?
        }
    };

    println!("{}", rendered);
    Ok(())
}

fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn load_profile(args: &InputArgs) -> anyhow::Result<Profile> {
    let raw = read_input(args.profile.as_deref())?;
    parse_profile(&raw)
}

/// Parses and validates a profile document before anything is computed from it.
fn parse_profile(raw: &str) -> anyhow::Result<Profile> {
    let profile: Profile = serde_json::from_str(raw).context("parse profile json")?;
    if let Err(e) = profile.validate() {
        tracing::warn!(error = %e, "invalid profile");
        return Err(e).context("invalid profile");
    }
    Ok(profile)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("read profile {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read profile from stdin")?;
            Ok(buf)
        }
    }
}
