//! SIP Calculator CLI
//!
//! Command-line front end for running projections, batches and rate sweeps,
//! and for managing saved history and preferences.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sip_calculator::{
    format::{format_currency, ResultSummary},
    history::{HistoryEntry, HistoryStore, DEFAULT_HISTORY_PATH},
    input::load_inputs,
    settings::DEFAULT_SETTINGS_PATH,
    ProjectionEngine, ProjectionInput, ProjectionResult, ScenarioRunner, Settings, Theme,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sip", version, about = "Systematic Investment Plan projections")]
struct Cli {
    /// Preferences file
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Reject NaN or infinite inputs instead of propagating them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a single monthly contribution
    #[command(allow_negative_numbers = true)]
    Project {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        years: f64,
        /// Annual rate of return in percent
        #[arg(long)]
        rate: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Append the calculation to this history file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Project every row of a CSV file
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Write results as CSV here instead of printing them
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Project one contribution across several rates
    #[command(allow_negative_numbers = true)]
    Sweep {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        years: f64,
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
    /// Show saved calculations
    History {
        #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
        file: PathBuf,
    },
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    Get,
    Set { theme: String },
    Toggle,
}

#[derive(Debug, serde::Serialize)]
struct BatchRow<'a> {
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "MonthlyInvestment")]
    monthly_investment: f64,
    #[serde(rename = "PeriodYears")]
    period_years: f64,
    #[serde(rename = "AnnualRatePercent")]
    annual_rate_percent: f64,
    #[serde(rename = "ActualAmount")]
    actual_amount: f64,
    #[serde(rename = "NetReturn")]
    net_return: f64,
    #[serde(rename = "TimesRolledOver")]
    times_rolled_over: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("failed to load settings from {}", cli.settings.display()))?;

    match cli.command {
        Command::Project { amount, years, rate, json, save } => {
            let input = ProjectionInput::new(amount, years, rate);
            let result = run_one(&settings, &input, cli.strict)?;

            if json {
                let body = serde_json::json!({
                    "input": input,
                    "result": result,
                    "future_value": result.future_value(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", ResultSummary::new(&input, &result, &settings.currency_symbol));
                println!("Times Rolled Over:  {:.4}", result.times_rolled_over);
            }

            if let Some(path) = save {
                let store = HistoryStore::new(path);
                store
                    .append(&HistoryEntry::new(Utc::now(), &input, &result))
                    .with_context(|| format!("failed to save to {}", store.path().display()))?;
            }
        }
        Command::Batch { input, output } => {
            let rows = load_inputs(&input)
                .with_context(|| format!("failed to load inputs from {}", input.display()))?;
            if cli.strict {
                for (i, row) in rows.iter().enumerate() {
                    row.input
                        .validate()
                        .with_context(|| format!("row {}", i + 1))?;
                }
            }

            let outcomes = ScenarioRunner::with_config(settings.projection).run_labeled(&rows);

            match output {
                Some(path) => {
                    let mut writer = csv::Writer::from_path(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    for outcome in &outcomes {
                        writer.serialize(BatchRow {
                            label: outcome.label.as_deref().unwrap_or(""),
                            monthly_investment: outcome.input.monthly_investment,
                            period_years: outcome.input.period_years,
                            annual_rate_percent: outcome.input.annual_rate_percent,
                            actual_amount: outcome.result.actual_amount,
                            net_return: outcome.result.net_return,
                            times_rolled_over: outcome.result.times_rolled_over,
                        })?;
                    }
                    writer.flush()?;
                    println!("Wrote {} projections to {}", outcomes.len(), path.display());
                }
                None => {
                    let symbol = &settings.currency_symbol;
                    println!(
                        "{:>12} {:>12} {:>6} {:>6} {:>18} {:>18} {:>8}",
                        "Label", "Monthly", "Years", "Rate", "Invested", "Profit", "Times"
                    );
                    println!("{}", "-".repeat(86));
                    for outcome in &outcomes {
                        println!(
                            "{:>12} {:>12.2} {:>6.0} {:>6.1} {:>18} {:>18} {:>8.4}",
                            outcome.label.as_deref().unwrap_or("-"),
                            outcome.input.monthly_investment,
                            outcome.input.period_years,
                            outcome.input.annual_rate_percent,
                            format_currency(outcome.result.actual_amount, symbol),
                            format_currency(outcome.result.net_return, symbol),
                            outcome.result.times_rolled_over,
                        );
                    }
                }
            }
        }
        Command::Sweep { amount, years, rates } => {
            let input = ProjectionInput::new(amount, years, 0.0);
            if cli.strict {
                input.validate()?;
                if let Some(bad) = rates.iter().find(|r| !r.is_finite()) {
                    bail!("annual_rate_percent must be finite, got {}", bad);
                }
            }

            let runner = ScenarioRunner::with_config(settings.projection);
            let results = runner.run_rates(&input, &rates);

            println!("{:>6} {:>18} {:>18} {:>8}", "Rate", "Expected", "Profit", "Times");
            for (rate, result) in rates.iter().zip(&results) {
                println!(
                    "{:>6.1} {:>18} {:>18} {:>8.4}",
                    rate,
                    format_currency(result.future_value(), &settings.currency_symbol),
                    format_currency(result.net_return, &settings.currency_symbol),
                    result.times_rolled_over,
                );
            }
        }
        Command::History { file } => {
            let store = HistoryStore::new(file);
            let entries = store
                .load()
                .with_context(|| format!("failed to read {}", store.path().display()))?;

            if entries.is_empty() {
                println!("No saved calculations in {}", store.path().display());
            }
            for entry in &entries {
                let result = entry.result();
                println!(
                    "{}  {} x {:.0}y @ {:.1}%  invested {}  profit {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    format_currency(entry.monthly_investment, &settings.currency_symbol),
                    entry.period_years,
                    entry.annual_rate_percent,
                    format_currency(result.actual_amount, &settings.currency_symbol),
                    format_currency(result.net_return, &settings.currency_symbol),
                );
            }
        }
        Command::Theme { action } => {
            let mut settings = settings;
            match action.unwrap_or(ThemeAction::Get) {
                ThemeAction::Get => {
                    println!("{}", settings.preferred_theme);
                    return Ok(());
                }
                ThemeAction::Set { theme } => {
                    settings.preferred_theme = Theme::parse(&theme).with_context(|| {
                        format!("unknown theme {:?}, expected system, light or dark", theme)
                    })?;
                }
                ThemeAction::Toggle => {
                    settings.preferred_theme = settings.preferred_theme.toggled();
                }
            }
            settings
                .save(&cli.settings)
                .with_context(|| format!("failed to save settings to {}", cli.settings.display()))?;
            println!("{}", settings.preferred_theme);
        }
    }

    Ok(())
}

fn run_one(settings: &Settings, input: &ProjectionInput, strict: bool) -> Result<ProjectionResult> {
    let engine = ProjectionEngine::new(settings.projection);
    if strict {
        Ok(engine.try_project(input)?)
    } else {
        Ok(engine.project(input))
    }
}
