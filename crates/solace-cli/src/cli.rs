use clap::{Parser, Subcommand};
use eyre::{bail, eyre, Result};

use solace_assessments::engine::AssessmentEngine;
use solace_assessments::scoring::FollowUpValue;
use solace_assessments::{all_assessments, get_assessment};
use solace_storage::client::SessionStoreClient;

use crate::config::BackendConfig;

#[derive(Parser)]
#[command(name = "solace", about = "Operator tools for the Solace assessment platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the registered assessments.
    List,
    /// Print one assessment definition as JSON.
    Show { id: String },
    /// Check every registered definition for banding/scale/rule errors.
    Validate,
    /// Score an answer sequence and print the results-page JSON.
    Score {
        id: String,
        /// Comma-separated answer values in question order; -1 for unanswered.
        #[arg(long)]
        answers: String,
        /// Follow-up fields as name=value (true/false or a choice string).
        #[arg(long = "follow-up")]
        follow_ups: Vec<String>,
    },
    /// List stored assessment sessions from the persistence backend.
    Sessions {
        /// Only sessions for this assessment type.
        #[arg(long)]
        assessment_type: Option<String>,
    },
    /// List contact requests practice staff have not handled yet.
    Contacts,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List => {
            for def in all_assessments() {
                println!(
                    "{:<18} {} ({} questions, max {})",
                    def.id,
                    def.name,
                    def.question_count(),
                    def.max_score()
                );
            }
            Ok(())
        }

        Command::Show { id } => {
            let def = get_assessment(&id).ok_or_else(|| eyre!("unknown assessment: {id}"))?;
            println!("{}", serde_json::to_string_pretty(def)?);
            Ok(())
        }

        Command::Validate => {
            let mut failures = 0;
            for def in all_assessments() {
                let errors = def.validate();
                if errors.is_empty() {
                    println!("{}: ok", def.id);
                } else {
                    failures += errors.len();
                    for error in errors {
                        eprintln!("{error}");
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} definition error(s)");
            }
            Ok(())
        }

        Command::Score {
            id,
            answers,
            follow_ups,
        } => {
            let def = get_assessment(&id).ok_or_else(|| eyre!("unknown assessment: {id}"))?;
            let values = parse_answers(&answers)?;
            if values.len() != def.question_count() {
                bail!(
                    "'{id}' has {} questions, got {} answers",
                    def.question_count(),
                    values.len()
                );
            }

            let mut engine = AssessmentEngine::new(def);
            for (index, value) in values.iter().enumerate() {
                if *value >= 0 {
                    engine.select_answer(index, *value)?;
                }
            }
            for pair in &follow_ups {
                let (name, value) = parse_follow_up(pair)?;
                engine.set_follow_up(name, value);
            }

            let result = engine.score()?;
            println!("{}", serde_json::to_string_pretty(&result.navigation_state()?)?);
            Ok(())
        }

        Command::Sessions { assessment_type } => {
            let store = store_from_env()?;
            let rows = store.list_sessions(assessment_type.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }

        Command::Contacts => {
            let store = store_from_env()?;
            let rows = store.list_unprocessed_contacts().await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
    }
}

fn store_from_env() -> Result<SessionStoreClient> {
    let config = BackendConfig::from_env()?;
    Ok(SessionStoreClient::new(
        &config.base_url,
        config.api_key.as_deref(),
        config.timeout,
    )?)
}

fn parse_answers(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<i32>()
                .map_err(|_| eyre!("invalid answer value: '{}'", s.trim()))
        })
        .collect()
}

fn parse_follow_up(pair: &str) -> Result<(&str, FollowUpValue)> {
    let (name, raw) = pair
        .split_once('=')
        .ok_or_else(|| eyre!("follow-up must be name=value, got '{pair}'"))?;
    let value = match raw {
        "true" => FollowUpValue::Flag(true),
        "false" => FollowUpValue::Flag(false),
        other => FollowUpValue::Choice(other.to_string()),
    };
    Ok((name, value))
}
