use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mavito_core::analytics;
use mavito_core::{Page, PartOfSpeech, SearchQuery};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "mavito", version, about = "Multilingual statistical terminology service")]
pub struct Cli {
    /// Dataset file, overriding MAVITO_DATASET_PATH
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Listen address, overriding MAVITO_BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Search terms and print one page of results
    Search {
        query: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        part_of_speech: Option<String>,
        #[arg(long, default_value = "name")]
        sort_by: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Autocomplete a prefix
    Suggest { query: String },
    /// Print the coarse part of speech of a word
    Classify { word: String },
    /// Dataset statistics; with --lang, the most frequent terms of that language
    Analytics {
        #[arg(long)]
        lang: Option<String>,
        #[arg(long, default_value_t = 10)]
        top_n: usize,
    },
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub word: String,
    pub part_of_speech: PartOfSpeech,
}

pub fn classify(state: &AppState, word: String) -> Classification {
    let part_of_speech = state.engine.loader().classifier().classify(&word);
    Classification {
        word,
        part_of_speech,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run every command except `serve`
pub async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { .. } => anyhow::bail!("serve is handled by main"),
        Command::Search {
            query,
            language,
            domain,
            part_of_speech,
            sort_by,
            page,
            page_size,
        } => {
            let query = SearchQuery {
                language,
                domain,
                part_of_speech,
                ..SearchQuery::new(query).sort_by(sort_by.as_str())
            };
            let results = state.engine.search(&query).await?;
            let page_size = page_size.unwrap_or(state.config.search.default_page_size);
            print_json(&Page::paginate(results, page, page_size))
        }
        Command::Suggest { query } => print_json(&state.engine.suggest(&query).await?),
        Command::Classify { word } => print_json(&classify(state, word)),
        Command::Analytics { lang, top_n } => {
            let records = state.engine.loader().load_records().await?;
            match lang {
                Some(lang) => print_json(&analytics::term_frequency(records, &lang, top_n)?),
                None => print_json(&analytics::descriptive(records)),
            }
        }
    }
}
