#![allow(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use felt_data::ReferenceData;
use felt_knowledge::{
    KnowledgeBase, KnowledgeEntry, SUGGESTED_QUESTIONS, SearchSettings, SectionIndex,
    SectionIndexEntry,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "felt",
    about = "FeltTheory knowledge base: search poker strategy reference data",
    arg_required_else_help = true
)]
struct Cli {
    /// Explicit settings file (for example: `packages/conf/felt.yaml`).
    ///
    /// Overrides `$FELT_CONFIG` and the default path.
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Load reference tables from this directory instead of the embedded ones.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    /// Log corpus construction and query expansion to stderr.
    #[arg(long, short = 'v', default_value_t = false, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the knowledge base.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Return at most this many entries (cannot exceed the configured maximum).
        #[arg(short, long)]
        limit: Option<usize>,
        /// Include each result's score.
        #[arg(long, default_value_t = false)]
        explain: bool,
    },
    /// Print one entry by id.
    Show { id: u32 },
    /// List the suggested starter questions.
    Suggest,
    /// Entry counts per category.
    Stats,
    /// Filter the section quick-find index.
    Sections {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
    Text,
}

#[derive(Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    entry: &'a KnowledgeEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else warn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "felt_knowledge=debug,felt_data=debug"
        } else {
            "felt_knowledge=warn,felt_data=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Search {
            query,
            limit,
            explain,
        } => {
            let kb = build_knowledge_base(cli)?;
            let query = query.join(" ");
            let settings = kb.settings().with_limit(*limit);
            let hits = kb.search_scored_with(&query, &settings);
            let parsed = kb.parse_query(&query);

            if cli.output == OutputFormat::Text {
                if hits.is_empty() {
                    println!("no matches");
                }
                for hit in &hits {
                    print_entry(hit.entry, explain.then_some(hit.score));
                }
                return Ok(());
            }

            let results: Vec<SearchHit<'_>> = hits
                .iter()
                .map(|hit| SearchHit {
                    entry: hit.entry,
                    score: explain.then_some(hit.score),
                })
                .collect();
            emit(
                &json!({
                    "query": query,
                    "normalized": parsed.as_ref().map_or("", |p| p.normalized.as_str()),
                    "words": parsed.as_ref().map_or(&[][..], |p| p.words.as_slice()),
                    "results": results,
                }),
                cli.output,
            )
        }
        Command::Show { id } => {
            let kb = build_knowledge_base(cli)?;
            let Some(entry) = kb.entry(*id) else {
                bail!("no knowledge entry with id {id} (valid ids: 1..={})", kb.len());
            };
            if cli.output == OutputFormat::Text {
                print_entry(entry, None);
                return Ok(());
            }
            emit(entry, cli.output)
        }
        Command::Suggest => {
            if cli.output == OutputFormat::Text {
                for question in SUGGESTED_QUESTIONS {
                    println!("{question}");
                }
                return Ok(());
            }
            emit(&SUGGESTED_QUESTIONS, cli.output)
        }
        Command::Stats => {
            let kb = build_knowledge_base(cli)?;
            let counts = kb.category_counts();
            if cli.output == OutputFormat::Text {
                println!("total: {}", kb.len());
                for (category, count) in &counts {
                    println!("{category}: {count}");
                }
                return Ok(());
            }
            emit(
                &json!({
                    "total": kb.len(),
                    "aliases": kb.aliases().len(),
                    "categories": counts,
                }),
                cli.output,
            )
        }
        Command::Sections { query, limit } => {
            let data = load_reference_data(cli)?;
            let index = SectionIndex::build(&data);
            let query = query.join(" ");
            let results = index.filter(&query, (*limit).max(1));

            if cli.output == OutputFormat::Text {
                if results.is_empty() {
                    println!("no matches");
                }
                for row in &results {
                    print_section_row(row);
                }
                return Ok(());
            }
            emit(
                &json!({
                    "query": query,
                    "total": index.len(),
                    "results": results,
                }),
                cli.output,
            )
        }
    }
}

fn load_reference_data(cli: &Cli) -> Result<ReferenceData> {
    match &cli.data_dir {
        Some(dir) => ReferenceData::load_dir(dir)
            .with_context(|| format!("failed to load reference tables from {}", dir.display())),
        None => ReferenceData::builtin().context("failed to parse embedded reference tables"),
    }
}

fn build_knowledge_base(cli: &Cli) -> Result<KnowledgeBase> {
    let data = load_reference_data(cli)?;
    let settings = SearchSettings::load(cli.config_file.as_deref());
    KnowledgeBase::build(&data, settings).context("failed to build knowledge base")
}

fn print_entry(entry: &KnowledgeEntry, score: Option<i64>) {
    match score {
        Some(score) => println!(
            "#{} [{}] {} (score {score})",
            entry.id(), entry.category(), entry.question()
        ),
        None => println!("#{} [{}] {}", entry.id(), entry.category(), entry.question()),
    }
    println!("{}\n", entry.answer());
}

fn print_section_row(row: &SectionIndexEntry) {
    println!("{}: {}", row.section.label(), row.label);
}

fn emit<T: Serialize + ?Sized>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}
