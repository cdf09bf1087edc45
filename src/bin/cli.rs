//! CLI for querying the help centre from a terminal.
//!
//! One-shot mode with `-q/--query`, or an interactive read-eval loop
//! with `-i/--interactive`. Running with no query falls back to the
//! interactive loop.

use std::io::{self, BufRead, Write};

use clap::Parser;
use ecloud_search::{Answer, Searcher, SearcherConfig};

/// ECloud help-centre search.
#[derive(Parser)]
#[command(name = "ecloud", version, about)]
struct Cli {
    /// Question to search for (one-shot mode).
    #[arg(short, long)]
    query: Option<String>,

    /// Start an interactive read-eval loop.
    #[arg(short, long)]
    interactive: bool,

    /// Directory for rotated log files.
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = ecloud::logging::init(&cli.log_dir)?;

    let searcher = Searcher::new(SearcherConfig::default())?;

    match cli.query {
        Some(ref query) if !cli.interactive => run_query(&searcher, query).await,
        _ => interactive_loop(&searcher).await,
    }
}

async fn run_query(
    searcher: &Searcher,
    query: &str,
) -> anyhow::Result<()> {
    println!("searching...");
    let answer = searcher.get_best_answer(query).await?;
    print_answer(&answer);
    Ok(())
}

async fn interactive_loop(searcher: &Searcher) -> anyhow::Result<()> {
    println!("ECloud help-centre search — type 'quit' or 'exit' to leave");

    let stdin = io::stdin();
    loop {
        print!("query> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        println!("searching...");
        match searcher.get_best_answer(query).await {
            Ok(answer) => {
                print_answer(&answer);
                println!("\n{}\n", "=".repeat(50));
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
    Ok(())
}

fn print_answer(answer: &Answer) {
    println!();
    println!("question:   {}", answer.question);
    println!("answer:     {}", answer.answer);
    println!("title:      {}", answer.title);
    println!("source:     {}", answer.source_url);
    println!("confidence: {:.4}", answer.confidence);

    if !answer.alternative_results.is_empty() {
        println!("\nalternatives:");
        for alt in &answer.alternative_results {
            println!("  {:.4}  {}  {}", alt.score, alt.title, alt.url);
        }
    }
}
