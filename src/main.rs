use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use hrscreen::config::DEFAULT_REPORT_PATH;
use hrscreen::{
    FileTextExtractor, GroqClient, LlmConfig, ScreeningConfig, format_summary,
    parse_match_response, run_screening,
};

#[derive(Parser)]
#[command(name = "hrscreen")]
#[command(author, version, about = "Resume and job description match screening", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a resume against a job description and write a CSV report
    Screen {
        /// Resume document (PDF or text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description document (PDF or text)
        #[arg(short, long)]
        jd: PathBuf,

        /// Output file for the CSV report (overwritten if present)
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Model to use instead of GROQ_MODEL or the default
        #[arg(long)]
        model: Option<String>,

        /// Print the full outcome as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a saved scoring response without calling the model
    ParseScore {
        /// File containing the raw model response
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            resume,
            jd,
            output,
            model,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            screen(resume, jd, output, model, json).await
        }
        Commands::ParseScore { input, verbose } => {
            setup_logging(verbose);
            parse_score(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn screen(
    resume: PathBuf,
    jd: PathBuf,
    output: PathBuf,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let mut llm_config = LlmConfig::from_env().context("Failed to load LLM configuration")?;
    if let Some(model) = model {
        llm_config = llm_config.with_model(model);
    }

    let client = GroqClient::new(llm_config).context("Failed to build LLM client")?;
    info!("Using model {}", client.model());

    let config = ScreeningConfig {
        report_path: output,
    };
    let outcome = run_screening(&client, &FileTextExtractor, &resume, &jd, &config)
        .await
        .context("Screening failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", format_summary(&outcome.report, &outcome.assessment));
    println!("Match Result");
    println!("============");
    println!("{}", outcome.raw_result);
    println!();
    println!("Report written to {}", outcome.report_path.display());

    Ok(())
}

fn parse_score(input: PathBuf) -> Result<()> {
    info!("Parsing scoring response from {:?}", input);
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read response file: {:?}", input))?;

    let assessment = parse_match_response(&text);

    println!("Parsed Scoring Response");
    println!("=======================");
    println!("Match Score: {}", assessment.match_score());
    println!("Strengths: {}", assessment.strengths_joined());
    println!("Weaknesses: {}", assessment.weaknesses_joined());

    if assessment.low_confidence() {
        println!();
        println!("Defaults applied:");
        for fallback in &assessment.fallbacks {
            println!("- {:?}", fallback);
        }
    }

    Ok(())
}
