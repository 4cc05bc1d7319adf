//! pitch CLI - positioning statement generator
//!
//! Usage:
//!   pitch                          Interactive session
//!   pitch new [--no-ai]            Interactive session
//!   pitch generate --input <file>  Build from a JSON framework file
//!   pitch demo                     Render the built-in sample
//!   pitch init [path]              Write default .pitch/config.toml

mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pitch_ai::Enhancer;
use pitch_core::{PitchConfig, PositioningDocument, PositioningInput};
use pitch_engine::{example_input, DocumentGenerator};
use pitch_render::{write_export, ExportFormat, ReportRenderer};
use prompt::Prompter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pitch")]
#[command(author, version, about = "Positioning statement generator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the framework questions interactively
    New {
        /// Skip language model enhancement
        #[arg(long)]
        no_ai: bool,
    },

    /// Generate from a JSON framework file
    Generate {
        /// Input file with camelCase framework fields
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Export format (markdown, text, json)
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output directory (defaults to the configured one)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Customer problem used in the 2-minute pitch
        #[arg(long)]
        problem: Option<String>,

        /// Skip language model enhancement
        #[arg(long)]
        no_ai: bool,
    },

    /// Render the built-in Acme Analytics sample
    Demo {
        /// Also export in this format (markdown, text, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory (defaults to the configured one)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Write a default .pitch/config.toml
    Init {
        /// Project path (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {:#}", "\n❌ Error:".red(), e);
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>) -> Result<()> {
    match command.unwrap_or(Commands::New { no_ai: false }) {
        Commands::New { no_ai } => cmd_new(no_ai).await,
        Commands::Generate {
            input,
            format,
            out_dir,
            problem,
            no_ai,
        } => cmd_generate(input, format, out_dir, problem, no_ai).await,
        Commands::Demo { format, out_dir } => cmd_demo(format, out_dir),
        Commands::Init { path } => cmd_init(path),
    }
}

fn load_config() -> Result<PitchConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = PitchConfig::load_or_default(&cwd)?;
    debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn build_enhancer(config: &PitchConfig, no_ai: bool) -> Enhancer {
    if no_ai {
        info!("AI enhancement skipped (--no-ai)");
        Enhancer::disabled()
    } else {
        Enhancer::from_config(&config.enhancement)
    }
}

fn export(
    doc: &PositioningDocument,
    format: ExportFormat,
    out_dir: Option<PathBuf>,
    config: &PitchConfig,
) -> Result<PathBuf> {
    let dir = out_dir.unwrap_or_else(|| config.export.output_dir.clone());
    let path = write_export(doc, format, &dir, config.report.wrap_width)
        .with_context(|| format!("Failed to export {}", format))?;
    println!("{}", format!("\n✓ Saved to {}\n", path.display()).green());
    Ok(path)
}

async fn cmd_new(no_ai: bool) -> Result<()> {
    let config = load_config()?;
    let enhancer = build_enhancer(&config, no_ai);

    println!("{}", "\n🎯 POSITIONING STATEMENT GENERATOR".cyan().bold());
    println!(
        "{}",
        "Based on April Dunford's \"Obviously Awesome\" framework\n".bright_black()
    );

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    let input = prompter.collect_input()?;

    println!(
        "{}",
        "\n🎉 Generating your positioning statement...\n".cyan().bold()
    );

    let (doc, suggestions) = enhancer.build_document(&input).await;

    let renderer = ReportRenderer::new(config.report.wrap_width);
    println!("{}", renderer.render_with_suggestions(&doc, Some(&suggestions)));

    if let Some(format) = prompter.choose_export()? {
        export(&doc, format, None, &config)?;
    }

    println!(
        "{}",
        "\n🚀 Your positioning is ready! Go nail that messaging.\n".cyan()
    );
    Ok(())
}

async fn cmd_generate(
    input_path: PathBuf,
    format: String,
    out_dir: Option<PathBuf>,
    problem: Option<String>,
    no_ai: bool,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let config = load_config()?;
    let input = read_input(&input_path)?;

    let problem = match problem {
        Some(problem) => Some(problem),
        None => {
            build_enhancer(&config, no_ai)
                .try_infer_problem(&input.target_market, &input.competitive_alternatives)
                .await
        }
    };

    let doc = DocumentGenerator::new(&input).complete_document_with_problem(problem.as_deref());
    println!("{}", ReportRenderer::new(config.report.wrap_width).render(&doc));

    export(&doc, format, out_dir, &config)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<PositioningInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input: PositioningInput =
        serde_json::from_str(&content).context("Failed to parse framework JSON")?;
    input.validate()?;
    Ok(input)
}

fn cmd_demo(format: Option<String>, out_dir: Option<PathBuf>) -> Result<()> {
    let format: Option<ExportFormat> = format.map(|f| f.parse()).transpose()?;
    let config = load_config()?;

    let doc = DocumentGenerator::new(&example_input()).complete_document();
    println!("{}", ReportRenderer::new(config.report.wrap_width).render(&doc));

    if let Some(format) = format {
        export(&doc, format, out_dir, &config)?;
    }
    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    info!("Initializing pitch in {:?}", path);

    let config_path = PitchConfig::path(&path);
    if config_path.exists() {
        println!(
            "{}",
            format!("Config already exists at {}", config_path.display()).yellow()
        );
        return Ok(());
    }

    let written = PitchConfig::write_default(&path)?;
    println!("{}", "✓ Initialized pitch".green().bold());
    println!("Created:");
    println!("  {}", written.display());
    println!();
    println!("Set OPENAI_API_KEY to enable AI suggestions.");
    Ok(())
}
