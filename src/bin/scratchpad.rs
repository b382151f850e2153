use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scratchpad::lessons::run_lessons;
use scratchpad::{reverse, reverse_graphemes, Lesson, LessonContext, ScratchpadConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "scratchpad")]
#[command(version, about = "Small runnable lessons, one language feature each", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./scratchpad.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Plain lesson headers
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reverse each argument
    Reverse {
        #[arg(required = true)]
        text: Vec<String>,

        /// Keep grapheme clusters together
        #[arg(short, long)]
        graphemes: bool,
    },

    /// List every lesson
    List,

    /// Run lessons by name (default: the configured set)
    Run { lessons: Vec<Lesson> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = ScratchpadConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Reverse { text, graphemes } => {
            for s in &text {
                let reversed = if graphemes {
                    reverse_graphemes(s)
                } else {
                    reverse(s)
                };
                writeln!(out, "{reversed}")?;
            }
        }
        Commands::List => {
            for lesson in Lesson::ALL {
                writeln!(out, "{:<12} {}", lesson.name().bold(), lesson.summary())?;
            }
        }
        Commands::Run { lessons } => {
            let lessons = if lessons.is_empty() {
                config.selected_lessons()?
            } else {
                lessons
            };
            let ctx = LessonContext::current(config.greeting);
            run_lessons(&lessons, &ctx, &mut out).context("Failed to run lessons")?;
        }
    }

    Ok(())
}
