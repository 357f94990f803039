use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topicgate::cli::AnswerFlags;

#[derive(Parser)]
#[command(name = "topicgate")]
#[command(
    version,
    about = "Question answering assistant restricted to Palestine-related topics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one question and reveal it on the terminal
    Ask {
        #[arg(required = true, help = "Question to ask")]
        question: Vec<String>,
        #[arg(long, help = "Print the answer at once")]
        no_typing: bool,
        #[arg(long, help = "Let the model refuse off-topic questions instead of refusing locally")]
        advisory: bool,
    },

    /// Show whether a question is in the supported domain (no backend call)
    Check {
        #[arg(required = true, help = "Question to check")]
        question: Vec<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Search the catalogue of articles from reliable outlets
    Sources {
        #[arg(required = true, help = "Search terms")]
        query: Vec<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Interactive session on stdin
    Chat {
        #[arg(long, help = "Print answers at once")]
        no_typing: bool,
        #[arg(long, help = "Let the model refuse off-topic questions instead of refusing locally")]
        advisory: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mtopicgate encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Ask {
            question,
            no_typing,
            advisory,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(topicgate::cli::commands::ask::run(
                &question.join(" "),
                AnswerFlags {
                    no_typing,
                    advisory,
                },
            ))?;
        }
        Commands::Check { question, format } => {
            topicgate::cli::commands::check::run(&question.join(" "), &format)?;
        }
        Commands::Sources { query, format } => {
            topicgate::cli::commands::sources::run(&query.join(" "), &format)?;
        }
        Commands::Chat {
            no_typing,
            advisory,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(topicgate::cli::commands::chat::run(AnswerFlags {
                no_typing,
                advisory,
            }))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                topicgate::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                topicgate::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                topicgate::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
