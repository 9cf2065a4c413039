//! Hospitium citation CLI - Main entry point

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hospitium")]
#[command(version)]
#[command(about = "Format manuscript citations and bibliographies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand that reads citation records
#[derive(Args, Debug)]
struct SourceOpts {
    /// JSON file with citation records ('-' for stdin)
    #[arg(short, long)]
    records: String,

    /// YAML citation settings (citationStyle, sortOrder, selectedIds, ...)
    #[arg(short, long)]
    config: Option<String>,

    /// Citation style (APA, MLA, Chicago)
    #[arg(short, long)]
    style: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bibliography for the selected sources
    Bibliography {
        #[command(flatten)]
        source: SourceOpts,

        /// Sort order (alphabetical, chronological, reverse-chronological, citation-count)
        #[arg(long)]
        sort: Option<String>,

        /// Restrict to this source id (repeatable)
        #[arg(long = "select")]
        select: Vec<String>,
    },

    /// Print the inline citation for one source
    Inline {
        #[command(flatten)]
        source: SourceOpts,

        /// Id of the source being cited
        #[arg(long)]
        id: String,
    },

    /// Print the selected sources as CSV
    Export {
        #[command(flatten)]
        source: SourceOpts,

        /// Sort order (alphabetical, chronological, reverse-chronological, citation-count)
        #[arg(long)]
        sort: Option<String>,

        /// Restrict to this source id (repeatable)
        #[arg(long = "select")]
        select: Vec<String>,
    },
}

impl From<SourceOpts> for commands::SourceArgs {
    fn from(opts: SourceOpts) -> Self {
        commands::SourceArgs {
            records: opts.records,
            config: opts.config,
            style: opts.style,
            sort: None,
            select: Vec::new(),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only citation text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospitium=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bibliography {
            source,
            sort,
            select,
        } => commands::bibliography::execute(commands::SourceArgs {
            sort,
            select,
            ..source.into()
        }),
        Commands::Inline { source, id } => commands::inline::execute(source.into(), &id),
        Commands::Export {
            source,
            sort,
            select,
        } => commands::export::execute(commands::SourceArgs {
            sort,
            select,
            ..source.into()
        }),
    }
}
