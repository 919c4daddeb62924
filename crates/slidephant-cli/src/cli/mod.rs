//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "slidephant")]
#[command(version = "0.1")]
#[command(about = "Terminal slideshow presenter")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    present: PresentArgs,
}

/// Arguments for the default (present) invocation.
#[derive(clap::Args, Debug, Clone, Default)]
struct PresentArgs {
    /// Path to the markdown deck (slides separated by `---`)
    #[arg(value_name = "DECK")]
    deck: Option<PathBuf>,

    /// Starting fragment, e.g. `#2/5` or `2` (invalid values start at slide 1)
    #[arg(value_name = "FRAGMENT")]
    fragment: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Present a deck (default when a deck path is given)
    Present {
        /// Path to the markdown deck (slides separated by `---`)
        #[arg(value_name = "DECK")]
        deck: PathBuf,

        /// Starting fragment, e.g. `#2/5` or `2`
        #[arg(value_name = "FRAGMENT")]
        fragment: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set one theme color, preserving the rest of the file
    Theme {
        /// Theme field: heading, code, accent, or footer
        #[arg(value_name = "FIELD")]
        field: String,

        /// Color name or hex value, e.g. `magenta` or `#ffcc00`
        #[arg(value_name = "COLOR")]
        color: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to presenting the positional deck
    let Some(command) = cli.command else {
        let Some(deck) = cli.present.deck else {
            anyhow::bail!("no deck given; usage: slidephant <DECK> [FRAGMENT]");
        };
        return commands::present::run(&deck, cli.present.fragment.as_deref());
    };

    match command {
        Commands::Present { deck, fragment } => commands::present::run(&deck, fragment.as_deref()),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Theme { field, color } => commands::config::theme(&field, &color),
        },
    }
}
