use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encdeck")]
#[command(author, version, about)]
#[command(long_about = "The Encode local-first AI workshop deck.\n\n\
    Examples:\n  \
    encdeck                      Present fullscreen\n  \
    encdeck --windowed           Present in a window\n  \
    encdeck --slide 19           Start on slide 19\n  \
    encdeck export               Render every slide to PNG\n  \
    encdeck notes                Print presenter notes")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long)]
    pub slide: Option<usize>,

    /// Start in the overview grid
    #[arg(long)]
    pub overview: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export every slide as a PNG image
    Export {
        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Print presenter notes for the whole deck
    Notes,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.start_mode, documents.pages_dir)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Export {
                output_dir,
                width,
                height,
            }) => crate::commands::export::run(output_dir, width, height),
            Some(Commands::Notes) => {
                crate::commands::notes::run();
                Ok(())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                use colored::Colorize;
                println!("{} {}", "encdeck".bold(), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => crate::app::run(self.windowed, self.slide, self.overview),
        }
    }
}
