//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Extract HTML documentation from assembler listings
#[derive(Parser, Debug)]
#[command(name = "asmdoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Directory holding a local asmdoc.toml (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the HTML documentation page
    Generate {
        /// Assembler listing file
        #[arg(value_hint = ValueHint::FilePath)]
        listing: PathBuf,

        /// Exported-labels file (declaration order)
        #[arg(value_hint = ValueHint::FilePath)]
        exports: PathBuf,

        /// Output file (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title (default from config)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print the namespace hierarchy as a tree
    Tree {
        /// Assembler listing file
        listing: PathBuf,
        /// Exported-labels file
        exports: PathBuf,
    },

    /// List exported labels with kind and defining line
    Labels {
        /// Assembler listing file
        listing: PathBuf,
        /// Exported-labels file
        exports: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
