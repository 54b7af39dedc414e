use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spanner-ddl-to-meta")]
#[command(version, about = "Convert a parsed Spanner DDL schema into enriched codegen metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the enriched metadata document from a parsed-DDL AST file
    Convert {
        /// Input AST document (JSON)
        ast_file: PathBuf,

        /// Output file; writes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Regenerate even if the output is newer than the input
        #[arg(short, long)]
        force: bool,

        /// Exit with code 2 when the output was (re)written
        #[arg(long)]
        changed: bool,
    },

    /// List table keys in dependency order
    Tables {
        /// Input AST document (JSON)
        ast_file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
