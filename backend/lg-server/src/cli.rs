use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lg-server", version, about = "Lingora authentication backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Generate a JWT signing secret and store it in an env file
    GenerateSecret {
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,
    },

    /// Grant admin rights to an existing user
    GrantAdmin {
        #[arg(long)]
        email: String,
    },
}
