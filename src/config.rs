use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Uploads bootstrap and error page host
#[derive(Parser, Debug)]
#[command(name = "lanister")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root holding `public/uploads` (defaults to the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create public/uploads and its .gitkeep, then exit
    Bootstrap,

    /// Bootstrap, then serve the error page and theme stylesheet
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// TOML file overriding content patterns and animations
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            theme: None,
        }
    }
}

impl Cli {
    /// `serve` when no subcommand was given.
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            Some(Command::Bootstrap) => Command::Bootstrap,
            Some(Command::Serve(args)) => Command::Serve(args.clone()),
            None => Command::Serve(ServeArgs::default()),
        }
    }
}
