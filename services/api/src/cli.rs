use crate::report::{run_attribute_suggestions, run_mbti_suggestions, AttributeArgs, MbtiArgs};
use crate::server;
use career_match::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Match",
    about = "Serve and query career suggestions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print suggestions for a questionnaire without starting the server
    Suggest {
        #[command(subcommand)]
        command: SuggestCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SuggestCommand {
    /// Classify sixteen MBTI answers (or take a type directly) and rank careers
    Mbti(MbtiArgs),
    /// Rank careers against the nine-attribute questionnaire
    Attributes(AttributeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured career catalog path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Suggest {
            command: SuggestCommand::Mbti(args),
        } => run_mbti_suggestions(args),
        Command::Suggest {
            command: SuggestCommand::Attributes(args),
        } => run_attribute_suggestions(args),
    }
}
