use crate::report::{run_questions, run_score, QuestionsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use growth_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Growth Type Quiz",
    about = "Serve the growth-type quiz API or score answers from the command line",
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
    /// Score a set of answers and print the resolved growth type
    Score(ScoreArgs),
    /// Print the question bank
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Questions(args) => run_questions(args),
    }
}
