use crate::demo::{
    run_demo, run_export, run_questions, run_score, DemoArgs, ExportArgs, QuestionsArgs,
    ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use spiritual_health::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Spiritual Health Assessment",
    about = "Run the spiritual health self-assessment service or score answers from the command line",
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
    /// List the questions of one question set
    Questions(QuestionsArgs),
    /// Score an answers file and print the report
    Score(ScoreArgs),
    /// Walk through scoring and the admin view with sample respondents
    Demo(DemoArgs),
    /// Export the sample responses as CSV or JSON
    Export(ExportArgs),
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
        Command::Questions(args) => run_questions(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
        Command::Export(args) => run_export(args),
    }
}
