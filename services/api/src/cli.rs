use clap::{Args, Parser, Subcommand};
use workify::error::AppError;

use crate::demo::{run_demo, run_jobs_filter, DemoArgs, JobsFilterArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Workify",
    about = "Run the Workify job board service or exercise it from the command line",
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
    /// Operate on job listings without starting the server
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Run an end-to-end CLI demo over the seeded in-memory backend
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Filter the seeded listings by skills, minimum salary, and job type
    Filter(JobsFilterArgs),
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
        Command::Jobs {
            command: JobsCommand::Filter(args),
        } => run_jobs_filter(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
