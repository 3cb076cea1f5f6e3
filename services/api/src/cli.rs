use crate::demo::{run_demo, run_plan, DemoArgs, PlanArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rail_induction::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rail Induction Planner",
    about = "Demonstrate and run the daily fleet induction planner from the command line",
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
    /// Generate induction plans without starting the service
    Induction {
        #[command(subcommand)]
        command: InductionCommand,
    },
    /// Run an end-to-end CLI demo covering intake, updates, and planning
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum InductionCommand {
    /// Evaluate a roster export into service/standby/maintenance lists
    Plan(PlanArgs),
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
        Command::Induction {
            command: InductionCommand::Plan(args),
        } => run_plan(args),
        Command::Demo(args) => run_demo(args),
    }
}
