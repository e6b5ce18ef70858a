use clap::{Parser, Subcommand};
use venvctl::{
    commands::{
        activate, config::{self, ConfigAction}, deactivate, dir::{self, DirAction}, list, new,
        remove, run,
    },
    errors::CliError,
    GlobalOpts,
};
use venvctl_logger as logger;

#[derive(Parser)]
#[command(name = "venvctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Python virtualenv manager for projects",
    long_about = "venvctl associates Python virtual environments with projects and injects them into build commands."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Associate a virtualenv with the current project
    Activate {
        /// Virtualenv path; omit to pick from the discovered list
        path: Option<String>,
    },
    /// Clear the current project's virtualenv association
    Deactivate,
    /// Create a virtualenv and activate it immediately
    New {
        /// Target path for the new virtualenv; omit to be prompted
        path: Option<String>,
        /// Interpreter to pass to the creation tool via -p
        #[arg(short, long)]
        python: Option<String>,
    },
    /// Delete a virtualenv from disk
    Remove {
        /// Virtualenv path; omit to pick from the discovered list
        path: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Manage the virtualenv search directories
    Dir {
        #[command(subcommand)]
        action: DirAction,
    },
    /// Show the virtualenvs visible to this project
    List,
    /// Run a command with the active virtualenv's environment
    Run(run::RunCommand),
    /// Inspect or edit the global settings
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Activate { path } => activate::handle_activate(path),
        Commands::Deactivate => deactivate::handle_deactivate(),
        Commands::New { path, python } => new::handle_new(path, python),
        Commands::Remove { path, yes } => remove::handle_remove(path, yes),
        Commands::Dir { action } => dir::handle_dir(action),
        Commands::List => list::handle_list(),
        Commands::Config { action } => config::handle_config(action),
        Commands::Run(cmd) => match run::handle_run(&cmd) {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                report(&e);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = outcome {
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &CliError) {
    logger::error(&e.to_string());
    if logger::get_verbosity() >= 1 {
        logger::show_log_path();
    }
}
