use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ijhttp_runner::{
    config::{load_config, LoadedConfig, RunnerConfig},
    dispatcher::Dispatcher,
    interactive::{InquireUi, DEFAULT_ACTIVE_FILE_VARIABLE},
    logging::init_tracing,
    terminal::{LauncherTerminal, ShellTerminal, TerminalFactory},
};

#[derive(Parser, Debug)]
#[command(
    name = "ijhttp-runner",
    version,
    about = "Run .http request files with the ijhttp client",
    disable_help_subcommand = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Request file to run (defaults to the editor's active file).
    /// A file named `envs` must be written as `./envs`.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Environment to use instead of prompting
    #[arg(short, long, value_name = "NAME")]
    env: Option<String>,

    /// Print the ijhttp command line instead of running it
    #[arg(long)]
    print: bool,

    /// Client executable (defaults to ijhttp)
    #[arg(long, value_name = "BIN")]
    program: Option<String>,

    /// Directory or file containing ijhttp-runner.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Terminal emulator template, e.g. "kitty --directory {cwd} sh -c {command}"
    #[arg(long, value_name = "TEMPLATE")]
    launcher: Option<String>,

    /// Log discovery and dispatch details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the environments defined next to a request file
    Envs {
        /// Request file (defaults to the editor's active file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_target = match &cli.config {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let loaded = load_config(&config_target).context("loading configuration")?;
    let config = loaded.map(LoadedConfig::into_config).unwrap_or_default();

    let dispatcher = build_dispatcher(&cli, &config);
    let mut ui = InquireUi::new(active_file_variables(&config));

    if let Some(Commands::Envs { file }) = &cli.command {
        return list_environments(&dispatcher, file.as_deref(), &mut ui);
    }

    let explicit = cli.file.as_deref();
    let outcome = if cli.print {
        dispatcher.prepare(explicit, &mut ui)?.map(|plan| {
            println!("{}", plan.command);
        })
    } else {
        let mut terminals = build_terminals(&cli, &config);
        dispatcher
            .dispatch(explicit, &mut ui, terminals.as_mut())?
            .map(|_| ())
    };

    Ok(match outcome {
        Some(()) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    })
}

fn list_environments(dispatcher: &Dispatcher, file: Option<&Path>, ui: &mut InquireUi) -> Result<ExitCode> {
    let Some(discovery) = dispatcher.discover(file, ui) else {
        return Ok(ExitCode::FAILURE);
    };

    if discovery.environments.is_empty() {
        eprintln!(
            "{}",
            format!(
                "No environments found in {}",
                discovery.target.directory.display()
            )
            .dimmed()
        );
    }
    for name in discovery.environments.iter() {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}

fn build_dispatcher(cli: &Cli, config: &RunnerConfig) -> Dispatcher {
    let mut dispatcher = Dispatcher::new().with_environment(cli.env.clone());
    if let Some(program) = cli.program.as_ref().or(config.program.as_ref()) {
        dispatcher = dispatcher.with_program(program.as_str());
    }
    if let Some(name) = &config.terminal_name {
        dispatcher = dispatcher.with_terminal_name(name.as_str());
    }
    dispatcher
}

fn build_terminals(cli: &Cli, config: &RunnerConfig) -> Box<dyn TerminalFactory> {
    match cli.launcher.as_ref().or(config.launcher.as_ref()) {
        Some(template) => Box::new(LauncherTerminal::new(template.as_str())),
        None => Box::new(ShellTerminal::new(config.shell.clone())),
    }
}

fn active_file_variables(config: &RunnerConfig) -> Vec<String> {
    config
        .active_file_variables
        .clone()
        .filter(|variables| !variables.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_ACTIVE_FILE_VARIABLE.to_string()])
}
