use super::render::{print_config, print_history, print_messages};
use super::repl;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use opcalc::calculator::Calculator;
use opcalc::commands::{self, config::ConfigAction};
use opcalc::config::CalcConfig;
use opcalc::error::{CalcError, Result};
use opcalc::input::parse_calculation;
use opcalc::store::fs::CsvStore;
use std::path::{Path, PathBuf};

struct AppContext {
    calc: Calculator<CsvStore>,
    config: CalcConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    log::debug!("Using data directory {}", data_dir.display());

    // Config does not need the history loaded
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &data_dir)?;

    match cli.command {
        None | Some(Commands::Repl) => {
            let stdin = std::io::stdin();
            repl::run(&mut ctx.calc, &ctx.config.prompt, stdin.lock())
        }
        Some(Commands::Eval { operation, a, b }) => {
            handle_eval(&mut ctx, &operation.to_lowercase(), &a, &b)
        }
        Some(Commands::History { last }) => handle_history(&ctx, last),
        Some(Commands::Undo) => handle_undo(&mut ctx),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    ProjectDirs::from("com", "opcalc", "opcalc")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CalcError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli, data_dir: &Path) -> Result<AppContext> {
    let config = CalcConfig::load(data_dir)?;
    let history_path = cli
        .history_file
        .clone()
        .unwrap_or_else(|| config.history_path(data_dir));
    log::debug!("Using history file {}", history_path.display());

    let calc = Calculator::new(CsvStore::new(history_path))?;
    Ok(AppContext { calc, config })
}

fn handle_eval(ctx: &mut AppContext, operation: &str, a: &str, b: &str) -> Result<()> {
    let calculation = parse_calculation(operation, a, b)?;
    let result = commands::evaluate::run(&mut ctx.calc, &calculation)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext, last: Option<usize>) -> Result<()> {
    let result = commands::history::run(&ctx.calc, last)?;
    print_history(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_undo(ctx: &mut AppContext) -> Result<()> {
    let result = commands::undo::run(&mut ctx.calc)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = commands::clear::run(&mut ctx.calc)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
