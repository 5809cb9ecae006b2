use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use style_guard::cli::{CheckArgs, Cli, Commands};
use style_guard::config::{ConfigLoader, FileConfigLoader, LoadResult, StyleConfig};
use style_guard::ledger::RuleCode;
use style_guard::output::{
    FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use style_guard::{
    EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND, Engine, StyleGuardError,
    class_name_from_path,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules => run_rules(),
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            debug!(kind = e.error_type(), "check aborted");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> style_guard::Result<i32> {
    let loaded = load_config(args)?;

    let reports = args
        .files
        .par_iter()
        .map(|path| check_file(path, &loaded))
        .collect::<style_guard::Result<Vec<_>>>()?;

    let output = match args.format {
        OutputFormat::Text => TextFormatter::new(cli.color.into())
            .with_info(args.info)
            .format(&reports)?,
        OutputFormat::Json => JsonFormatter.format(&reports)?,
    };
    print!("{output}");

    if reports.iter().all(FileReport::passed) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS_FOUND)
    }
}

fn load_config(args: &CheckArgs) -> style_guard::Result<LoadResult> {
    if args.no_config {
        return Ok(LoadResult {
            config: StyleConfig::recommended(),
            header_text: None,
            source: None,
        });
    }
    let loader = FileConfigLoader::new();
    match &args.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn check_file(path: &Path, loaded: &LoadResult) -> style_guard::Result<FileReport> {
    let bytes = fs::read(path).map_err(|source| StyleGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let class_name = class_name_from_path(path);
    let checks = loaded
        .config
        .build_checks(&class_name, loaded.header_text.as_deref())?;

    let mut engine = Engine::new();
    engine.set_file_name(path.display().to_string());
    engine.load_buffer(String::from_utf8_lossy(&bytes));
    for check in &checks {
        engine.run(check.as_ref());
    }
    debug!(file = %path.display(), errors = engine.errors().len(), "file checked");

    Ok(FileReport::from_engine(path, &engine))
}

fn run_rules() -> i32 {
    for rule in RuleCode::ALL {
        println!("{}  {}", rule.tag(), rule.title());
    }
    EXIT_SUCCESS
}
