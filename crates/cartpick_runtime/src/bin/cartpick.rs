//! Cartpick CLI entry point.

use cartpick_foundation::Error;
use cartpick_runtime::{Session, Snapshot, SnapshotCatalog, TerminalResume, read_shopping_list};
use cartpick_strategy::{EngineConfig, ImmediateResume, ManualResume, StrategyEngine};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    catalog: Option<PathBuf>,
    list: Option<PathBuf>,
    lines: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e
                .downcast_ref::<Error>()
                .and_then(|err| err.context.as_ref())
            {
                eprintln!("{context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "-c" | "--catalog" => {
                i += 1;
                let path = args.get(i).ok_or("--catalog requires a file")?;
                config.catalog = Some(PathBuf::from(path));
            }
            "-l" | "--list" => {
                i += 1;
                let path = args.get(i).ok_or("--list requires a file")?;
                config.list = Some(PathBuf::from(path));
            }
            "--max-depth" => {
                i += 1;
                let value = args.get(i).ok_or("--max-depth requires a value")?;
                config.max_depth = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {value}"))?,
                );
            }
            "--" => {
                config.lines.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            line => config.lines.push(line.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

/// Lines from the list file, then those given as arguments.
fn query_lines(
    list: Option<&Path>,
    extra: Vec<String>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut lines = match list {
        Some(path) => read_shopping_list(path)?,
        None => Vec::new(),
    };
    lines.extend(extra);
    if lines.is_empty() {
        return Err("no query lines given; pass --list FILE or lines as arguments".into());
    }
    Ok(lines)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("cartpick {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let catalog_path = config.catalog.ok_or("--catalog is required (see --help)")?;
    let snapshot = Snapshot::load_from_file(&catalog_path)?;

    let lines = query_lines(config.list.as_deref(), config.lines)?;

    let mut engine_config = EngineConfig::default().with_log_listings(config.verbose);
    if let Some(depth) = config.max_depth {
        engine_config = engine_config.with_max_depth(depth);
    }

    let catalog = SnapshotCatalog::new(snapshot);
    if let Some(store) = catalog.store() {
        println!("\x1b[1;36m=== {store} ===\x1b[0m");
    }

    let mut resume: Box<dyn ManualResume> = if config.batch_mode {
        Box::new(ImmediateResume)
    } else {
        Box::new(TerminalResume::new()?)
    };

    let mut session = Session::new(StrategyEngine::new(engine_config), catalog);
    session.run(resume.as_mut(), &lines)?;

    println!("{}", session.basket());
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCartpick\x1b[0m - Pick products from catalog searches

\x1b[1mUSAGE:\x1b[0m
    cartpick --catalog FILE [OPTIONS] [LINES...]

\x1b[1mARGUMENTS:\x1b[0m
    [LINES...]    Query lines to run after those from --list

\x1b[1mOPTIONS:\x1b[0m
    -c, --catalog FILE  Recorded catalog snapshot (JSON)
    -l, --list FILE     Shopping list, one query line per line
    -b, --batch         Skip manual picks instead of waiting for Enter
    -v, --verbose       Debug logging, including every listing
    --max-depth N       Limit strategy nesting (default 8)
    -h, --help          Print help information
    -V, --version       Print version information

\x1b[1mQUERY LINES:\x1b[0m
    QUERY[,QUERY...][|MAIN[,LIST]]

    fst   first match          all   every match
    min   cheapest match       max   most expensive match
    ask   pick by hand (default)
    fbc   first alternative that selects anything, using LIST
    mlt   cheapest across all alternatives, using LIST

\x1b[1mEXAMPLES:\x1b[0m
    cartpick -c shop.json \"green tea|min\"
    cartpick -c shop.json -l weekly.txt
    cartpick -c shop.json -b \"espresso machine,coffee maker|fbc,fst\"

Set RUST_LOG to override the log filter."
    );
}
