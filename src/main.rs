use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use adder::{Config, Error, get_result, script_paths};
use clap::{Parser, Subcommand};
use tracing::{Level, error, info};

/// adder runs scripts written in a small, indentation-based language that
/// looks like Python.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log interpreter progress to standard error.
    #[arg(short, long, global = true)]
    debug: bool,

    /// Number of columns a tab advances indentation to.
    #[arg(long, global = true, default_value_t = adder::config::DEFAULT_TAB_SIZE)]
    tab_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a script file, or the code given with `-e`.
    Run {
        /// The script to execute.
        #[arg(required_unless_present = "code")]
        file: Option<PathBuf>,

        /// Execute this code instead of a file.
        #[arg(short = 'e', long = "eval", conflicts_with = "file")]
        code: Option<String>,
    },
    /// Print the tokens of a script, one per line.
    Tokens {
        /// The script to tokenize.
        file: PathBuf,
    },
    /// Print the syntax tree of a script.
    Ast {
        /// The script to parse.
        file: PathBuf,
    },
    /// Run every `*.py` script below a directory and check its result
    /// variable.
    Test {
        /// Directory holding the scripts.
        dir: Option<PathBuf>,

        /// Variable that must be truthy when a script finishes.
        #[arg(long)]
        result_name: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = Config::default().with_tab_size(args.tab_size)
                                  .with_debug(args.debug);

    let level = if config.debug { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    match run(args.command, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(command: Command, config: Config) -> Result<ExitCode, Error> {
    match command {
        Command::Run { file, code } => {
            let source = match (code, file) {
                (Some(code), _) => code,
                (None, Some(file)) => read_script(&file)?,
                (None, None) => return Ok(ExitCode::FAILURE),
            };
            adder::execute(&source, &config)?;
        },
        Command::Tokens { file } => {
            for token in adder::tokenize(&read_script(&file)?, &config)? {
                println!("{token}");
            }
        },
        Command::Ast { file } => {
            let program = adder::parse(&read_script(&file)?, &config)?;
            println!("{program:#?}");
        },
        Command::Test { dir, result_name } => {
            let mut config = config;
            if let Some(dir) = dir {
                config = config.with_test_dir(dir);
            }
            if let Some(name) = result_name {
                config = config.with_result_name(name);
            }
            return Ok(run_tests(&config));
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn run_tests(config: &Config) -> ExitCode {
    let scripts = script_paths(&config.test_dir);
    let mut failed = 0_usize;

    for path in &scripts {
        let outcome = read_script(path).and_then(|source| get_result(&source, config));
        match outcome {
            Ok(true) => println!("PASS {}", path.display()),
            Ok(false) => {
                failed += 1;
                println!("FAIL {}: '{}' is not truthy", path.display(), config.result_name);
            },
            Err(e) => {
                failed += 1;
                println!("FAIL {}: {e}", path.display());
            },
        }
    }

    info!(total = scripts.len(), failed, "test run finished");
    println!("{} passed, {failed} failed", scripts.len() - failed);

    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn read_script(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| {
                                error!(path = %path.display(), "cannot read script");
                                Error::Io { path:    path.display().to_string(),
                                            details: e.to_string(), }
                            })
}
