use std::{fs::{read_to_string, File}, path::PathBuf, process::ExitCode, rc::Rc, sync::Mutex, time::Instant};

use clap::Parser;
use cowbell::{lexer::lexer::tokenize, parser::parser::parse, render_error, type_checker::type_checker::type_check};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Tokenizes, parses and type checks a source file, logging each stage.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file
    input: PathBuf,

    /// Write the stage log to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(output: Option<&PathBuf>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(filter);

    match output {
        Some(path) => {
            let file = File::create(path)?;
            subscriber.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => subscriber.init(),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.output.as_ref()) {
        eprintln!("Failed to open log file: {err}");
        return ExitCode::FAILURE;
    }

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    let source = match read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    info!(input = %args.input.display(), "START");

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };
    let rendered_tokens = tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>().join(" ");
    info!(count = tokens.len(), elapsed = ?start.elapsed(), "tokens: {}", rendered_tokens);

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(file_name)) {
        Ok(ast) => ast,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };
    info!(statements = ast.len(), elapsed = ?parse_start.elapsed(), "AST:\n{}", ast);

    let type_check_start = Instant::now();
    let report = match type_check(&ast) {
        Ok(report) => report,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };
    for error in report.iter() {
        warn!("{}", error);
    }
    info!(errors = report.len(), elapsed = ?type_check_start.elapsed(), "type checker report: {}", report);

    info!(elapsed = ?start.elapsed(), "DONE");

    if report.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
