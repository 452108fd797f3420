// blockimp: step-through interpreter for a block-structured imperative language

use std::io;
use std::process::ExitCode;

use clap::{builder::RangedU64ValueParser, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use blockimp::interpreter::constants::{
    DEFAULT_HEAP_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_SNAPSHOT_LIMIT, MAX_HEAP_SIZE,
};
use blockimp::syntax::programs;
use blockimp::ui::App;
use blockimp::{Interpreter, InterpreterConfig};

#[derive(Parser)]
#[command(
    name = "blockimp",
    version,
    about = "Run a bundled program and step through its execution"
)]
struct Cli {
    /// Bundled program to run
    #[arg(long, short, default_value = "counter")]
    program: String,

    /// Print output to stdout instead of opening the viewer
    #[arg(long)]
    plain: bool,

    /// Number of heap cells (1 to 1048576)
    #[arg(
        long,
        default_value_t = DEFAULT_HEAP_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HEAP_SIZE as u64)
    )]
    heap_size: usize,

    /// Maximum nesting of blocks and procedure calls
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// List bundled programs and exit
    #[arg(long)]
    list: bool,
}

/// Log to stderr when RUST_LOG is set (e.g. `RUST_LOG=blockimp=debug`)
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        for demo in programs::DEMOS {
            println!("{:<12} {}", demo.name, demo.summary);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(program) = programs::by_name(&cli.program) else {
        eprintln!("Error: unknown program '{}'", cli.program);
        eprintln!(
            "Available programs: {}",
            programs::names().collect::<Vec<_>>().join(", ")
        );
        return Ok(ExitCode::from(2));
    };

    let config = InterpreterConfig::default()
        .with_heap_size(cli.heap_size)
        .with_max_depth(cli.max_depth);

    if cli.plain {
        init_tracing();
        let mut interpreter = Interpreter::new(program, config.with_echo());
        return Ok(match interpreter.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Runtime error: {}", e);
                ExitCode::FAILURE
            }
        });
    }

    let mut interpreter = Interpreter::new(program, config.with_history(DEFAULT_SNAPSHOT_LIMIT));

    eprintln!("Executing {}...", cli.program);
    match interpreter.run() {
        Ok(()) => {
            eprintln!("Execution completed successfully.");
            eprintln!("Total snapshots: {}", interpreter.total_snapshots());
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            eprintln!("Entering viewer with partial execution history...");
        }
    }

    interpreter.rewind_to_start();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
