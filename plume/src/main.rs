use clap::{Parser, Subcommand};
use miette::{Diagnostic, MietteHandlerOpts, Result};
use plume_ast::gallery::{self, Program};
use plume_ast::{PrettyPrinter, RenderError, DEFAULT_INDENT_WIDTH};
use plume_interpreter::{Console, Interpreter, RuntimeError, MAX_CALL_DEPTH};
use std::process;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "plume",
    version,
    about = "Run and pretty-print hand-built Plume programs",
    long_about = "Plume is a tiny integer language with first-class functions. \
                  Programs are built as syntax trees; this tool lists, renders and runs them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available programs
    List,

    /// Pretty-print a program as source text
    Print {
        /// Name of the program (see `plume list`)
        #[arg(value_name = "PROGRAM")]
        program: String,

        /// Spaces per indentation level
        #[arg(short, long, default_value_t = DEFAULT_INDENT_WIDTH)]
        indent: usize,
    },

    /// Run a program; `read` consumes stdin lines and `print` writes to stdout
    Run {
        /// Name of the program (see `plume list`)
        #[arg(value_name = "PROGRAM")]
        program: String,

        /// Maximum number of nested function calls
        #[arg(long, default_value_t = MAX_CALL_DEPTH)]
        max_depth: usize,
    },
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("Unknown program: {name}")]
    #[diagnostic(code(plume::cli::unknown_program), help("Available programs: {available}"))]
    UnknownProgram { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

fn main() {
    setup_miette_handler();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::List) => {
            handle_list_command();
            Ok(())
        }
        Some(Commands::Print { program, indent }) => handle_print_command(&program, indent),
        Some(Commands::Run { program, max_depth }) => handle_run_command(&program, max_depth),
        None => {
            // No subcommand provided, show help
            Cli::parse_from(["plume", "--help"]);
            Ok(())
        }
    };

    if let Err(report) = result {
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

/// Configure miette's graphical report handler
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .tab_width(4)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

/// Log to stderr, filtered by `RUST_LOG`. Nothing is installed when it is unset.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn find_program(name: &str) -> Result<&'static Program, CliError> {
    gallery::find(name).ok_or_else(|| CliError::UnknownProgram {
        name: name.to_string(),
        available: gallery::PROGRAMS
            .iter()
            .map(|program| program.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn handle_list_command() {
    let width = gallery::PROGRAMS
        .iter()
        .map(|program| program.name.len())
        .max()
        .unwrap_or(0);

    for program in gallery::PROGRAMS {
        println!("{:width$}  {}", program.name, program.description, width = width);
    }
}

fn render_program(program: &Program, indent: usize) -> Result<Vec<String>, CliError> {
    let mut printer = PrettyPrinter::with_indent_width(indent);
    let mut lines = Vec::new();
    for statement in program.statements() {
        lines.extend(printer.render(&statement)?);
    }
    Ok(lines)
}

fn run_with<C: Console>(
    program: &Program,
    interpreter: &mut Interpreter<C>,
) -> Result<(), CliError> {
    tracing::debug!(program = program.name, "running program");
    interpreter.run(&program.statements())?;
    Ok(())
}

fn handle_print_command(name: &str, indent: usize) -> Result<()> {
    let program = find_program(name)?;
    for line in render_program(program, indent)? {
        println!("{}", line);
    }
    Ok(())
}

fn handle_run_command(name: &str, max_depth: usize) -> Result<()> {
    let program = find_program(name)?;
    let mut interpreter = Interpreter::stdio().with_max_depth(max_depth);
    run_with(program, &mut interpreter)?;
    Ok(())
}
