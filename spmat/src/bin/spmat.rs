use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use spmat::{load, Operation, Session, WorkspaceConfig};
use tracing::Level;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "spmat - Add, subtract and multiply sparse integer matrices stored as coordinate text"
)]
struct Cli {
    /// JSON workspace configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory scanned for matrix*.txt sources
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Directory result files are written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List matrix sources in the input directory
    List {
        /// Mark sources usable as operands of this operation
        #[arg(long)]
        operation: Option<Operation>,
    },
    /// Apply an operation to two sources and persist the result
    Apply {
        /// addition, subtraction or multiplication
        operation: Operation,

        /// Left operand: file name or 1-based position from `list`
        left: String,

        /// Right operand: file name or 1-based position from `list`
        right: String,

        /// Print the result without writing result_<operation>.txt
        #[arg(long)]
        no_persist: bool,

        /// Print a JSON summary instead of the canonical matrix
        #[arg(long)]
        json: bool,
    },
    /// Parse a matrix file and print its canonical form
    Show {
        /// Path to a coordinate-format matrix file
        file: PathBuf,

        /// Only print the entries of this row
        #[arg(long)]
        row: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = Session::new(workspace_config(&cli)?);

    match cli.command {
        Commands::List { operation } => handle_list(&session, operation)?,
        Commands::Apply {
            operation,
            left,
            right,
            no_persist,
            json,
        } => handle_apply(&session, operation, &left, &right, no_persist, json)?,
        Commands::Show { file, row } => handle_show(&file, row)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // RUST_LOG directives still apply on top of the verbosity level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn workspace_config(cli: &Cli) -> anyhow::Result<WorkspaceConfig> {
    let mut config = match &cli.config {
        Some(path) => WorkspaceConfig::from_json_file(path)?,
        None => WorkspaceConfig::default(),
    };
    if let Some(input_dir) = &cli.input_dir {
        config = config.with_input_dir(input_dir);
    }
    if let Some(output_dir) = &cli.output_dir {
        config = config.with_output_dir(output_dir);
    }
    Ok(config)
}

fn handle_list(session: &Session, operation: Option<Operation>) -> anyhow::Result<()> {
    let input_dir = session.config().input_dir.display().to_string();

    let Some(operation) = operation else {
        let sources = session.sources()?;
        if sources.is_empty() {
            println!("No matrix files found in {input_dir}");
        }
        for (i, source) in sources.iter().enumerate() {
            println!("{}. {}", i + 1, source.name);
        }
        return Ok(());
    };

    let recommendations = session.recommendations(operation)?;
    if recommendations.is_empty() {
        println!("No matrix files found in {input_dir}");
        return Ok(());
    }

    println!("Matrix files for {operation}:");
    for (i, recommendation) in recommendations.iter().enumerate() {
        let marker = if recommendation.recommended {
            " (recommended)"
        } else {
            ""
        };
        println!("{}. {}{marker}", i + 1, recommendation.source.name);
    }
    Ok(())
}

fn handle_apply(
    session: &Session,
    operation: Operation,
    left: &str,
    right: &str,
    no_persist: bool,
    json: bool,
) -> anyhow::Result<()> {
    let report = if no_persist {
        session.evaluate(operation, left, right)?
    } else {
        session.run(operation, left, right)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} result:", capitalize(operation.name()));
    println!("{}", report.result);
    if let Some(destination) = &report.destination {
        println!("Result written to {}", destination.display());
    }
    Ok(())
}

fn handle_show(file: &Path, row: Option<usize>) -> anyhow::Result<()> {
    let matrix = load(file)?;

    match row {
        Some(row) => {
            anyhow::ensure!(
                row < matrix.nrows(),
                "row {row} is outside a matrix with {} rows",
                matrix.nrows()
            );
            for (col, value) in matrix.row(row) {
                println!("({row}, {col}, {value})");
            }
        }
        None => {
            println!("{matrix}");
            let (nrows, ncols) = matrix.dimensions();
            eprintln!(
                "{}: {nrows} x {ncols}, {} non-zero",
                file.display(),
                matrix.nnz()
            );
        }
    }
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
