use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use spmx::config::{DEFAULT_LEFT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_RIGHT_FILE};
use spmx::{
    read_matrix, run, run_interactive, Error, MatrixDump, MatrixSummary, Operation, SessionConfig,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "SPMX - Add, subtract and multiply sparse integer matrices stored as coordinate lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine two matrix files and save the result (default)
    Compute(ComputeArgs),
    /// Show dimensions and fill of a matrix file
    Info {
        /// Matrix file to inspect
        path: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// With --json, print the header and every entry instead of the summary
        #[arg(long, requires = "json")]
        entries: bool,
    },
}

#[derive(Args)]
struct ComputeArgs {
    /// Left operand matrix file
    #[arg(long, default_value = DEFAULT_LEFT_FILE)]
    left: PathBuf,

    /// Right operand matrix file
    #[arg(long, default_value = DEFAULT_RIGHT_FILE)]
    right: PathBuf,

    /// Result file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Operation: 1/add, 2/subtract or 3/multiply (prompted for if omitted)
    #[arg(long)]
    op: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Compute(args)) => handle_compute(args),
        Some(Commands::Info {
            path,
            json,
            entries,
        }) => handle_info(path, json, entries),
        None => handle_compute(ComputeArgs {
            left: DEFAULT_LEFT_FILE.into(),
            right: DEFAULT_RIGHT_FILE.into(),
            output: DEFAULT_OUTPUT_FILE.into(),
            op: None,
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn handle_compute(args: ComputeArgs) -> spmx::Result<()> {
    let config = SessionConfig::new(args.left, args.right).with_output(args.output);

    let report = match args.op {
        Some(op) => {
            let operation: Operation = op.parse()?;
            run(&config, operation)?
        }
        None => {
            let stdin = io::stdin();
            run_interactive(&config, &mut stdin.lock(), &mut io::stdout())?
        }
    };
    println!("Result saved to {}", report.output.display());
    Ok(())
}

fn handle_info(path: PathBuf, json: bool, entries: bool) -> spmx::Result<()> {
    let matrix = read_matrix(&path)?;
    if entries {
        println!("{}", MatrixDump::of(&matrix).to_json()?);
        return Ok(());
    }

    let summary = MatrixSummary::of(&matrix);
    if json {
        println!("{}", summary.to_json()?);
    } else {
        println!("Matrix: {}", path.display());
        println!("{summary}");
    }
    Ok(())
}

fn report(err: &Error) {
    match err {
        Error::InvalidOperation(_) => println!("Invalid operation"),
        _ => println!("Error: {err}"),
    }
}
