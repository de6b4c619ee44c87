//! `molwt`: compute the molecular weight of a compound from its formula.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use molwt_chem::{formula_weight, table, CompoundWeight, PeriodicIndex};
use molwt_core::{MolwtError, Result};

mod config;
mod display;
mod logger;

use config::Config;

const PROMPT: &str = "Please enter a compound string: ";
const MAX_PRECISION: usize = 17;

#[derive(Parser, Debug)]
#[command(name = "molwt", version, about = "Compute the molecular weight of a chemical compound")]
struct Args {
    /// Compound formula, e.g. H2O; prompts on stdin when omitted
    formula: Option<String>,

    /// Periodic table CSV (header row, then one element per row)
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Decimal places in the printed weight
    #[arg(long, value_name = "N")]
    precision: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List the elements in the table and exit
    #[arg(long)]
    elements: bool,

    /// Log table diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Effective settings after flags override the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    table_path: Option<PathBuf>,
    precision: usize,
    json: bool,
}

impl Settings {
    fn merge(args: &Args, config: Config) -> Self {
        Settings {
            table_path: args.table.clone().or(config.table_path),
            precision: args.precision.unwrap_or(config.precision),
            json: args.json || config.json,
        }
    }
}

fn load_index(settings: &Settings) -> Result<PeriodicIndex> {
    match &settings.table_path {
        Some(path) => molwt_chem::read_periodic_table(path),
        None => table::builtin(),
    }
}

fn report(weight: &CompoundWeight, settings: &Settings, out: &mut impl Write) -> Result<()> {
    if settings.json {
        writeln!(out, "{}", display::render_json(weight)?)?;
    } else {
        write!(out, "{}", display::render_text(weight, settings.precision))?;
        writeln!(out, "Bye!")?;
    }
    Ok(())
}

/// Prompt until a formula evaluates, or input ends.
fn prompt_loop(
    index: &PeriodicIndex,
    settings: &Settings,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        match formula_weight(&line?, index) {
            Ok(weight) => return report(&weight, settings, out),
            Err(e) if !e.is_recoverable() => return Err(e),
            Err(MolwtError::UnknownElement(sym)) => {
                writeln!(out, "Unknown element '{sym}'. Please try again.")?;
            }
            Err(e) => {
                log::debug!("{e}");
                writeln!(out, "Invalid chemical compound. Please try again.")?;
            }
        }
    }
}

fn list_elements(index: &PeriodicIndex, out: &mut impl Write) -> Result<()> {
    for symbol in index.symbols() {
        let record = index.get(symbol)?;
        writeln!(out, "{:<3} {:<14} {}", symbol, record.name(), record.atomic_mass())?;
    }
    Ok(())
}

fn run(args: &Args, settings: &Settings) -> Result<()> {
    if settings.precision > MAX_PRECISION {
        return Err(MolwtError::InvalidInput(format!(
            "precision {} exceeds {MAX_PRECISION} decimal places",
            settings.precision
        )));
    }
    let index = load_index(settings)?;
    log::info!("periodic index holds {} elements", index.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.elements {
        return list_elements(&index, &mut out);
    }
    match &args.formula {
        Some(formula) => report(&formula_weight(formula, &index)?, settings, &mut out),
        None => prompt_loop(&index, settings, io::stdin().lock(), &mut out),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = logger::init(level) {
        eprintln!("could not install logger: {e}");
    }

    let settings = Settings::merge(&args, Config::load(args.config.as_deref()));
    match run(&args, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
