//! Ekspresso - Command Line Interface
//!
//! Minimize a function given by its ON-set and OFF-set, typed as arguments or read from a problem file.

use clap::{Parser, ValueEnum};
use ekspresso::{
    alternatives, parse_minterms, store, EkspressoError, Expression, Method, Notation, Timed,
};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Fewest terms, exponential in the worst case (default)
    Systematic,
    /// Greedy selection of implicants, faster but possibly larger
    Heuristic,
}

impl From<MethodArg> for Method {
    fn from(val: MethodArg) -> Self {
        match val {
            MethodArg::Systematic => Method::Systematic,
            MethodArg::Heuristic => Method::Heuristic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NotationArg {
    /// x2`x0 + x1 (default)
    Canonical,
    /// x̄2x0 + x1, with a combining bar
    Mathematical,
    /// (¬x2∧x0) ∨ (x1)
    Logical,
    /// (~x2∧x0) ∨ (x1)
    AltLogical,
    /// !x2&&x0 || x1
    Bool,
    /// !x2&x0 | x1
    Bitwise,
}

impl From<NotationArg> for Notation {
    fn from(val: NotationArg) -> Self {
        match val {
            NotationArg::Canonical => Notation::Canonical,
            NotationArg::Mathematical => Notation::Mathematical,
            NotationArg::Logical => Notation::Logical,
            NotationArg::AltLogical => Notation::AltLogical,
            NotationArg::Bool => Notation::ProgrammingBool,
            NotationArg::Bitwise => Notation::ProgrammingBitwise,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ekspresso")]
#[command(
    about = "Two-level minimization of incompletely specified Boolean functions",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Minterms where the function is true, e.g. "0, 1, 3"
    #[arg(long, value_name = "LIST", requires = "off", conflicts_with = "file")]
    on: Option<String>,

    /// Minterms where the function is false
    #[arg(long, value_name = "LIST", requires = "on", conflicts_with = "file")]
    off: Option<String>,

    /// Problem file: the ON-set on the first line, the OFF-set on the second
    #[arg(short = 'f', long, value_name = "FILE", required_unless_present = "on")]
    file: Option<PathBuf>,

    /// Minimization method
    #[arg(short = 'm', long, value_enum, default_value = "systematic")]
    method: MethodArg,

    /// Display style of the result
    #[arg(short = 'n', long, value_enum, default_value = "canonical")]
    notation: NotationArg,

    /// Print all minimal expressions found (systematic method only)
    #[arg(short = 'a', long)]
    all: bool,

    /// Also write the result to this file
    #[arg(short = 's', long, value_name = "FILE")]
    save: Option<PathBuf>,
}

fn solve(args: &Args) -> Result<Timed<Vec<Expression>>, EkspressoError> {
    let (on, off) = match (&args.file, &args.on, &args.off) {
        (Some(path), _, _) => store::read_problem(path)?,
        (None, Some(on), Some(off)) => (parse_minterms(on)?, parse_minterms(off)?),
        _ => {
            return Err(EkspressoError::InvalidInput(
                "missing ON-set or OFF-set".to_string(),
            ))
        }
    };

    if args.all {
        return alternatives(&on, &off);
    }
    let result = Method::from(args.method).run(&on, &off)?;
    Ok(result.map(|expr| vec![expr]))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match solve(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(if e.is_internal() { 2 } else { 1 });
        }
    };

    let notation = Notation::from(args.notation);
    let lines: Vec<String> = result
        .value
        .iter()
        .map(|expr| expr.notated(notation).to_string())
        .collect();
    for line in &lines {
        println!("{}", line);
    }
    eprintln!("Elapsed: {:?}", result.elapsed);

    if let Some(ref path) = args.save {
        if let Err(e) = store::save_lines(path, &lines) {
            eprintln!("Error writing output file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
