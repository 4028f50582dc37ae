#[macro_use]
extern crate log;

use std::{env::set_var, error::Error, process::exit};
use structopt::StructOpt;

mod opt;
mod parser;
mod reader;
mod records;
mod utils;
mod verify;

use crate::opt::{Command, LogLevel, Opt};
use crate::parser::{full_compile, CompileConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    match &opt.log_level {
        Some(log_level) => match log_level {
            LogLevel::DEBUG => set_var("RUST_LOG", "debug"),
            LogLevel::INFO => set_var("RUST_LOG", "info"),
            LogLevel::WARN => set_var("RUST_LOG", "warn"),
            LogLevel::ERROR => set_var("RUST_LOG", "error"),
        },
        None if opt.verbose => set_var("RUST_LOG", "info"),
        None => set_var("RUST_LOG", "warn"),
    };

    pretty_env_logger::init_timed();
    debug!("{:?}", opt);

    let config = CompileConfig {
        verbose: opt.verbose,
    };

    match opt.cmd {
        Command::Truth { expr } => {
            for entry in verify::generate_truth_table(&expr, &config)? {
                println!("{}", entry);
            }
        }
        Command::Diff { expr1, expr2 } => {
            if let Some(divergence) = verify::find_divergence(&expr1, &expr2, &config)? {
                println!("{}", divergence);
                exit(2);
            }
        }
        Command::Compile { expr } => {
            let (vnames, predicate) = full_compile(&expr, &CompileConfig::verbose())?;
            println!("variables: {:?}", vnames);
            println!("{}", predicate.ast());
        }
        Command::Check { input, comment } => {
            let pairs = reader::ExprPairReader::new(reader::read_with_gz(&input)?)
                .with_comment(comment)
                .finish()?;
            info!("checking {} pairs from {}", pairs.len(), input.display());

            let mut diverged = false;
            for pair in pairs {
                match verify::find_divergence(&pair.lhs, &pair.rhs, &config)? {
                    Some(divergence) => {
                        diverged = true;
                        println!("line {}: {}", pair.line, divergence);
                    }
                    None => println!("line {}: equivalent", pair.line),
                }
            }

            if diverged {
                exit(2);
            }
        }
    }

    Ok(())
}
