use std::path::PathBuf;
use structopt::{clap, clap::arg_enum, StructOpt};

/// Verify various properties of boolean expressions using a concise DSL.
#[derive(Debug, StructOpt)]
#[structopt(name = "veribool")]
#[structopt(long_version(option_env!("LONG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))))]
#[structopt(setting(clap::AppSettings::ColoredHelp))]
pub struct Opt {
    #[structopt(long = "log-level", possible_values(&LogLevel::variants()), case_insensitive = true)]
    pub log_level: Option<LogLevel>,
    /// Log each compiled expression
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Generate the truth table of an expression
    Truth { expr: String },
    /// Find inputs where two expressions differ
    Diff { expr1: String, expr2: String },
    /// Compile an expression and show its variables and rendered form
    Compile { expr: String },
    /// Diff every `lhs = rhs` line of a file (optionally gzipped)
    Check {
        #[structopt(long = "input", short = "i")]
        input: PathBuf,
        #[structopt(long = "comment", default_value = "#")]
        comment: char,
    },
}

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        DEBUG,
        INFO,
        WARN,
        ERROR,
    }
}
