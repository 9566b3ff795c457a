use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use yardcalc::Config;
use yardcalc::calculator::{
    CalcResult, Calculator, PopStrategy, copy_to_clipboard, suggest_spacing,
};

/// Evaluate space-delimited infix expressions such as `3 + 4 * ( 2 - 1 )`.
#[derive(Debug, Parser)]
#[command(name = "yardcalc", version, about)]
struct Cli {
    /// Expression words, joined with single spaces. Reads one expression per
    /// line from stdin when omitted. Negative numbers are accepted as words;
    /// put `--` first if a word would otherwise look like a flag.
    #[arg(allow_negative_numbers = true)]
    expression: Vec<String>,

    /// Reject unrecognized tokens, unbalanced parens and unused operands.
    #[arg(long)]
    strict: bool,

    /// Group `+ - * /` left and `^` right.
    #[arg(long)]
    fix_associativity: bool,

    /// Pop every qualifying operator instead of at most one.
    #[arg(long)]
    drain: bool,

    /// Print the postfix form instead of the value.
    #[arg(long, conflicts_with = "rpn")]
    postfix: bool,

    /// The input is already in postfix order.
    #[arg(long)]
    rpn: bool,

    /// Print values without thousand separators.
    #[arg(long)]
    raw: bool,

    /// Print one JSON object per expression.
    #[arg(long, conflicts_with = "postfix")]
    json: bool,

    /// Copy the last successful result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Settings file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// The config file settings with command-line flags applied on top.
    fn settings(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        config.strict_tokens |= self.strict;
        config.associativity_fix |= self.fix_associativity;
        if self.drain {
            config.pop_strategy = PopStrategy::Drain;
        }
        if self.raw {
            config.thousands_separators = false;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs expressions through the calculator and prints the outcomes.
struct Session<W: Write> {
    calculator: Calculator,
    config: Config,
    mode: Mode,
    json: bool,
    out: W,
    last_copyable: Option<String>,
    failures: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Infix,
    Rpn,
    ShowPostfix,
}

impl<W: Write> Session<W> {
    fn run_line(&mut self, line: &str) -> Result<()> {
        debug!(line, mode = ?self.mode, "evaluating");

        if self.mode == Mode::ShowPostfix {
            return match self.calculator.to_postfix(line) {
                Ok(postfix) => writeln!(self.out, "{}", postfix).context("Failed to write output"),
                Err(err) => {
                    self.report_failure(line, &err.to_string());
                    Ok(())
                }
            };
        }

        let result = match self.mode {
            Mode::Rpn => self.calculator.evaluate_postfix(line),
            _ => self.calculator.evaluate(line),
        };

        if self.json {
            let json = serde_json::to_string(&result).context("Failed to encode result")?;
            writeln!(self.out, "{}", json).context("Failed to write output")?;
            if !result.is_success() {
                self.failures += 1;
            }
        } else {
            match &result {
                CalcResult::Success { .. } => {
                    let text = if self.config.thousands_separators {
                        result.display()
                    } else {
                        result.clipboard().unwrap_or_default()
                    };
                    writeln!(self.out, "{}", text).context("Failed to write output")?;
                }
                CalcResult::Error { message, .. } => self.report_failure(line, message),
            }
        }

        if let Some(text) = result.clipboard() {
            self.last_copyable = Some(text.to_string());
        }
        Ok(())
    }

    fn report_failure(&mut self, line: &str, message: &str) {
        self.failures += 1;
        eprintln!("error: {}", message);
        for token in line.split(' ') {
            if let Some(spaced) = suggest_spacing(token) {
                eprintln!(
                    "hint: tokens must be separated by single spaces, try `{}` instead of `{}`",
                    spaced, token
                );
            }
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = cli.settings()?;
    let calculator = Calculator::new(config.options());
    debug!(options = ?calculator.options(), "calculator ready");

    let mode = if cli.postfix {
        Mode::ShowPostfix
    } else if cli.rpn {
        Mode::Rpn
    } else {
        Mode::Infix
    };

    let mut session = Session {
        calculator,
        config,
        mode,
        json: cli.json,
        out: io::stdout().lock(),
        last_copyable: None,
        failures: 0,
    };

    if cli.expression.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            session.run_line(line)?;
        }
    } else {
        session.run_line(&cli.expression.join(" "))?;
    }

    if cli.copy {
        match &session.last_copyable {
            Some(text) => copy_to_clipboard(text)?,
            None => warn!("nothing to copy"),
        }
    }

    Ok(session.failures == 0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
