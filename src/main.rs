
use myeval::{run, Error, Evaluation};
use myeval::util::format_number;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::info;
use serde::Serialize;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// MyEval reads arithmetic expressions, one per line, and prints the
/// token stream, the postfix form and the result of each.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Evaluate this expression and exit instead of starting the
  /// interactive loop.
  #[arg(short, long)]
  expr: Option<String>,

  /// Print only the result, without the intermediate forms.
  #[arg(short, long)]
  quiet: bool,

  /// Print each outcome as a JSON object.
  #[arg(long)]
  json: bool,
}

/// JSON shape of one line of output in `--json` mode.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome<'a> {
  Ok(&'a Evaluation),
  Error(&'a Error),
}

const EXIT_KEYWORD: &str = "exit";
const PROMPT: &str = "Enter a mathematical expression: ";

fn main() -> anyhow::Result<ExitCode> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args = Args::parse();
  let stdout = io::stdout();
  let mut out = stdout.lock();

  if let Some(expr) = &args.expr {
    let outcome = run(expr);
    report(&mut out, &args, &outcome)?;
    return Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
  }

  let stdin = io::stdin();
  interact(stdin.lock(), &mut out, &args)?;
  Ok(ExitCode::SUCCESS)
}

/// Reads expressions from `input` one line at a time until `exit` or
/// end of input, reporting each outcome to `out`.
fn interact(mut input: impl BufRead, out: &mut impl Write, args: &Args) -> anyhow::Result<()> {
  if !args.json {
    writeln!(out, "This is MyEval, a mathematical expressions interpreter")?;
    writeln!(out, "Type '{EXIT_KEYWORD}' to exit the program")?;
  }
  let mut buf = Vec::new();
  loop {
    if !args.json {
      write!(out, "{PROMPT}")?;
      out.flush()?;
    }
    buf.clear();
    if input.read_until(b'\n', &mut buf).context("failed to read from stdin")? == 0 {
      info!("end of input, leaving the read loop");
      break;
    }
    // Invalid UTF-8 turns into U+FFFD, which validation reports as an
    // illegal character.
    let line = String::from_utf8_lossy(&buf);
    let line = line.trim_end_matches(|ch: char| ch == '\n' || ch == '\r');
    if line.trim().eq_ignore_ascii_case(EXIT_KEYWORD) {
      if !args.json {
        writeln!(out, "Bye")?;
      }
      break;
    }
    report(out, args, &run(line))?;
  }
  Ok(())
}

fn report(out: &mut impl Write, args: &Args, outcome: &Result<Evaluation, Error>) -> anyhow::Result<()> {
  if args.json {
    let outcome = match outcome {
      Ok(evaluation) => Outcome::Ok(evaluation),
      Err(err) => Outcome::Error(err),
    };
    let json = serde_json::to_string(&outcome).context("failed to serialize outcome")?;
    writeln!(out, "{json}")?;
    return Ok(());
  }
  match outcome {
    Ok(evaluation) => {
      if !args.quiet {
        writeln!(out, "{}", evaluation.normalized)?;
        writeln!(out, "[{}]", evaluation.tokens.iter().map(|t| format!("'{t}'")).join(", "))?;
        writeln!(out, "{}", evaluation.postfix)?;
      }
      writeln!(out, "The result is: {}", format_number(evaluation.result))?;
    }
    Err(err) => {
      writeln!(out, "Error: {err}")?;
    }
  }
  Ok(())
}
