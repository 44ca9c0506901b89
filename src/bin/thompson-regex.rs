//! CLI front end: mode selection, line-oriented stdin reading, and
//! acceptance-digit output. Not part of the core matching subsystems,
//! but shipped as this crate's binary target.

#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use thompson_regex::{compile, postfix_string, Nfa};

/// Compile and match regexes against lines read from standard input.
#[derive(Parser, Debug)]
#[command(name = "thompson-regex", about, disable_help_flag = true)]
struct Cli {
    /// Read one regex line from stdin and print its postfix rendering.
    #[arg(short = 'r', conflicts_with = "test")]
    render: bool,

    /// Read a regex from the first stdin line, then match every
    /// subsequent line against it, printing one `0`/`1` digit per line.
    #[arg(short = 't')]
    test: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => return usage_error(),
    };

    if cli.render == cli.test {
        // Neither flag, or (unreachable given conflicts_with) both.
        return usage_error();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(Ok(first)) = lines.next() else {
        return usage_error();
    };
    let pattern = strip_eol(first);

    if cli.render {
        let program = compile(pattern.as_bytes());
        debug!("render mode: compiled {} bytes of pattern", pattern.len());
        let mut stdout = io::stdout();
        let _ = stdout.write_all(&postfix_string(&program));
        let _ = stdout.write_all(b"\n");
        return ExitCode::SUCCESS;
    }

    debug_assert!(cli.test);
    let program = compile(pattern.as_bytes());
    let nfa = Nfa::compile(&program);
    debug!("test mode: compiled pattern into {} states", nfa.epsilon_closures.len());
    let mut stdout = io::stdout();
    for line in lines {
        let Ok(line) = line else { break };
        let input = strip_eol(line);
        let digit = if nfa.is_match(input.as_bytes()) { b'1' } else { b'0' };
        let _ = stdout.write_all(&[digit]);
    }
    let _ = stdout.write_all(b"\n");
    ExitCode::SUCCESS
}

fn strip_eol(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
    }
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

fn usage_error() -> ExitCode {
    eprintln!("usage: thompson-regex (-r | -t)");
    ExitCode::FAILURE
}
