use std::io::{self, BufRead, Write};

use bigcalc::BigNumber;
use clap::Parser;
use log::{debug, info};

/// Interactive arbitrary-precision integer calculator.
///
/// Reads one expression per line: `<lhs> <op> <rhs>` with an operator from
/// `+ - * / %`, `<value>!` for factorial, or a bare `<value>` to echo its
/// normalized form. `exit` or `quit` leaves.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Radix for every parsed literal and printed result.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    base: u32,
}

fn eval_line(line: &str, base: u32) -> Result<BigNumber, String> {
    let parse = |text: &str| BigNumber::from_str_radix(text, base).map_err(|e| e.to_string());

    if let Some(operand) = line.strip_suffix('!') {
        return parse(operand.trim_end())?.factorial().map_err(|e| e.to_string());
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [literal] => parse(literal),
        [lhs, operator, rhs] => {
            let lhs = parse(lhs)?;
            let rhs = parse(rhs)?;
            match *operator {
                "+" => Ok(lhs.add(&rhs)),
                "-" => Ok(lhs.subtract(&rhs)),
                "*" => Ok(lhs.multiply(&rhs)),
                "/" => lhs.floor_div(&rhs).map_err(|e| e.to_string()),
                "%" => lhs.modulo(&rhs).map_err(|e| e.to_string()),
                other => Err(format!("unknown operator `{other}`")),
            }
        }
        _ => Err("expected `<lhs> <op> <rhs>`, `<value>!` or a single value".to_string()),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("calculator started in base {}", args.base);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        debug!("evaluating `{line}`");
        match eval_line(line, args.base) {
            Ok(result) => writeln!(stdout, "{result}")?,
            Err(message) => writeln!(stdout, "error: {message}")?,
        }
    }
    Ok(())
}
