use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use temple::cli::{Cli, Command, OutputFormat};
use temple::{bigram, bignum, cipher, path, report};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for RUST_LOG-driven debug output
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Caesar { key, ref text } => run_caesar(key, text, cli.format, cli.max_len),
        Command::Vigenere { ref key, ref text } => run_vigenere(key, text, cli.format, cli.max_len),
        Command::Addition {
            key,
            ref num1,
            ref num2,
        } => run_addition(key, num1, num2, cli.format, cli.max_len),
        Command::Path { rows, cols } => run_path(rows, cols, cli.format, cli.max_len),
        Command::Bigram => run_bigram(cli.format, cli.max_len),
    }
}

fn run_caesar(key: i32, text: &str, format: OutputFormat, max_len: usize) -> Result<()> {
    check_len("text", text, max_len)?;

    let output = cipher::caesar_apply(text, key);
    debug!(key, input_len = text.len(), "caesar transform applied");

    match format {
        OutputFormat::Text => println!("{}", output),
        OutputFormat::Json => print_json(&report::CipherReport {
            command: "caesar".to_string(),
            output,
        })?,
    }
    Ok(())
}

fn run_vigenere(key: &str, text: &str, format: OutputFormat, max_len: usize) -> Result<()> {
    check_len("key", key, max_len)?;
    check_len("text", text, max_len)?;

    let output = cipher::vigenere_apply(text, key).context("vigenere transform failed")?;
    debug!(key_len = key.len(), input_len = text.len(), "vigenere transform applied");

    match format {
        OutputFormat::Text => println!("{}", output),
        OutputFormat::Json => print_json(&report::CipherReport {
            command: "vigenere".to_string(),
            output,
        })?,
    }
    Ok(())
}

fn run_addition(
    key: i32,
    num1: &str,
    num2: &str,
    format: OutputFormat,
    max_len: usize,
) -> Result<()> {
    check_len("first operand", num1, max_len)?;
    check_len("second operand", num2, max_len)?;

    let sum = bignum::shifted_sum(num1, num2, key).context("addition failed")?;
    debug!(key, sum_len = sum.len(), "addition computed");

    match format {
        OutputFormat::Text => println!("{}", sum),
        OutputFormat::Json => print_json(&report::AdditionReport {
            command: "addition".to_string(),
            sum,
        })?,
    }
    Ok(())
}

fn run_path(rows: usize, cols: usize, format: OutputFormat, max_len: usize) -> Result<()> {
    let line = read_moves_line(max_len)?;

    let moves = path::decode_moves(&line).context("failed to decode the moves line")?;
    let temple = path::walk(rows, cols, &moves).context("failed to replay the path")?;
    debug!(rows, cols, steps = moves.len(), "path replayed");

    match format {
        OutputFormat::Text => print!("{}", temple.render()),
        OutputFormat::Json => print_json(&report::PathReport::new(rows, cols, &temple))?,
    }
    Ok(())
}

fn run_bigram(format: OutputFormat, max_len: usize) -> Result<()> {
    let text = read_all_stdin(max_len)?;

    let pairs = bigram::count_pairs(&text);
    debug!(distinct = pairs.len(), "two-grams counted");

    match format {
        OutputFormat::Text => print!("{}", bigram::render(&pairs)),
        OutputFormat::Json => print_json(&report::BigramReport::new(&pairs))?,
    }
    Ok(())
}

/// Enforce the boundary length cap before any core function runs.
fn check_len(label: &str, text: &str, max_len: usize) -> Result<()> {
    let chars = text.chars().count();
    if chars > max_len {
        bail!("{} is {} characters, over the {}-character limit", label, chars, max_len);
    }
    Ok(())
}

fn read_moves_line(max_len: usize) -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read the moves line from stdin")?;
    check_len("moves line", &line, max_len)?;
    Ok(line)
}

fn read_all_stdin(max_len: usize) -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    check_len("input text", &text, max_len)?;
    Ok(text)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize result")?
    );
    Ok(())
}
