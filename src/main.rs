use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use num_bigint::BigInt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lagrange_rs::document::parse_document;
use lagrange_rs::lagrange::interpolate;
use lagrange_rs::verify::{check_points, ensure_consistent};

/// Filenames probed, in order, when no input path is given.
const DEFAULT_INPUTS: &[&str] = &["testcase.json", "testcase1.json", "testcase2.json"];

/// Reconstruct a hidden constant from base-encoded polynomial shares.
#[derive(Debug, Parser)]
#[command(name = "lagrange-rs", version, about)]
struct Args {
    /// Share document to read; defaults to probing testcase*.json.
    input: Option<PathBuf>,
}

fn discover_input(args: &Args) -> Result<PathBuf> {
    if let Some(path) = &args.input {
        return Ok(path.clone());
    }
    for candidate in DEFAULT_INPUTS {
        let path = PathBuf::from(candidate);
        if path.is_file() {
            return Ok(path);
        }
    }
    bail!("no input file given and none of {DEFAULT_INPUTS:?} exist");
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    println!("Polynomial Interpolation Solver");
    let path = discover_input(&args)?;
    println!("Reading from {}", path.display());
    let text =
        fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;

    let doc = parse_document(&text)?;
    if doc.shares.is_empty() {
        bail!("no shares decoded from {}", path.display());
    }
    let (n, k) = (doc.keys.n, doc.keys.k);
    if k == 0 {
        bail!("document declares no threshold (k = 0)");
    }
    debug!(n, k, shares = doc.shares.len(), "document parsed");

    println!("n = {n}, k = {k}");
    println!("Degree = {}", k - 1);
    println!();
    for share in &doc.shares {
        println!(
            "Share {}: ({}, {} base {} = {})",
            share.x, share.x, share.raw, share.base, share.y
        );
    }

    let selected = doc.select()?;
    println!();
    println!("Using {k} shares...");
    let points: Vec<(i64, BigInt)> = selected.iter().map(|s| (s.x, s.y.clone())).collect();
    let poly = interpolate(&points)?;

    println!();
    println!("Results:");
    println!("Polynomial: {poly}");
    println!("Secret (c) = {}", poly.secret());

    println!();
    println!("Verification:");
    let checks = check_points(&poly, &points);
    for check in &checks {
        println!(
            "f({}) = {} (expected: {})",
            check.x, check.computed, check.expected
        );
    }
    ensure_consistent(&checks)?;
    Ok(())
}
