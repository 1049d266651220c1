// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use versecraft::phrases::PhraseBank;
use versecraft::structure::StructurePattern;
use versecraft::suggest::SuggestionEngine;
use versecraft::ui::{App, AppState};

fn print_usage() {
    println!("VERSECRAFT - Guided lyric composition wizard");
    println!();
    println!("Usage: versecraft [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --bank <FILE>        Use a phrase bank loaded from a YAML file");
    println!("  --check-bank <FILE>  Validate a phrase bank file and exit");
    println!("  --patterns           List the built-in song structures and exit");
    println!("  --title              Print one random title and exit");
    println!("  --seed <N>           Seed the suggestion RNG (reproducible draws)");
    println!("  --out <FILE>         Prompt output path (default: prompt.txt)");
    println!("  --help               Show this help message");
}

/// Validate a bank file and report its pool sizes
fn check_bank(path: &PathBuf) -> Result<()> {
    let bank = PhraseBank::load(path)?;

    for (name, pool) in bank.pools() {
        println!("{:20} {:3} phrases", name, pool.len());
    }
    println!();

    match bank.validate() {
        Ok(()) => {
            println!("Bank OK: {:?}", path);
            Ok(())
        }
        Err(err) => Err(anyhow!("Invalid bank {:?}: {}", path, err)),
    }
}

/// List the built-in structure patterns
fn list_patterns() {
    for pattern in StructurePattern::builtin() {
        println!(
            "{}  ({} sections, {} lines)",
            pattern.name,
            pattern.sections.len(),
            pattern.total_lines()
        );
        println!("    {}", pattern.description);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut bank_path: Option<PathBuf> = None;
    let mut check_path: Option<PathBuf> = None;
    let mut out_path = PathBuf::from("prompt.txt");
    let mut seed: Option<u64> = None;
    let mut list = false;
    let mut title_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bank" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--bank requires a file path"))?;
                bank_path = Some(PathBuf::from(path));
            }
            "--check-bank" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--check-bank requires a file path"))?;
                check_path = Some(PathBuf::from(path));
            }
            "--out" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--out requires a file path"))?;
                out_path = PathBuf::from(path);
            }
            "--seed" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow!("Invalid seed: {}", value))?,
                );
            }
            "--patterns" => list = true,
            "--title" => title_only = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Non-interactive paths log to stderr; the wizard owns the terminal
    if check_path.is_some() || list || title_only {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Some(path) = check_path {
        return check_bank(&path);
    }
    if list {
        list_patterns();
        return Ok(());
    }

    let bank = match &bank_path {
        Some(path) => {
            let bank = PhraseBank::load(path)?;
            bank.validate()
                .map_err(|err| anyhow!("Invalid bank {:?}: {}", path, err))?;
            bank
        }
        None => PhraseBank::builtin(),
    };

    let mut engine = match seed {
        Some(seed) => SuggestionEngine::with_seed(bank, seed),
        None => SuggestionEngine::new(bank),
    };

    if title_only {
        println!("{}", engine.random_title());
        return Ok(());
    }

    let state = AppState::new(StructurePattern::builtin(), out_path);
    let mut app = App::new(state, engine)?;
    app.run()?;
    Ok(())
}
