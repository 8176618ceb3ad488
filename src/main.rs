use std::time::Instant;

use clap::Parser;

use anagram_index::config::Config;
use anagram_index::solver::{build_report, render_json, render_text, solve};
use anagram_index::{index, Result, WordMap};

fn main() {
    // Logs go to stderr so the report on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();
    if let Err(msg) = config.validate() {
        eprintln!("Error: {}", msg);
        std::process::exit(1);
    }

    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    tracing::info!(
        dictionary = %config.dictionary.display(),
        backend = %config.backend,
        "indexing dictionary"
    );

    let mut map = index::build(config.backend);
    let start = Instant::now();
    let words = solve(&config.dictionary, map.as_mut())?;
    tracing::info!(
        words,
        keys = map.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "index built"
    );

    let report = build_report(map.as_ref());
    if config.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
