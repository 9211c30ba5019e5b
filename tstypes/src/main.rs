//! `tree-sitter-types-builder`: TypeScript types from a compiled grammar.
//!
//! Run with: `tree-sitter-types-builder -w tree-sitter-fish.wasm -o fish.ts`

use clap::Parser;
use std::process::ExitCode;
use tstypes::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the generated text
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
