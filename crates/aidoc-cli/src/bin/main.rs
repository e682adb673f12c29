//! aidoc binary entry point
//!
//! A thin wrapper around the library's `run_cli()`.

use aidoc_cli::run_cli;
use anyhow::Result;

fn main() -> Result<()> {
    run_cli()
}
