use std::io::{self, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_demos::vehicle::run_demo(&mut out).context("vehicle demo failed")?;
    out.flush()?;
    Ok(())
}
