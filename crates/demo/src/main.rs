use std::io::Write;

use anyhow::Context;

use bookshop_demo::{DemoConfig, scenario};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("invalid demo configuration")?;

    bookshop_observability::init(config.log_format);
    tracing::info!(reference_year = ?config.reference_year, "starting bookshop demo");

    let clock = config.clock();
    let mut out = std::io::stdout().lock();

    scenario::run(&mut out, clock.as_ref()).context("failed to write demo output")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
