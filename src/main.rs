use quake_stats::app;
use quake_stats::config::ComparisonConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ComparisonConfig::default();
    let charts = app::run(&config)?;

    log::info!(
        "charts written: {}, {}",
        charts.bar.display(),
        charts.scatter.display()
    );
    Ok(())
}
