use anyhow::Context;
use tracing_subscriber::EnvFilter;
use web_icons::IconSet;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let set = IconSet::web();
    let written = set
        .generate()
        .with_context(|| format!("failed to generate icons in {}", set.dir.display()))?;
    tracing::info!(count = written.len(), "icons generated");
    Ok(())
}
