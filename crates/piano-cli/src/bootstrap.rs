use anyhow::Context;
use piano_config::PianoConfig;

/// Load `.env` from the current directory (if any), then layered config.
pub fn load_config() -> anyhow::Result<PianoConfig> {
    load_dotenv()?;
    PianoConfig::load().context("failed to load piano configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv");
    }
    Ok(())
}
