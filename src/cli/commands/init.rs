use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::default();
    cfg.save(&path)?;

    success(format!("Config file: {}", path.display()));
    info(format!(
        "{} products, {} monitorias in total",
        cfg.quotas.len(),
        cfg.quotas.total()
    ));
    Ok(())
}
