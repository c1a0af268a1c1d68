use crate::cli::commands::prepare;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        report,
        format,
        out,
        streaks,
        force,
        opts,
    } = cmd
    {
        let (rows, settings) = prepare(report, opts, cfg)?;
        let run = Pipeline::run(&rows, &settings);

        let target = if *streaks {
            ExportTarget::Streaks
        } else {
            ExportTarget::Allocations
        };

        let written = ExportLogic::export(&run, target, *format, out, *force)?;
        tracing::debug!(written, format = format.as_str(), "export done");
    }
    Ok(())
}
