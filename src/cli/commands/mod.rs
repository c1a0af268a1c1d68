pub mod allocate;
pub mod config;
pub mod export;
pub mod init;
pub mod streaks;

use crate::cli::parser::RunOptions;
use crate::config::Config;
use crate::core::pipeline::{Overrides, Settings};
use crate::core::streak::GapRule;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::raw_record::RawRecord;
use crate::ui::messages::{step, warning};
use std::path::Path;

impl RunOptions {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            policy: self.policy,
            gap_rule: if self.business_week {
                Some(GapRule::BusinessWeek)
            } else {
                self.gap_rule
            },
            product_source: self.product_source,
            keep_zero: self.keep_zero,
        }
    }
}

/// Resolve run settings and read the report: shared by every report command.
pub(crate) fn prepare(
    report: &Path,
    opts: &RunOptions,
    cfg: &Config,
) -> AppResult<(Vec<RawRecord>, Settings)> {
    let mut effective = cfg.clone();
    opts.overrides().apply(&mut effective);

    step(format!("Reading {}…", report.display()));
    let rows = ingest::read_rows(report)?;

    if rows.is_empty() {
        warning("The report has no data rows.");
    }

    tracing::debug!(
        policy = effective.attendance_policy.as_str(),
        gap_rule = effective.gap_rule.as_str(),
        product_source = effective.product_source.as_str(),
        "effective settings"
    );

    Ok((rows, Settings::from_config(&effective)))
}
