use crate::cli::commands::prepare;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalizer::IngestStats;
use crate::core::pipeline::Pipeline;
use crate::core::report;
use crate::core::streak::STREAK_THRESHOLD;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, note};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streaks { report: path, opts } = cmd {
        let (rows, settings) = prepare(path, opts, cfg)?;
        let (streaks, stats) = Pipeline::streaks(&rows, &settings);

        print_stats(&stats);
        header("Eligible analysts");

        if streaks.is_empty() {
            info(format!(
                "No analyst worked more than {} consecutive days.",
                STREAK_THRESHOLD
            ));
        } else {
            print!("{}", report::render_streaks(&streaks));
        }
    }

    Ok(())
}

pub(crate) fn print_stats(stats: &IngestStats) {
    note(format!(
        "{} rows read, {} usable, {} skipped",
        stats.total_rows,
        stats.accepted,
        stats.rejected()
    ));
    if stats.rejected() > 0 {
        note(format!(
            "skipped: {} without name, {} without date, {} with unrecognised date",
            stats.missing_name, stats.missing_date, stats.unparseable_date
        ));
    }
}
