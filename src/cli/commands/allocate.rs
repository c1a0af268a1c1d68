use crate::cli::commands::prepare;
use crate::cli::commands::streaks::print_stats;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{Pipeline, RunStatus};
use crate::core::report;
use crate::core::streak::STREAK_THRESHOLD;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{YELLOW, color_for_count, paint};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Allocate {
        report: path,
        opts,
        details,
    } = cmd
    {
        let (rows, settings) = prepare(path, opts, cfg)?;
        let run = Pipeline::run(&rows, &settings);

        print_stats(&run.stats);

        match run.status() {
            RunStatus::EmptyInput => {
                warning("Nothing to allocate: the report has no usable rows.");
                return Ok(());
            }
            RunStatus::NoEligibleAnalysts => {
                header("Eligible analysts");
                info(format!(
                    "No analyst worked more than {} consecutive days.",
                    STREAK_THRESHOLD
                ));
                warning("Nothing to allocate: no eligible analysts.");
                return Ok(());
            }
            RunStatus::NothingAllocated | RunStatus::Allocated => {}
        }

        header("Eligible analysts");
        print!("{}", report::render_streaks(&run.streaks));

        let unmapped: Vec<&str> = run
            .eligible
            .iter()
            .filter(|e| e.product.is_none())
            .map(|e| e.analyst.as_str())
            .collect();
        if !unmapped.is_empty() {
            warning(format!(
                "No product resolved for: {} (left out of the distribution)",
                unmapped.join(", ")
            ));
        }

        if run.status() == RunStatus::NothingAllocated {
            warning("Nothing to allocate: no eligible analyst maps to a product with quota.");
            return Ok(());
        }

        header("Distribution summary");
        print!("{}", report::render_summary(&report::summarize_by_team(&run.allocation.records)));

        if *details {
            header("Distribution detail");
            print!("{}", report::render_detail(&run.allocation.records));
        }

        for left in &run.allocation.unallocated {
            info(format!(
                "{}: {} monitorias not allocated (no eligible analysts)",
                left.product,
                paint(YELLOW, &left.quota.to_string())
            ));
        }

        let total = run.allocation.total_assigned();
        success(format!(
            "{} of {} monitorias distributed to {} analysts",
            paint(color_for_count(total), &total.to_string()),
            settings.quotas.total(),
            run.allocation.records.iter().filter(|r| r.assigned > 0).count()
        ));
    }

    Ok(())
}
