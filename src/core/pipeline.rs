use crate::config::{Config, QuotaTable};
use crate::core::allocator::{self, AllocationOptions};
use crate::core::eligibility::{self, ProductSource};
use crate::core::normalizer::{self, ColumnAliases, IngestStats};
use crate::core::streak::{self, AttendancePolicy, GapRule, StatusFilter};
use crate::models::allocation::Allocation;
use crate::models::eligible::EligibleAnalyst;
use crate::models::raw_record::RawRecord;
use crate::models::streak::AnalystStreak;
use std::collections::HashSet;

/// Immutable inputs of one run, resolved from `Config` plus CLI overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub columns: ColumnAliases,
    pub filter: StatusFilter,
    pub gap_rule: GapRule,
    pub product_source: ProductSource,
    pub quotas: QuotaTable,
    pub allocation: AllocationOptions,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            columns: cfg.columns.clone(),
            filter: StatusFilter::new(cfg.attendance_policy, &cfg.worked_token, &cfg.off_markers),
            gap_rule: cfg.gap_rule,
            product_source: cfg.product_source,
            quotas: cfg.quotas.clone(),
            allocation: AllocationOptions {
                keep_zero: cfg.keep_zero_allocations,
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Per-run overrides coming from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub policy: Option<AttendancePolicy>,
    pub gap_rule: Option<GapRule>,
    pub product_source: Option<ProductSource>,
    pub keep_zero: bool,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(p) = self.policy {
            cfg.attendance_policy = p;
        }
        if let Some(g) = self.gap_rule {
            cfg.gap_rule = g;
        }
        if let Some(s) = self.product_source {
            cfg.product_source = s;
        }
        if self.keep_zero {
            cfg.keep_zero_allocations = true;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No usable rows after normalization
    EmptyInput,
    /// Nobody cleared the streak threshold
    NoEligibleAnalysts,
    /// Eligible analysts exist but none maps to a product with quota
    NothingAllocated,
    Allocated,
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub stats: IngestStats,
    pub streaks: Vec<AnalystStreak>,
    pub eligible: Vec<EligibleAnalyst>,
    pub allocation: Allocation,
}

impl PipelineRun {
    pub fn status(&self) -> RunStatus {
        if self.stats.accepted == 0 {
            RunStatus::EmptyInput
        } else if self.streaks.is_empty() {
            RunStatus::NoEligibleAnalysts
        } else if self.allocation.is_empty() {
            RunStatus::NothingAllocated
        } else {
            RunStatus::Allocated
        }
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Streak detection only: rows → normalized records → eligible streaks.
    pub fn streaks(rows: &[RawRecord], settings: &Settings) -> (Vec<AnalystStreak>, IngestStats) {
        let (records, stats) = normalizer::normalize_all(rows, &settings.columns);
        let streaks = streak::detect_streaks(&records, &settings.filter, &settings.gap_rule);
        (streaks, stats)
    }

    /// Full run: streaks, eligibility projection and quota allocation.
    pub fn run(rows: &[RawRecord], settings: &Settings) -> PipelineRun {
        let (records, stats) = normalizer::normalize_all(rows, &settings.columns);
        let streaks = streak::detect_streaks(&records, &settings.filter, &settings.gap_rule);

        let names: HashSet<String> = streaks.iter().map(|s| s.analyst.clone()).collect();
        let eligible = eligibility::project_eligible(&records, &names, settings.product_source);
        let allocation = allocator::allocate(&eligible, &settings.quotas, settings.allocation);

        tracing::info!(
            rows = stats.total_rows,
            skipped = stats.rejected(),
            eligible = eligible.len(),
            assigned = allocation.total_assigned(),
            "pipeline finished"
        );

        PipelineRun {
            stats,
            streaks,
            eligible,
            allocation,
        }
    }
}
