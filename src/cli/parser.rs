use crate::core::eligibility::ProductSource;
use crate::core::streak::{AttendancePolicy, GapRule};
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rMonitorias
#[derive(Parser)]
#[command(
    name = "rmonitorias",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find analysts with long workday streaks and distribute monitoring quotas per product",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-team setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that change how a report is interpreted, for one run only.
#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// Which attendance statuses count as worked days
    #[arg(long = "policy", value_enum)]
    pub policy: Option<AttendancePolicy>,

    /// Treat a Friday → Monday gap as continuous
    #[arg(long = "business-week", conflicts_with = "gap_rule")]
    pub business_week: bool,

    /// Gap rule between consecutive workdays
    #[arg(long = "gap-rule", value_enum)]
    pub gap_rule: Option<GapRule>,

    /// Where the analyst's product comes from
    #[arg(long = "product-source", value_enum)]
    pub product_source: Option<ProductSource>,

    /// Keep allocation rows that received zero monitorias
    #[arg(long = "keep-zero")]
    pub keep_zero: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default quota table
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for inconsistencies")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List analysts with more than 10 consecutive workdays
    Streaks {
        /// Monthly attendance report (CSV)
        report: PathBuf,

        #[command(flatten)]
        opts: RunOptions,
    },

    /// Distribute monitorias across eligible analysts
    Allocate {
        /// Monthly attendance report (CSV)
        report: PathBuf,

        #[command(flatten)]
        opts: RunOptions,

        #[arg(long = "details", help = "Also print the per-analyst detail table")]
        details: bool,
    },

    /// Export allocations or eligible analysts to a file
    Export {
        /// Monthly attendance report (CSV)
        report: PathBuf,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: PathBuf,

        #[arg(long = "streaks", help = "Export eligible analysts instead of allocations")]
        streaks: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,

        #[command(flatten)]
        opts: RunOptions,
    },
}
