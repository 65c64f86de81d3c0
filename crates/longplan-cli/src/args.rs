//! Command-line interface definitions using clap
//!
//! CLI argument types stay in this crate and convert into the core
//! parameter types, so `longplan-core` carries no clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → generator / progression
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use longplan_core::{
    params::{DEFAULT_WEEKLY_HOURS, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS},
    Duration, GeneratePlan,
};

/// Turn a long-term goal into a plan and work through it one item at a time
///
/// Longplan classifies the goal, picks a phase template, scales it to the
/// time you have, and then always shows you exactly one thing to do next.
#[derive(Parser)]
#[command(version, about, name = "longplan")]
pub struct Args {
    /// Path to the plan file. Defaults to
    /// $XDG_DATA_HOME/longplan/plan_data.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, `show` is assumed.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new plan from a goal
    #[command(alias = "n")]
    New(NewPlanArgs),
    /// Show the current item
    #[command(alias = "s")]
    Show,
    /// Show every phase and item of the plan
    #[command(alias = "p")]
    Plan,
    /// Mark the current item as completed
    #[command(alias = "d")]
    Done,
    /// Move the current item to the end of its phase
    Skip,
    /// Show completed and total item counts
    Progress,
    /// Discard the current plan so a new one can be generated
    Reset,
    /// Show which template a goal would use, without saving anything
    Categorize(CategorizeArgs),
}

/// Generate a new plan
///
/// CLI wrapper for GeneratePlan that adds clap-specific argument handling.
#[derive(ClapArgs)]
pub struct NewPlanArgs {
    /// The goal to plan for
    pub goal: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = DurationArg::ThreeMonths,
        help = "How long the plan should run"
    )]
    pub duration: DurationArg,
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WEEKLY_HOURS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_WEEKLY_HOURS)..=i64::from(MAX_WEEKLY_HOURS)),
        help = "Hours available per week (1-40)"
    )]
    pub weekly_hours: u32,
    #[arg(long, help = "Replace an existing plan")]
    pub force: bool,
}

impl From<&NewPlanArgs> for GeneratePlan {
    fn from(val: &NewPlanArgs) -> Self {
        GeneratePlan {
            goal: val.goal.clone(),
            duration: val.duration.into(),
            weekly_hours: val.weekly_hours,
        }
    }
}

/// Show the category and template a goal maps to
#[derive(ClapArgs)]
pub struct CategorizeArgs {
    /// The goal to classify
    pub goal: String,
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WEEKLY_HOURS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_WEEKLY_HOURS)..=i64::from(MAX_WEEKLY_HOURS)),
        help = "Hours available per week (1-40)"
    )]
    pub weekly_hours: u32,
}

/// Command-line representation of plan durations
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DurationArg {
    /// Three months (12 weeks)
    #[value(name = "3months")]
    ThreeMonths,
    /// Six months (26 weeks)
    #[value(name = "6months")]
    SixMonths,
    /// One year (52 weeks)
    #[value(name = "1year")]
    OneYear,
}

impl From<DurationArg> for Duration {
    fn from(val: DurationArg) -> Self {
        match val {
            DurationArg::ThreeMonths => Duration::ThreeMonths,
            DurationArg::SixMonths => Duration::SixMonths,
            DurationArg::OneYear => Duration::OneYear,
        }
    }
}

impl std::fmt::Display for DurationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Duration::from(*self).code())
    }
}
