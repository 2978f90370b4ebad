use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::cave::VisitRule;

/// Visit policy as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    /// Every small cave at most once.
    Single,
    /// One small cave per path may be visited twice.
    Double,
}

impl From<RuleArg> for VisitRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Single => VisitRule::SingleVisit,
            RuleArg::Double => VisitRule::OneSmallTwice,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Counts the paths from 'start' to 'end' through a cave system.", long_about = None)]
pub struct Cli {
    /// Edge list file, one `a-b` passage per line
    pub edge_file: PathBuf,

    /// How often small caves may be visited on one path
    #[clap(long, value_enum, default_value = "double", env = "CAVE_PATHS_RULE")]
    pub rule: RuleArg,

    /// Track every path signature and print how many distinct ones were seen.
    #[clap(long)]
    pub log_paths: bool,

    /// Write every path signature to this file, one per line (implies --log-paths).
    #[clap(long, value_name = "FILE")]
    pub paths_out: Option<PathBuf>,

    /// Suppress verbose output, only printing the count or errors.
    #[clap(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn tracks_paths(&self) -> bool {
        self.log_paths || self.paths_out.is_some()
    }
}
