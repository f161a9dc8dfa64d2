use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::sorter::MovePlan;

#[derive(Debug, Parser)]
#[command(
    name = "dims-sorter",
    version,
    about = "Reorder and lock the displayed axes of a multi-dimensional viewer"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the dims state with its displayed and locked axes.
    Info { state: PathBuf },
    /// Prints the moves that bring `--current` into `--order`.
    Plan {
        #[arg(long, value_delimiter = ',', required = true)]
        current: Vec<usize>,
        #[arg(long, value_delimiter = ',', required = true)]
        order: Vec<usize>,
    },
    Reorder {
        state: PathBuf,
        #[arg(long, value_delimiter = ',', required = true)]
        order: Vec<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Roll {
        state: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Transpose {
        state: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Locks an axis in place, or unlocks it with `--unlock`.
    Lock {
        state: PathBuf,
        #[arg(long)]
        axis: usize,
        #[arg(long)]
        unlock: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Opens the dims sorter panel, on a default 4-D dims when no state is given.
    View { state: Option<PathBuf> },
}

#[derive(Debug, Serialize)]
pub(super) struct DimsReport {
    pub(super) ndim: usize,
    pub(super) ndisplay: usize,
    pub(super) order: Vec<usize>,
    pub(super) displayed: Vec<usize>,
    pub(super) not_displayed: Vec<usize>,
    pub(super) axis_labels: Vec<String>,
    pub(super) locked: Vec<usize>,
    pub(super) list_order: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct PlanReport {
    pub(super) current: Vec<usize>,
    pub(super) order: Vec<usize>,
    #[serde(flatten)]
    pub(super) plan: MovePlan,
}
