use std::path::Path;
use std::rc::Rc;

use clap::Parser;
use serde_json::Value;
use tracing::info;

use crate::model::{Dims, DimsState, load_state, save_state};
use crate::sorter::{DimsSorter, plan_moves};

use super::types::{Cli, Commands, DimsReport, PlanReport};
use super::{CliError, Result};

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    if let Some(output) = execute(cli.command)? {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

pub(super) fn execute(command: Commands) -> Result<Option<Value>> {
    match command {
        Commands::Info { state } => {
            let sorter = open(&state)?;
            Ok(Some(serde_json::to_value(report(&sorter))?))
        }
        Commands::Plan { current, order } => {
            let plan = plan_moves(&current, &order)?;
            let report = PlanReport {
                current,
                order,
                plan,
            };
            Ok(Some(serde_json::to_value(report)?))
        }
        Commands::Reorder {
            state,
            order,
            output,
        } => {
            let sorter = open(&state)?;
            sorter.dims().set_order(&order)?;
            finish(&sorter, output.as_deref())
        }
        Commands::Roll { state, output } => {
            let sorter = open(&state)?;
            sorter.dims().roll();
            finish(&sorter, output.as_deref())
        }
        Commands::Transpose { state, output } => {
            let sorter = open(&state)?;
            sorter.dims().transpose();
            finish(&sorter, output.as_deref())
        }
        Commands::Lock {
            state,
            axis,
            unlock,
            output,
        } => {
            let sorter = open(&state)?;
            let index = sorter
                .axis_list()
                .index_of_axis(axis)
                .ok_or(CliError::UnknownAxis { axis })?;
            sorter
                .axis_list()
                .update(index, |item| item.rollable = unlock)?;
            finish(&sorter, output.as_deref())
        }
        Commands::View { state } => {
            let state = match state {
                Some(path) => load_state(path)?,
                None => DimsState::new(crate::ui::DEFAULT_NDIM),
            };
            crate::ui::run(Dims::from_state(state)?)?;
            Ok(None)
        }
    }
}

fn open(path: &Path) -> Result<DimsSorter> {
    let state = load_state(path)?;
    let dims = Rc::new(Dims::from_state(state)?);
    Ok(DimsSorter::new(dims))
}

fn finish(sorter: &DimsSorter, output: Option<&Path>) -> Result<Option<Value>> {
    if let Some(error) = sorter.take_error() {
        return Err(error.into());
    }
    if let Some(path) = output {
        save_state(path, &sorter.dims().state())?;
        info!(path = %path.display(), "saved dims state");
    }
    Ok(Some(serde_json::to_value(report(sorter))?))
}

fn report(sorter: &DimsSorter) -> DimsReport {
    let state = sorter.dims().state();
    let displayed = state.displayed();
    let not_displayed = state.not_displayed();
    let locked = state.locked_axes();
    DimsReport {
        ndim: state.ndim,
        ndisplay: state.ndisplay,
        order: state.order,
        displayed,
        not_displayed,
        axis_labels: state.axis_labels,
        locked,
        list_order: sorter.axis_list().axis_order(),
    }
}
