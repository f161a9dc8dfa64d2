use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::containers::EventedList;
use crate::model::HasAxis;

use super::{ReorderError, Result};

/// Relocation of one element: remove at `src`, reinsert at `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub src: usize,
    pub dst: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MovePlan {
    pub moves: Vec<Move>,
    /// Length of the list once the plan has run.
    pub len: usize,
    /// Trailing elements popped after the moves.
    pub removed: usize,
}

impl MovePlan {
    pub fn is_identity(&self) -> bool {
        self.moves.is_empty() && self.removed == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MoveReport {
    pub moves: usize,
    pub removed: usize,
}

impl MoveReport {
    pub fn is_noop(&self) -> bool {
        self.moves == 0 && self.removed == 0
    }
}

/// Computes the moves that turn `current` into `desired`.
///
/// Both sequences must hold distinct axis ids.
///
/// Targets are filled in ascending order, so every move goes leftwards and
/// never disturbs the already placed prefix. Pending sources inside
/// `[dst, src)` shift one slot right after each move.
pub fn plan_moves(current: &[usize], desired: &[usize]) -> Result<MovePlan> {
    let mut positions = HashMap::with_capacity(current.len());
    for (position, &axis) in current.iter().enumerate() {
        if positions.insert(axis, position).is_some() {
            return Err(ReorderError::DuplicateAxis { axis });
        }
    }
    if current == desired {
        return Ok(MovePlan {
            moves: Vec::new(),
            len: current.len(),
            removed: 0,
        });
    }
    if desired.len() > current.len() {
        return Err(ReorderError::OrderTooLong {
            desired: desired.len(),
            current: current.len(),
        });
    }

    let mut seen = HashSet::with_capacity(desired.len());
    let mut sources = Vec::with_capacity(desired.len());
    for &axis in desired {
        if !seen.insert(axis) {
            return Err(ReorderError::DuplicateAxis { axis });
        }
        let src = positions
            .get(&axis)
            .copied()
            .ok_or(ReorderError::AxisNotFound { axis })?;
        sources.push(src);
    }

    let mut moves = Vec::new();
    for dst in 0..sources.len() {
        let src = sources[dst];
        if src != dst {
            moves.push(Move { src, dst });
        }
        for pending in &mut sources[dst + 1..] {
            if (dst..src).contains(&*pending) {
                *pending += 1;
            }
        }
    }

    Ok(MovePlan {
        moves,
        len: desired.len(),
        removed: current.len() - desired.len(),
    })
}

/// Brings `list` into `desired` order in place.
///
/// The plan is validated before the list is touched, so a rejected call
/// leaves it unmodified. All list events are blocked while the moves run;
/// listeners see a single `reordered` once the blocker is released.
pub fn apply_order<T>(list: &EventedList<T>, desired: &[usize]) -> Result<MoveReport>
where
    T: HasAxis + Clone + 'static,
{
    let current = list.with_items(|items| items.iter().map(HasAxis::axis).collect::<Vec<_>>());
    let plan = plan_moves(&current, desired)?;
    if plan.is_identity() {
        return Ok(MoveReport::default());
    }

    let _blocker = list.events.blocker_all();
    for step in &plan.moves {
        list.move_item(step.src, step.dst)?;
    }
    while list.len() > plan.len {
        list.pop();
    }
    debug!(
        moves = plan.moves.len(),
        removed = plan.removed,
        ?desired,
        "applied axis order"
    );
    Ok(MoveReport {
        moves: plan.moves.len(),
        removed: plan.removed,
    })
}
