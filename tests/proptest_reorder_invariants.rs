//! Property tests for axis-order translation.
//!
//! 1. The list ends up exactly equal to the requested order, truncation included
//! 2. A second application of the same order issues no moves
//! 3. Listeners see exactly one `reordered` per effective translation
//! 4. Every planned move goes leftwards into the next unfilled slot
//! 5. Unknown axes are rejected without touching the list

use std::cell::Cell;
use std::rc::Rc;

use dims_sorter::containers::EventedList;
use dims_sorter::sorter::{ReorderError, apply_order, plan_moves};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// A shuffled list of `0..n` plus a shuffled prefix-length subset of it.
fn current_and_desired() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1usize..24)
        .prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                0..=n,
            )
        })
        .prop_map(|(current, mut desired, keep)| {
            desired.truncate(keep);
            (current, desired)
        })
}

proptest! {
    #[test]
    fn translation_reaches_desired_order((current, desired) in current_and_desired()) {
        let list = EventedList::new(current);
        apply_order(&list, &desired).expect("desired is a subset of current");
        prop_assert_eq!(list.to_vec(), desired);
    }

    #[test]
    fn translation_is_idempotent((current, desired) in current_and_desired()) {
        let list = EventedList::new(current);
        apply_order(&list, &desired).expect("first application");
        let second = apply_order(&list, &desired).expect("second application");
        prop_assert!(second.is_noop());
        prop_assert_eq!(list.to_vec(), desired);
    }

    #[test]
    fn translation_notifies_once((current, desired) in current_and_desired()) {
        let list = EventedList::new(current.clone());
        let count = Rc::new(Cell::new(0usize));
        let sink = Rc::clone(&count);
        let _subscription = list.events.reordered.connect(move |_| sink.set(sink.get() + 1));

        let report = apply_order(&list, &desired).expect("valid order");
        let expected = usize::from(current != desired);
        prop_assert_eq!(count.get(), expected);
        prop_assert_eq!(report.is_noop(), current == desired);
    }

    #[test]
    fn planned_moves_fill_slots_in_ascending_order((current, desired) in current_and_desired()) {
        let plan = plan_moves(&current, &desired).expect("valid order");
        let mut last_dst = None;
        for step in &plan.moves {
            prop_assert!(step.src > step.dst);
            prop_assert!(last_dst.is_none_or(|last| step.dst > last));
            last_dst = Some(step.dst);
        }
        prop_assert!(plan.moves.len() <= desired.len());
        prop_assert_eq!(plan.len, desired.len());
    }

    #[test]
    fn unknown_axis_leaves_list_untouched(
        (current, mut desired) in current_and_desired(),
        slot in any::<prop::sample::Index>(),
    ) {
        let missing = current.len() + 3;
        if desired.is_empty() {
            desired.push(missing);
        } else {
            let index = slot.index(desired.len());
            desired[index] = missing;
        }
        let list = EventedList::new(current.clone());
        prop_assert_eq!(
            apply_order(&list, &desired),
            Err(ReorderError::AxisNotFound { axis: missing })
        );
        prop_assert_eq!(list.to_vec(), current);
    }
}
