use std::cell::RefCell;
use std::rc::Rc;

use tempfile::tempdir;

use super::{AxisModel, CoreError, Dims, DimsState, load_state, save_state};

fn locked(mut state: DimsState, axes: &[usize]) -> DimsState {
    for axis in axes {
        state.rollable[*axis] = false;
    }
    state
}

#[test]
fn new_state_has_identity_order_and_default_labels() {
    let state = DimsState::new(3);
    assert_eq!(state.order, vec![0, 1, 2]);
    assert_eq!(state.axis_labels, vec!["0", "1", "2"]);
    assert_eq!(state.rollable, vec![true; 3]);
    assert!(state.validate().is_ok());
}

#[test]
fn state_roundtrip_json() {
    let mut state = DimsState::new(4);
    state.order = vec![3, 1, 0, 2];
    state.axis_labels = vec!["t".into(), "z".into(), "y".into(), "x".into()];
    state.rollable[0] = false;
    let serialized = serde_json::to_string_pretty(&state).expect("serialize state");
    let restored: DimsState = serde_json::from_str(&serialized).expect("deserialize state");
    assert_eq!(restored, state);
}

#[test]
fn validate_rejects_non_permutations() {
    let state = DimsState::new(3);
    assert!(matches!(
        state.validate_order(&[0, 0, 1]),
        Err(CoreError::InvalidOrder { .. })
    ));
    assert_eq!(
        state.validate_order(&[0, 1, 7]),
        Err(CoreError::AxisOutOfRange { axis: 7, ndim: 3 })
    );
    assert!(matches!(
        state.validate_order(&[0, 1]),
        Err(CoreError::LengthMismatch { field: "order", .. })
    ));
}

#[test]
fn validate_rejects_bad_ndisplay_and_lengths() {
    let mut state = DimsState::new(3);
    state.ndisplay = 4;
    assert_eq!(state.validate(), Err(CoreError::InvalidNdisplay(4)));

    let mut state = DimsState::new(3);
    state.rollable.pop();
    assert!(matches!(
        state.validate(),
        Err(CoreError::LengthMismatch { field: "rollable", .. })
    ));
}

#[test]
fn displayed_axes_are_the_tail_of_the_order() {
    let mut state = DimsState::new(4);
    state.order = vec![2, 0, 3, 1];
    assert_eq!(state.displayed(), vec![3, 1]);
    assert_eq!(state.not_displayed(), vec![2, 0]);

    state.ndisplay = 3;
    assert_eq!(state.displayed(), vec![0, 3, 1]);
}

#[test]
fn displayed_handles_fewer_axes_than_ndisplay() {
    let state = DimsState::new(1);
    assert_eq!(state.displayed(), vec![0]);
    assert!(state.not_displayed().is_empty());
}

#[test]
fn roll_rotates_all_unlocked_axes() {
    let state = DimsState::new(4);
    assert_eq!(state.rolled_order(), vec![3, 0, 1, 2]);
}

#[test]
fn roll_keeps_locked_axes_in_place() {
    let state = locked(DimsState::new(4), &[1]);
    assert_eq!(state.rolled_order(), vec![3, 1, 0, 2]);
    assert_eq!(state.locked_axes(), vec![1]);
}

#[test]
fn roll_with_single_unlocked_axis_is_identity() {
    let state = locked(DimsState::new(3), &[0, 2]);
    assert_eq!(state.rolled_order(), vec![0, 1, 2]);
}

#[test]
fn transpose_swaps_displayed_axes_unless_locked() {
    let state = DimsState::new(4);
    assert_eq!(state.transposed_order(), Some(vec![0, 1, 3, 2]));

    let state = locked(DimsState::new(4), &[3]);
    assert_eq!(state.transposed_order(), None);
    assert_eq!(DimsState::new(1).transposed_order(), None);
}

#[test]
fn resize_up_prepends_new_axes() {
    let mut state = DimsState::new(2);
    state.order = vec![1, 0];
    state.rollable = vec![false, true];
    let grown = state.resized(4);
    assert_eq!(grown.order, vec![0, 1, 3, 2]);
    assert_eq!(grown.rollable, vec![true, true, false, true]);
    assert_eq!(grown.axis_labels, vec!["0", "1", "2", "3"]);
    assert!(grown.validate().is_ok());
}

#[test]
fn resize_down_keeps_the_tail_of_the_order() {
    let mut state = DimsState::new(4);
    state.order = vec![3, 0, 2, 1];
    state.axis_labels = vec!["t".into(), "z".into(), "y".into(), "x".into()];
    let shrunk = state.resized(2);
    assert_eq!(shrunk.order, vec![1, 0]);
    assert_eq!(shrunk.axis_labels, vec!["z", "y"]);
    assert!(shrunk.validate().is_ok());
}

#[test]
fn resize_down_reranks_surviving_axes() {
    let mut state = locked(DimsState::new(4), &[3]);
    state.order = vec![2, 0, 3, 1];
    state.axis_labels = vec!["t".into(), "z".into(), "y".into(), "x".into()];
    let shrunk = state.resized(2);
    assert_eq!(shrunk.order, vec![1, 0]);
    assert_eq!(shrunk.rollable, vec![true, false]);
    assert_eq!(shrunk.axis_labels, vec!["z", "x"]);
    assert!(shrunk.validate().is_ok());

    let defaults = DimsState {
        order: vec![2, 0, 3, 1],
        ..DimsState::new(4)
    }
    .resized(3);
    assert_eq!(defaults.order, vec![0, 2, 1]);
    assert_eq!(defaults.axis_labels, vec!["0", "1", "2"]);
}

#[test]
fn dims_set_order_emits_only_on_change() {
    let dims = Dims::new(3);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = dims
        .events
        .order
        .connect(move |order| sink.borrow_mut().push(order.clone()));

    assert!(dims.set_order(&[2, 0, 1]).expect("valid order"));
    assert!(!dims.set_order(&[2, 0, 1]).expect("same order"));
    assert!(dims.set_order(&[2, 2, 1]).is_err());
    assert_eq!(dims.order(), vec![2, 0, 1]);
    assert_eq!(*seen.borrow(), vec![vec![2, 0, 1]]);
}

#[test]
fn dims_accepts_axis_models_as_order() {
    let dims = Dims::new(3);
    let axes = vec![
        AxisModel::new(1, "1", true),
        AxisModel::new(2, "2", true),
        AxisModel::new(0, "0", true),
    ];
    assert!(dims.set_order_from_axes(&axes).expect("valid"));
    assert_eq!(dims.order(), vec![1, 2, 0]);
}

#[test]
fn dims_lock_flag_emits_snapshot() {
    let dims = Dims::new(3);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = dims
        .events
        .rollable
        .connect(move |rollable| sink.borrow_mut().push(rollable.clone()));

    assert!(dims.set_axis_rollable(1, false).expect("axis exists"));
    assert!(!dims.set_axis_rollable(1, false).expect("axis exists"));
    assert!(dims.set_axis_rollable(5, false).is_err());
    assert_eq!(*seen.borrow(), vec![vec![true, false, true]]);
}

#[test]
fn dims_set_ndim_emits_ndim_then_order() {
    let dims = Dims::new(2);
    let log = Rc::new(RefCell::new(Vec::new()));
    let ndim_log = Rc::clone(&log);
    let order_log = Rc::clone(&log);
    let _ndim = dims
        .events
        .ndim
        .connect(move |ndim| ndim_log.borrow_mut().push(format!("ndim {ndim}")));
    let _order = dims
        .events
        .order
        .connect(move |order| order_log.borrow_mut().push(format!("order {order:?}")));

    assert!(dims.set_ndim(3));
    assert!(!dims.set_ndim(3));
    assert_eq!(*log.borrow(), vec!["ndim 3", "order [0, 1, 2]"]);
}

#[test]
fn dims_roll_and_transpose_go_through_set_order() {
    let dims = Dims::new(3);
    assert!(dims.roll());
    assert_eq!(dims.order(), vec![2, 0, 1]);
    assert!(dims.transpose());
    assert_eq!(dims.order(), vec![2, 1, 0]);
}

#[test]
fn state_file_roundtrip_json_and_yaml() {
    let dir = tempdir().expect("tempdir");
    let mut state = DimsState::new(3);
    state.order = vec![1, 2, 0];
    state.rollable[2] = false;
    for name in ["dims.json", "dims.yaml"] {
        let path = dir.path().join(name);
        save_state(&path, &state).expect("save state");
        assert_eq!(load_state(&path).expect("load state"), state);
    }
}

#[test]
fn minimal_state_file_gets_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dims.yml");
    std::fs::write(&path, "ndim: 3\n").expect("write state");
    let state = load_state(&path).expect("load state");
    assert_eq!(state, DimsState::new(3));
}

#[test]
fn invalid_state_file_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dims.json");
    std::fs::write(&path, r#"{"ndim": 2, "order": [0, 0]}"#).expect("write state");
    assert!(load_state(&path).is_err());
}
