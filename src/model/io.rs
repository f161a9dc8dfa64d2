use std::fs;
use std::path::Path;

use super::{DimsState, StateIoError};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_state(path: impl AsRef<Path>) -> Result<DimsState, StateIoError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let mut state = if is_yaml(path) {
        serde_yaml::from_str::<DimsState>(&raw)?
    } else {
        serde_json::from_str::<DimsState>(&raw)?
    };
    state.fill_defaults();
    state.validate()?;
    Ok(state)
}

pub fn save_state(path: impl AsRef<Path>, state: &DimsState) -> Result<(), StateIoError> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(state)?
    } else {
        serde_json::to_string_pretty(state)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
