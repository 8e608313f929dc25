use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::engine::VisibilityMap;
use crate::error::VisError;
use crate::grid::Cell;

/// Encode a cell as its canonical map key, `"(x, y)"`.
pub fn encode_key(cell: Cell) -> String {
    format!("({}, {})", cell.0, cell.1)
}

/// Parse a `"(x, y)"` key (bare `"x,y"` is also accepted) back to a cell.
pub fn decode_key(key: &str) -> Result<Cell, VisError> {
    let inner = key.trim().trim_start_matches('(').trim_end_matches(')');
    let mut parts = inner.split(',');
    let parse = |part: Option<&str>| -> Option<i32> { part?.trim().parse().ok() };
    match (parse(parts.next()), parse(parts.next()), parts.next()) {
        (Some(x), Some(y), None) => Ok((x, y)),
        _ => Err(VisError::Config(format!("malformed cell key '{}'", key))),
    }
}

/// Serialize a visibility map as one flat JSON object: `"(x, y)"` keys,
/// values as arrays of `[x, y]` pairs. No nesting, no metadata envelope.
///
/// Keys and value lists are written sorted, so identical maps produce
/// byte-identical files regardless of worker count or hash order.
pub fn save_map(map: &VisibilityMap, path: impl AsRef<Path>) -> Result<(), VisError> {
    let mut out: BTreeMap<String, Vec<Cell>> = BTreeMap::new();
    for (&cell, visible) in map.iter() {
        let mut cells: Vec<Cell> = visible.iter().copied().collect();
        cells.sort();
        out.insert(encode_key(cell), cells);
    }
    let data = serde_json::to_string(&out)?;
    fs::write(path, data)?;
    Ok(())
}

/// Decode a visibility map artifact written by `save_map` (or by another
/// implementation using the same wire format).
pub fn load_map(path: impl AsRef<Path>) -> Result<VisibilityMap, VisError> {
    let contents = fs::read_to_string(path)?;
    let raw: HashMap<String, Vec<Cell>> = serde_json::from_str(&contents)?;
    let mut entries: HashMap<Cell, HashSet<Cell>> = HashMap::with_capacity(raw.len());
    for (key, cells) in raw {
        let cell = decode_key(&key)?;
        if entries.insert(cell, cells.into_iter().collect()).is_some() {
            return Err(VisError::Invariant(format!(
                "duplicate cell key for ({}, {})",
                cell.0, cell.1
            )));
        }
    }
    Ok(VisibilityMap::from(entries))
}
