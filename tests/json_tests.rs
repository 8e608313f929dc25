mod common;

use std::env;
use std::fs;
use std::path::PathBuf;

use common::{center_obstacle_grid, grid_from_ascii};
use gridvis::compare::compare_maps;
use gridvis::persist::{load_map, save_map};
use gridvis::compute_visibility;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("gridvis_{}_{}.json", name, std::process::id()))
}

#[test]
fn save_then_load_round_trips() {
    let grid = center_obstacle_grid();
    let map = compute_visibility(&grid, 2).unwrap();

    let path = temp_path("round_trip");
    save_map(&map, &path).unwrap();
    let loaded = load_map(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(loaded, map);
}

#[test]
fn serialized_output_is_stable_across_worker_counts() {
    let grid = grid_from_ascii(&[
        "....", //
        ".#..", //
        "....",
    ]);
    let path_a = temp_path("stable_a");
    let path_b = temp_path("stable_b");

    save_map(&compute_visibility(&grid, 1).unwrap(), &path_a).unwrap();
    save_map(&compute_visibility(&grid, 3).unwrap(), &path_b).unwrap();

    let bytes_a = fs::read(&path_a).unwrap();
    let bytes_b = fs::read(&path_b).unwrap();
    fs::remove_file(&path_a).ok();
    fs::remove_file(&path_b).ok();

    // Sorted keys and sorted value lists: identical maps, identical bytes.
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn wire_format_is_flat_string_keyed_json() {
    let grid = grid_from_ascii(&["..", ".#"]);
    let map = compute_visibility(&grid, 1).unwrap();

    let path = temp_path("wire_format");
    save_map(&map, &path).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).ok();

    let obj = raw.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert!(obj.contains_key("(0, 0)"));
    assert!(obj.contains_key("(1, 1)"));
    // Values are arrays of [x, y] pairs; the blocked cell's is empty.
    assert!(obj["(1, 1)"].as_array().unwrap().is_empty());
    for pair in obj["(0, 0)"].as_array().unwrap() {
        assert_eq!(pair.as_array().unwrap().len(), 2);
    }
}

#[test]
fn compare_detects_divergent_artifacts() {
    let grid = center_obstacle_grid();
    let map = compute_visibility(&grid, 2).unwrap();

    let path_a = temp_path("diff_a");
    let path_b = temp_path("diff_b");
    save_map(&map, &path_a).unwrap();

    // Tamper with one value list to simulate a divergent implementation.
    let mut raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path_a).unwrap()).unwrap();
    raw.as_object_mut().unwrap()["(0, 0)"] = serde_json::json!([[0, 0]]);
    fs::write(&path_b, raw.to_string()).unwrap();

    let first = load_map(&path_a).unwrap();
    let second = load_map(&path_b).unwrap();
    fs::remove_file(&path_a).ok();
    fs::remove_file(&path_b).ok();

    let diff = compare_maps(&first, &second);
    assert_eq!(diff.differing, vec![(0, 0)]);
    assert!(diff.only_in_first.is_empty());
    assert!(diff.only_in_second.is_empty());
}

#[test]
fn compare_reports_missing_keys() {
    let grid = grid_from_ascii(&["...", "..."]);
    let map = compute_visibility(&grid, 1).unwrap();

    let path_a = temp_path("missing_a");
    let path_b = temp_path("missing_b");
    save_map(&map, &path_a).unwrap();

    let mut raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path_a).unwrap()).unwrap();
    raw.as_object_mut().unwrap().remove("(2, 1)");
    fs::write(&path_b, raw.to_string()).unwrap();

    let first = load_map(&path_a).unwrap();
    let second = load_map(&path_b).unwrap();
    fs::remove_file(&path_a).ok();
    fs::remove_file(&path_b).ok();

    let diff = compare_maps(&first, &second);
    assert_eq!(diff.only_in_first, vec![(2, 1)]);
    assert!(diff.only_in_second.is_empty());
    assert!(diff.differing.is_empty());
}
