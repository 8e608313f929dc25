use std::env;
use std::process;

use gridvis::compare::compare_maps;
use gridvis::persist::{encode_key, load_map};

/// Diff two visibility map JSON artifacts, typically produced by different
/// implementations of the same engine. Exit code 0 means the maps match.
fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: compare_maps <first.json> <second.json>");
        process::exit(2);
    }

    let first = load_map(&args[1]).unwrap_or_else(|e| {
        eprintln!("Error loading '{}': {}", args[1], e);
        process::exit(1);
    });
    let second = load_map(&args[2]).unwrap_or_else(|e| {
        eprintln!("Error loading '{}': {}", args[2], e);
        process::exit(1);
    });

    let diff = compare_maps(&first, &second);
    if diff.is_empty() {
        println!("Maps match: {} cells", first.len());
        return;
    }

    if !diff.only_in_first.is_empty() {
        println!("{} keys only in '{}':", diff.only_in_first.len(), args[1]);
        for &cell in diff.only_in_first.iter().take(10) {
            println!("  {}", encode_key(cell));
        }
    }
    if !diff.only_in_second.is_empty() {
        println!("{} keys only in '{}':", diff.only_in_second.len(), args[2]);
        for &cell in diff.only_in_second.iter().take(10) {
            println!("  {}", encode_key(cell));
        }
    }
    if !diff.differing.is_empty() {
        println!("{} keys with differing visible sets", diff.differing.len());

        // One worked example, with both sides sorted for readability.
        let cell = diff.differing[0];
        let sorted = |map: &gridvis::VisibilityMap| {
            let mut cells: Vec<_> = map.get(cell).into_iter().flatten().copied().collect();
            cells.sort();
            cells
        };
        println!("Example key: {}", encode_key(cell));
        println!("  {}: {:?}", args[1], sorted(&first));
        println!("  {}: {:?}", args[2], sorted(&second));
    }

    process::exit(1);
}
