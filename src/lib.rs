pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod loader;
pub mod partition;
pub mod persist;
pub mod probe;
pub mod ray;
pub mod worker;

pub use engine::{compute_visibility, VisibilityMap};
pub use error::VisError;
pub use grid::{Cell, Grid};
pub use probe::{probe, visible_between, ProbeResult};
pub use ray::trace;
