pub mod scores;

pub use scores::{consts::*, normalize, terminal};

/// The deepest a search can go, since each ply fills a cell.
pub const MAXIMUM_PLY: usize = crate::board::consts::SIZE;
