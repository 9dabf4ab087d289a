//! Sort descriptors and the click-driven sort state.

mod descriptor;
mod state;

pub use descriptor::{Direction, SortDescriptor};
pub use state::{SortIndicator, SortState};
