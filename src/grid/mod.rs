//! Grid model, measurement and rendering

pub mod border;
pub mod cell;
pub mod layout;
pub mod renderer;

pub use border::{BorderSet, Junctions, ASCII_BORDERS, UNICODE_BORDERS};
pub use cell::{Cell, Grid};
pub use layout::Layout;
pub use renderer::{format_grid, GridLog};
