//! Data types shared by the layout, scaling and grid stages.

mod geometry;
mod layout;
mod placement;

pub use geometry::*;
pub use layout::*;
pub use placement::*;
