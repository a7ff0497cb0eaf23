pub mod group;
pub mod task;
pub mod timescale;

pub use group::*;
pub use task::*;
pub use timescale::*;
