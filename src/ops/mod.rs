pub mod sort;

pub use sort::{sort_all_groups, sort_group_tasks};
