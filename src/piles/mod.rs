//! Ordered card piles shared by every zone on the table.

pub mod pile;

pub use pile::{Pile, Run};
