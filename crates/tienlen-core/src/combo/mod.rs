pub mod combination;
pub mod compare;
pub mod finder;

pub use combination::{Combination, CombinationKind, Strength};
pub use compare::can_beat;
pub use finder::{classify, find_all_combinations};
