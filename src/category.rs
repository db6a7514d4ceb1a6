//! Node role bitmask for targeted command dispatch.
//!
//! Every scene node reports a [`Category`]; a command carries a category
//! filter and is executed against a node iff the two masks intersect.
//! Filtering by bit layers keeps dispatch a single AND per node.

use bitflags::bitflags;

bitflags! {
    /// Power-of-two role flags. A node's category is fixed by its kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        /// Plain scene structure (containers, backgrounds).
        const SCENE = 1 << 0;
        /// The single player-controlled aircraft.
        const PLAYER_AIRCRAFT = 1 << 1;
        /// Escort aircraft that ignore player input.
        const ALLIED_AIRCRAFT = 1 << 2;
        /// Hostile aircraft.
        const ENEMY_AIRCRAFT = 1 << 3;
    }
}

impl Category {
    /// Matches nothing.
    pub const NONE: Category = Category::empty();
}
