//! Asset path keys.
//!
//! Keys double as filesystem paths relative to the crate root.

pub mod textures {
    pub const SPACE: &str = "assets/textures/space.png";
    pub const EAGLE: &str = "assets/textures/eagle.png";
    pub const RAPTOR: &str = "assets/textures/raptor.png";
    pub const MENU: &str = "assets/textures/menu.png";
}

pub mod fonts {
    pub const MONO: &str = "assets/fonts/mono.ttf";
}
