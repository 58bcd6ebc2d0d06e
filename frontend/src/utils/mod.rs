pub mod carousel;
pub mod effects;
pub mod media;
pub mod roster;
pub mod theme;
