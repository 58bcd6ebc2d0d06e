pub mod cta_button;
pub mod nav_link;
pub mod reveal;
pub mod team_carousel;
pub mod theme_switcher;
pub mod video_modal;
