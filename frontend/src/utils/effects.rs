//! Pure helpers behind the page's scroll-driven effects.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxShape {
    /// Vertical pixels moved per scrolled pixel.
    pub speed: f64,
    /// Degrees rotated per scrolled pixel.
    pub spin: f64,
}

pub const PUZZLE: ParallaxShape = ParallaxShape { speed: 0.3, spin: 0.05 };
pub const DONUT: ParallaxShape = ParallaxShape { speed: 0.4, spin: -0.05 };

pub fn shape_transform(scroll_y: f64, shape: ParallaxShape) -> String {
    format!(
        "translateY({:.2}px) rotate({:.2}deg)",
        scroll_y * shape.speed,
        scroll_y * shape.spin
    )
}

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn reveal_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

/// Element id an in-page link points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
