/// Where the call-to-action buttons send people. Overridable at build time
/// through `LUDERA_FORM_URL`.
pub fn form_url() -> &'static str {
    option_env!("LUDERA_FORM_URL").unwrap_or("https://forms.gle/KX5mJ3BDjRpZsDBV9")
}

pub fn promo_video_src() -> &'static str {
    option_env!("LUDERA_VIDEO_SRC").unwrap_or("videos/ludera-demo.mp4")
}

pub const THEME_STORAGE_KEY: &str = "ludera-theme";
pub const DEFAULT_THEME: &str = "default";

/// (id, label) for every theme the switcher offers.
pub const THEMES: &[(&str, &str)] = &[
    ("default", "Classic"),
    ("neon", "Neon"),
    ("pastel", "Pastel"),
];

pub const CTA_COOLDOWN_MS: u32 = 1_000;
pub const SWIPE_THRESHOLD: f64 = 50.0;
pub const WINDOW_SIZE: usize = 4;
