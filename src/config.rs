use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll spy
pub const SCROLL_SPY_LOOKAHEAD: f64 = 100.0;
pub const SCROLL_SPY_DEBOUNCE_MS: u32 = 10;
pub const SECTION_SELECTOR: &str = "section[id]";

// Header and anchor scrolling
pub const HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
pub const FALLBACK_HEADER_HEIGHT: f64 = 80.0;
pub const SCROLL_TARGET_GAP: f64 = 20.0;

// Reveal animations
pub const REVEAL_SELECTOR: &str = ".card, .service__card, .team__member, .logo-placeholder";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const LOGO_PLACEHOLDER_SELECTOR: &str = ".logo-placeholder";

/// Delays of the simulated inquiry submission, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmissionTimings {
    pub latency_ms: u32,
    pub reveal_scroll_delay_ms: u32,
    pub success_display_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for SubmissionTimings {
    fn default() -> Self {
        Self {
            latency_ms: 1_500,
            reveal_scroll_delay_ms: 100,
            success_display_ms: 5_000,
            fade_out_ms: 300,
        }
    }
}
