use log::Level;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug; // Verbose console output when running locally

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;

pub const PRODUCT_NAME: &str = "RoBoost V2";

pub const SUPPORT_EMAIL: &str = "support@roboost.com";
pub const SUPPORT_SUBJECT: &str = "RoBoost V2 Support Request";

// Navigation
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLLED_THRESHOLD: f64 = 100.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const HEADER_BG_TOP: &str = "rgba(31, 41, 55, 0.95)";
pub const HEADER_BG_SCROLLED: &str = "rgba(31, 41, 55, 0.98)";

// Hero
pub const HERO_FILL_DELAY_MS: u32 = 1000;
pub const HERO_LABEL_DELAY_MS: u32 = 2000;

// Download modal
pub const STEP_INTERVAL_MS: u32 = 800;
pub const FINALIZE_DELAY_MS: u32 = 1000;
pub const CLOSE_DELAY_MS: u32 = 2000;

// Toasts
pub const TOAST_ENTER_MS: u32 = 100;
pub const TOAST_DISPLAY_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;

// Scroll-triggered animations
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PROGRESS_THRESHOLD: f64 = 0.5;
pub const PROGRESS_FILL_DELAY_MS: u32 = 200;
