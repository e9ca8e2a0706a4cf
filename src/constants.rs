use std::time::Duration;

pub const SWIPE_THRESHOLD: f32 = 50.0;                            // Minimum drag distance for a slide change (pixels)
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Delay between automatic slide changes
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100); // Quiet period before a resize is applied
pub const TRANSITION_SETTLE: Duration = Duration::from_millis(50); // Delay before animation resumes after a resize
pub const TRANSITION_DURATION: f32 = 0.5;                         // Slide transition (seconds)

pub const REVEAL_THRESHOLD: f32 = 0.2;                            // Visible fraction that triggers a fade-in
pub const FADE_IN_DURATION: f32 = 0.6;                            // Fade-in animation (seconds)

pub const HOME_PAGE_ID: &str = "home-page";
pub const DEFAULT_TAB_ID: &str = "whiskey-content";

pub const WINDOW_WIDTH: i32 = 1280;                               // Default preview window width
pub const WINDOW_HEIGHT: i32 = 800;                               // Default preview window height
pub const FPS: u32 = 60;                                          // Frames per second

pub const HEADER_HEIGHT: f32 = 72.0;                              // Fixed header above the page
pub const TITLE_HEIGHT: f32 = 80.0;                               // Page title block
pub const HERO_HEIGHT: f32 = 360.0;                               // Hero image slider block
pub const TESTIMONIALS_HEIGHT: f32 = 240.0;                       // Testimonial carousel block
pub const TABS_HEIGHT: f32 = 320.0;                               // Tab buttons plus active panel
pub const BLOCK_GAP: f32 = 32.0;                                  // Vertical space between blocks
pub const MOBILE_BREAKPOINT: f32 = 720.0;                         // Narrower windows collapse the nav
