// Scroll depth after which the fixed header gains its backdrop.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

// How long the contact form success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

pub const CONTACT_EMAIL: &str = "contact@anvithatech.com";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";
pub const OFFICE_ADDRESS: &str = "123 Tech Street, Silicon Valley, CA 94041";
pub const OFFICE_HOURS: &str = "Monday - Friday: 9:00 AM - 6:00 PM PST";

#[cfg(debug_assertions)]
pub fn submit_latency_ms() -> u32 {
    300 // Keep the dev loop quick
}

#[cfg(not(debug_assertions))]
pub fn submit_latency_ms() -> u32 {
    1_000
}
