
#[cfg(debug_assertions)]
pub fn get_firestore_url() -> &'static str {
    "http://localhost:8080"  // Firestore emulator when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_firestore_url() -> &'static str {
    "https://firestore.googleapis.com"
}

pub fn firebase_project_id() -> &'static str {
    option_env!("FYTLYF_FIREBASE_PROJECT_ID").unwrap_or("fytlyf-prereg")
}

pub fn firebase_api_key() -> Option<&'static str> {
    option_env!("FYTLYF_FIREBASE_API_KEY").filter(|key| !key.is_empty())
}

pub const REGISTRATIONS_COLLECTION: &str = "registrations";

// localStorage keys
pub const THEME_KEY: &str = "theme";
pub const REGISTRATION_KEY: &str = "fyt_registration";

/// Founder pricing ends and registrations close at this wall-clock time in India.
pub const LAUNCH_TARGET: (i32, u32, u32, u32, u32, u32) = (2025, 12, 31, 23, 59, 59);

pub const TOAST_MILLIS: u32 = 3500;
pub const COUNTDOWN_TICK_MILLIS: u32 = 1000;

pub const CONTACT_EMAIL: &str = "founder@fytlyf.in";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/_fyt_lyf?igsh=Nm1vY2VhZDYzMzJ0";
