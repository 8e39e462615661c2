pub const CONTACT_EMAIL: &str = "contact@renderra.agency";
pub const STUDIO_NAME: &str = "Renderra";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
