//! Frontend configuration

/// Session persistence configuration
pub struct SessionConfig;

impl SessionConfig {
    /// localStorage key holding the JSON user record
    pub const USER_KEY: &'static str = "user";
}
