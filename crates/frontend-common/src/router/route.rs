//! Application routes

use bodylover_http::types::UserMode;
use yew_router::prelude::*;

/// Paths the shell answers on, served with browser path history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/teenager")]
    Teenager,
    #[at("/adult")]
    Adult,
    #[at("/senior")]
    Senior,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Dashboard matching a user's age tier; login when the tier is unknown
    pub fn dashboard_for(mode: Option<UserMode>) -> Self {
        match mode {
            Some(UserMode::Teenager) => Self::Teenager,
            Some(UserMode::Adult) => Self::Adult,
            Some(UserMode::Senior) => Self::Senior,
            Some(UserMode::Unknown) | None => Self::Login,
        }
    }
}
