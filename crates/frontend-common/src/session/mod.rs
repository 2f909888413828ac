//! Client-side user session

pub mod context;
pub mod store;

pub use context::{
    use_is_logged_in, use_session, use_user_info, SessionAction, SessionContext, SessionProvider,
};
pub use store::{SessionState, SessionStore};
