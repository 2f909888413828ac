pub mod client;
pub mod config;
pub mod router;
pub mod session;
pub mod storage;

pub use client::{use_api, ApiHandle, ApiProvider};
pub use config::SessionConfig;
pub use router::{
    app_routes, navigate, Navigation, Resolved, Route, RouteError, RouteTable, ViewSet,
};
pub use session::{
    use_is_logged_in, use_session, use_user_info, SessionAction, SessionContext, SessionProvider,
    SessionState, SessionStore,
};
pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage, StorageError};
