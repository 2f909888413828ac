//! Routing for the web shell
//!
//! [`Route`] is what yew-router recognizes in the address bar. [`app_routes`]
//! builds the table that decides which view each route shows: `/` redirects
//! to `/login`, Login and Register are built up front, and the three
//! dashboards are deferred until first visited.

pub mod route;
pub mod table;

pub use route::Route;
pub use table::{Resolved, RouteError, RouteTable};

use bodylover_http::types::UserMode;
use std::rc::Rc;
use yew_router::Routable;

/// Views the application registers in its route table
pub trait ViewSet {
    type View: Clone + 'static;

    fn login(&self) -> Self::View;
    fn register(&self) -> Self::View;
    /// Placeholder dashboard for an age tier
    fn dashboard(&self, mode: UserMode) -> Self::View;
    fn not_found(&self) -> Self::View;
}

/// What the router should do for a recognized route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<V> {
    /// Render the view registered for the route
    Show(V),
    /// The table redirected; move the address bar to this route
    Redirect(Route),
}

/// Resolve `route` through `table` and decide between rendering and redirecting
pub fn navigate<V: Clone>(
    table: &RouteTable<V>,
    route: Route,
) -> Result<Navigation<V>, RouteError> {
    let requested = route.to_path();
    let resolved = table.resolve(&requested)?;

    if resolved.path == requested {
        return Ok(Navigation::Show(resolved.view));
    }
    Ok(match Route::recognize(&resolved.path) {
        Some(target) => Navigation::Redirect(target),
        None => Navigation::Show(resolved.view),
    })
}

/// Build the application's route table
pub fn app_routes<S: ViewSet + 'static>(views: Rc<S>) -> RouteTable<S::View> {
    let lazy_dashboard = |mode: UserMode| {
        let views = views.clone();
        move || views.dashboard(mode)
    };
    let not_found = {
        let views = views.clone();
        move || views.not_found()
    };

    RouteTable::new()
        .redirect(Route::Root.to_path(), Route::Login.to_path())
        .eager(Route::Login.to_path(), || views.login())
        .eager(Route::Register.to_path(), || views.register())
        .lazy(Route::Teenager.to_path(), lazy_dashboard(UserMode::Teenager))
        .lazy(Route::Adult.to_path(), lazy_dashboard(UserMode::Adult))
        .lazy(Route::Senior.to_path(), lazy_dashboard(UserMode::Senior))
        .fallback(not_found)
}
