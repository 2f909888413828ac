//! Session context and provider

use super::store::SessionStore;
use serde_json::Value;
use std::rc::Rc;
use yew::prelude::*;

/// Session context actions
pub enum SessionAction {
    SetUser(Value),
    Logout,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionStore>;

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::SetUser(user) => next.set_user(user),
            SessionAction::Logout => next.logout(),
        }
        Rc::new(next)
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Store built once at bootstrap
    pub store: SessionStore,
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = props.store.clone();
    let session = use_reducer(move || store);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if a user is logged in
#[hook]
pub fn use_is_logged_in() -> bool {
    let session = use_session();
    session.is_logged_in()
}

/// Hook to get the current user record
#[hook]
pub fn use_user_info() -> Option<Value> {
    let session = use_session();
    session.user_info().cloned()
}
