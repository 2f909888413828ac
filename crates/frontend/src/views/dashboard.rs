//! Age-tiered dashboard placeholders

use bodylover_frontend_common::{use_session, Route, SessionAction};
use bodylover_http::types::{User, UserMode};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub mode: UserMode,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let user: Option<User> = session.user_as();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let title = match props.mode {
        UserMode::Teenager => "Teenager Dashboard",
        UserMode::Adult => "Adult Dashboard",
        UserMode::Senior => "Senior Dashboard",
        UserMode::Unknown => "Dashboard",
    };

    html! {
        <div class="dashboard">
            <h1>{title}</h1>
            if let Some(user) = user {
                <p>{format!("Welcome, {}", user.username)}</p>
            }
            <p>{"Coming soon."}</p>
            <button onclick={on_logout}>{"Log out"}</button>
        </div>
    }
}
