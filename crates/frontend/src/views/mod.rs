mod dashboard;
mod login;
mod not_found;
mod register;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;

use bodylover_frontend_common::ViewSet;
use bodylover_http::types::UserMode;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Views registered in the route table
pub struct AppViews;

impl ViewSet for AppViews {
    type View = Html;

    fn login(&self) -> Html {
        html! { <Login /> }
    }

    fn register(&self) -> Html {
        html! { <Register /> }
    }

    fn dashboard(&self, mode: UserMode) -> Html {
        html! { <Dashboard {mode} /> }
    }

    fn not_found(&self) -> Html {
        html! { <NotFound /> }
    }
}

/// Keep a text field's value in `state`
fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
