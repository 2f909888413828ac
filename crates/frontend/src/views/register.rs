use super::bind_input;
use bodylover_frontend_common::{use_api, Route};
use bodylover_http::types::{RegisterRequest, UserMode};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn parse_mode(value: &str) -> UserMode {
    match value {
        "TEENAGER" => UserMode::Teenager,
        "SENIOR" => UserMode::Senior,
        _ => UserMode::Adult,
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    let api = use_api();
    let navigator = use_navigator();

    let account_id = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let age = use_state(String::new);
    let mode = use_state(|| UserMode::Adult);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            mode.set(parse_mode(&select.value()));
        })
    };

    let on_submit = {
        let account_id = account_id.clone();
        let username = username.clone();
        let password = password.clone();
        let age = age.clone();
        let mode = mode.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = RegisterRequest {
                account_id: (*account_id).clone(),
                username: (*username).clone(),
                password: (*password).clone(),
                mode: *mode,
                age: age.trim().parse().ok(),
            };
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api.register(&request).await {
                    Ok(_) => {
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <h1>{"Register"}</h1>
            <input
                type="text"
                placeholder="Account ID"
                value={(*account_id).clone()}
                oninput={bind_input(&account_id)}
            />
            <input
                type="text"
                placeholder="Nickname"
                value={(*username).clone()}
                oninput={bind_input(&username)}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={bind_input(&password)}
            />
            <input
                type="number"
                placeholder="Age"
                value={(*age).clone()}
                oninput={bind_input(&age)}
            />
            <select onchange={on_mode_change}>
                <option value="TEENAGER" selected={*mode == UserMode::Teenager}>{"Teenager"}</option>
                <option value="ADULT" selected={*mode == UserMode::Adult}>{"Adult"}</option>
                <option value="SENIOR" selected={*mode == UserMode::Senior}>{"Senior"}</option>
            </select>
            if let Some(message) = &*error {
                <p class="error">{message}</p>
            }
            <button type="submit" disabled={*submitting}>{"Register"}</button>
            <Link<Route> to={Route::Login}>{"Back to login"}</Link<Route>>
        </form>
    }
}
