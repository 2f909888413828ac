use super::bind_input;
use bodylover_frontend_common::{use_api, use_session, Route, SessionAction};
use bodylover_http::types::LoginRequest;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();

    let account_id = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_submit = {
        let account_id = account_id.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = LoginRequest {
                account_id: (*account_id).clone(),
                password: (*password).clone(),
            };
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api.login(&request).await {
                    Ok(mut user) => {
                        // Never keep credentials in browser storage
                        user.password = None;
                        let target = Route::dashboard_for(user.mode);

                        match serde_json::to_value(&user) {
                            Ok(record) => {
                                session.dispatch(SessionAction::SetUser(record));
                                error.set(None);
                                if let Some(navigator) = navigator {
                                    navigator.push(&target);
                                }
                            }
                            Err(err) => error.set(Some(err.to_string())),
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
            <h1>{"Log in"}</h1>
            <input
                type="text"
                placeholder="Account ID"
                value={(*account_id).clone()}
                oninput={bind_input(&account_id)}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={bind_input(&password)}
            />
            if let Some(message) = &*error {
                <p class="error">{message}</p>
            }
            <button type="submit" disabled={*submitting}>{"Log in"}</button>
            <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
        </form>
    }
}
