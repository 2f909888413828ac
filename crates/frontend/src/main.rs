mod app;
mod logging;
mod views;

use app::{App, AppProps};
use bodylover_frontend_common::{ApiHandle, BrowserStorage, SessionStore};
use bodylover_http::ApiClient;
use std::rc::Rc;

fn main() {
    logging::init();

    let session = SessionStore::new(Rc::new(BrowserStorage));
    let client = match ApiClient::new() {
        Ok(client) => ApiHandle::new(client),
        Err(err) => {
            tracing::error!(error = %err, "Failed to build API client");
            return;
        }
    };

    yew::Renderer::<App>::with_props(AppProps { session, client }).render();
}
