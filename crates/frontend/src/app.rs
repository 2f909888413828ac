use crate::views::AppViews;
use bodylover_frontend_common::{
    ApiHandle, ApiProvider, Navigation, Route, RouteTable, SessionProvider, SessionStore,
    app_routes, navigate,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub session: SessionStore,
    pub client: ApiHandle,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let routes = use_memo((), |_| app_routes(Rc::new(AppViews)));

    let render = {
        let routes = routes.clone();
        Callback::from(move |route: Route| switch(&routes, route))
    };

    html! {
        <ApiProvider client={props.client.clone()}>
            <SessionProvider store={props.session.clone()}>
                <BrowserRouter>
                    <Switch<Route> {render} />
                </BrowserRouter>
            </SessionProvider>
        </ApiProvider>
    }
}

fn switch(routes: &RouteTable<Html>, route: Route) -> Html {
    match navigate(routes, route) {
        Ok(Navigation::Show(view)) => view,
        // Redirect entries move the address bar as well as the view
        Ok(Navigation::Redirect(target)) => html! { <Redirect<Route> to={target} /> },
        Err(err) => {
            tracing::error!(error = %err, "Unroutable path");
            Html::default()
        }
    }
}
