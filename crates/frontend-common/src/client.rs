//! API client context
//!
//! The client is built once at bootstrap and handed to views through context.

use bodylover_http::ApiClient;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the application's [`ApiClient`]
#[derive(Clone)]
pub struct ApiHandle(Rc<ApiClient>);

impl ApiHandle {
    pub fn new(client: ApiClient) -> Self {
        Self(Rc::new(client))
    }
}

impl Deref for ApiHandle {
    type Target = ApiClient;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub client: ApiHandle,
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    html! {
        <ContextProvider<ApiHandle> context={props.client.clone()}>
            {props.children.clone()}
        </ContextProvider<ApiHandle>>
    }
}

/// Hook to use the API client
#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
        .expect("ApiHandle not found. Make sure to wrap your component with ApiProvider")
}
