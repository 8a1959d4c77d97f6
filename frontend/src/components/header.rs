use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::storage::token_storage;

#[function_component(Header)]
pub fn header() -> Html {
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        let navigator = navigator.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ApiService::logout().await {
                tracing::error!("Logout failed: {:?}", e);
            }
            // Local credentials go regardless of what the server said
            token_storage().clear();
            if let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    });

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "FriendLens" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Survey}>{ "Survey" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Results}>{ "Results" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Settings}>{ "Settings" }</Link<Route>>
                    { " | " }
                    <button class="btn btn-link" onclick={on_logout}>{ "Log out" }</button>
                </nav>
            </div>
        </header>
    }
}
