use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "Nothing to see here" }</h2>
                <p>{ "This page isn't part of FriendLens. Your assessment is still waiting for you." }</p>
                <Link<Route> to={Route::Survey}>
                    <button class="btn btn-primary">{ "Take the assessment" }</button>
                </Link<Route>>
                { " " }
                <Link<Route> to={Route::Home}>{ "Back to FriendLens" }</Link<Route>>
            </div>
        </div>
    }
}
