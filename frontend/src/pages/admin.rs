use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;

#[function_component(Admin)]
pub fn admin() -> Html {
    let session = use_session();

    // Nothing admin-only renders until the role has settled
    if session.role.loading {
        return html! {
            <div class="container">
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            </div>
        };
    }

    if !session.role.is_admin() {
        return html! {
            <div class="container">
                <div class="empty-state">
                    <h2>{ "Access denied" }</h2>
                    <p>{ "This page is only available to administrators." }</p>
                    <Link<Route> to={Route::Home}>
                        <button class="btn btn-primary">{ "Go Home" }</button>
                    </Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="container">
            <h2>{ "Admin" }</h2>
            <p>{ "Manage assessments and review submitted results." }</p>
        </div>
    }
}
