use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();

    let Some(user) = session.user.clone() else {
        return html! {
            <div class="container">
                <div class="empty-state">
                    <h2>{ "Welcome to FriendLens" }</h2>
                    <p>{ "Open the sign-in link from your email to get started." }</p>
                </div>
            </div>
        };
    };

    let greeting = match &user.email {
        Some(email) => format!("Signed in as {}", email),
        None => "Signed in".to_string(),
    };

    html! {
        <div class="container">
            <h2>{ "FriendLens" }</h2>
            <p>{ greeting }</p>
            if session.has_completed_assessment {
                <Link<Route> to={Route::Results}>
                    <button class="btn btn-primary">{ "View your results" }</button>
                </Link<Route>>
            } else {
                <Link<Route> to={Route::Survey}>
                    <button class="btn btn-primary">{ "Take the assessment" }</button>
                </Link<Route>>
            }
            if session.role.is_admin() {
                <p>
                    <Link<Route> to={Route::Admin}>{ "Admin" }</Link<Route>>
                </p>
            }
        </div>
    }
}
