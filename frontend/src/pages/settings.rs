use yew::prelude::*;

use crate::hooks::use_session;

#[function_component(Settings)]
pub fn settings() -> Html {
    let session = use_session();

    html! {
        <div class="container">
            <h2>{ "Settings" }</h2>
            if let Some(user) = session.user {
                <p>{ format!("Email: {}", user.email.unwrap_or_default()) }</p>
                <p>{ format!("Role: {}", session.role.role.as_str()) }</p>
            } else {
                <p>{ "Sign in to manage your account." }</p>
            }
        </div>
    }
}
