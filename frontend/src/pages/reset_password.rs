use shared::api::UpdatePasswordRequest;
use shared::redirect::reset_access_token;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::navigation::snapshot;
use crate::services::storage::token_storage;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, PartialEq)]
enum Status {
    Editing,
    Saving,
    Done,
    Failed(String),
}

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let location = use_location()
        .map(|location| snapshot(&location))
        .unwrap_or_default();
    let access_token = reset_access_token(&location, token_storage().get_auth_token());
    let password = use_state(String::new);
    let status = use_state(|| Status::Editing);

    let on_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let password = password.clone();
        let status = status.clone();
        let access_token = access_token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(access_token) = access_token.clone() else {
                status.set(Status::Failed("This reset link is invalid or has expired.".to_string()));
                return;
            };
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                status.set(Status::Failed(format!(
                    "Password must be at least {} characters.",
                    MIN_PASSWORD_LENGTH
                )));
                return;
            }

            let request = UpdatePasswordRequest {
                access_token,
                password: (*password).clone(),
            };
            let status = status.clone();
            status.set(Status::Saving);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::update_password(request).await {
                    Ok(_) => {
                        if let Err(e) = ApiService::clear_reset_cookies().await {
                            tracing::warn!("Failed to clear reset cookies: {:?}", e);
                        }
                        // The recovery session is single use
                        token_storage().clear();
                        status.set(Status::Done);
                    }
                    Err(e) => {
                        tracing::error!("Password update failed: {:?}", e);
                        status.set(Status::Failed(e));
                    }
                }
            });
        })
    };

    if *status == Status::Done {
        return html! {
            <div class="container">
                <h2>{ "Password updated" }</h2>
                <p>{ "You can now sign in with your new password." }</p>
                <Link<Route> to={Route::Home}>
                    <button class="btn btn-primary">{ "Go Home" }</button>
                </Link<Route>>
            </div>
        };
    }

    html! {
        <div class="container">
            <h2>{ "Choose a new password" }</h2>
            if access_token.is_none() {
                <p class="error">{ "This reset link is invalid or has expired." }</p>
            }
            if let Status::Failed(message) = (*status).clone() {
                <p class="error">{ message }</p>
            }
            <form onsubmit={on_submit}>
                <input
                    type="password"
                    placeholder="New password"
                    value={(*password).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary" disabled={*status == Status::Saving}>
                    { "Update password" }
                </button>
            </form>
        </div>
    }
}
