use shared::redirect::Navigator;
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::services::api::ApiService;
use crate::services::navigation::{snapshot, BrowserNavigator};
use crate::services::storage::token_storage;

/// Finishes a sign-in or recovery link by exchanging its code.
#[function_component(AuthCallback)]
pub fn auth_callback() -> Html {
    let location = use_location().map(|location| snapshot(&location));
    let error = use_state(|| None::<String>);

    {
        let error = error.clone();

        use_effect_with(location, move |location| {
            let code = location
                .as_ref()
                .and_then(|l| l.query_param("code"))
                .filter(|c| !c.is_empty());
            let flow_type = location.as_ref().and_then(|l| l.query_param("type"));

            match code {
                Some(code) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiService::exchange_code(code, flow_type).await {
                            Ok(response) => {
                                let storage = token_storage();
                                storage.set_auth_token(&response.access_token);
                                storage.set_auth_user(&response.user);
                                BrowserNavigator::new().replace(&response.redirect_to);
                            }
                            Err(e) => {
                                tracing::error!("Code exchange failed: {:?}", e);
                                error.set(Some(e));
                            }
                        }
                    });
                }
                None => error.set(Some("Missing authorization code.".to_string())),
            }
            || ()
        });
    }

    html! {
        <div class="container">
            if let Some(message) = (*error).clone() {
                <div class="error">
                    <h2>{ "Sign-in failed" }</h2>
                    <p>{ message }</p>
                </div>
            } else {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            }
        </div>
    }
}
