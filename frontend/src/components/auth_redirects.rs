//! Root-mounted components that forward auth redirects.
//!
//! They render nothing. Each one re-evaluates whenever the location changes,
//! and only once the app is running in the browser.

use shared::redirect::{handle_auth_code, handle_recovery_fragment};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::services::navigation::{snapshot, BrowserNavigator};

/// Sends `?code=...` on any page to the callback route.
#[function_component(AuthCodeRedirect)]
pub fn auth_code_redirect() -> Html {
    let location = use_location().map(|location| snapshot(&location));

    use_effect_with(location, |location| {
        if let Some(location) = location {
            handle_auth_code(location, &BrowserNavigator::new());
        }
        || ()
    });

    Html::default()
}

/// Sends a `#access_token=...&type=recovery` fragment to the reset page.
#[function_component(RecoveryRedirect)]
pub fn recovery_redirect() -> Html {
    let location = use_location().map(|location| snapshot(&location));

    use_effect_with(location, |location| {
        if let Some(location) = location {
            handle_recovery_fragment(location, &BrowserNavigator::new());
        }
        || ()
    });

    Html::default()
}
