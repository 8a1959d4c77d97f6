use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    admin::Admin, auth_callback::AuthCallback, home::Home, not_found::NotFound,
    reset_password::ResetPassword, results::Results, settings::Settings, survey::Survey,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/survey")]
    Survey,
    #[at("/results")]
    Results,
    #[at("/admin")]
    Admin,
    #[at("/settings")]
    Settings,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/auth/callback")]
    AuthCallback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Survey => html! { <Survey /> },
        Route::Results => html! { <Results /> },
        Route::Admin => html! { <Admin /> },
        Route::Settings => html! { <Settings /> },
        Route::ResetPassword => html! { <ResetPassword /> },
        Route::AuthCallback => html! { <AuthCallback /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
