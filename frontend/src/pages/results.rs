use shared::AssessmentResult;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiService;

#[function_component(Results)]
pub fn results() -> Html {
    let result = use_state(|| None::<AssessmentResult>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let result = result.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::latest_result().await {
                    Ok(response) => {
                        result.set(response.result);
                        loading.set(false);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch results: {:?}", e);
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let body = if *loading {
        html! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        }
    } else if let Some(message) = (*error).clone() {
        html! { <div class="error">{ message }</div> }
    } else if let Some(latest) = (*result).clone() {
        let answers: Vec<u64> = latest
            .answers
            .as_array()
            .map(|values| values.iter().filter_map(|v| v.as_u64()).collect())
            .unwrap_or_default();
        let average = if answers.is_empty() {
            0.0
        } else {
            answers.iter().sum::<u64>() as f64 / answers.len() as f64
        };

        html! {
            <div class="result">
                <p>{ format!("Completed {}", latest.created_at.format("%Y-%m-%d %H:%M")) }</p>
                <p>{ format!("Average score: {:.1}", average) }</p>
                <ol>
                    { for answers.iter().map(|answer| html! { <li>{ answer.to_string() }</li> }) }
                </ol>
            </div>
        }
    } else {
        html! {
            <div class="empty-state">
                <h2>{ "No results yet" }</h2>
                <Link<Route> to={Route::Survey}>
                    <button class="btn btn-primary">{ "Take the assessment" }</button>
                </Link<Route>>
            </div>
        }
    };

    html! {
        <div class="container">
            <h2>{ "Your Results" }</h2>
            { body }
        </div>
    }
}
