use shared::api::ANSWER_SCALE_MAX;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiService;

const QUESTIONS: [&str; 10] = [
    "My friends would describe me as easy to talk to.",
    "I usually reach out first when I haven't heard from someone.",
    "I enjoy meeting new people.",
    "Friends come to me when they need advice.",
    "I remember the small details people tell me.",
    "I am comfortable saying no to a friend.",
    "I keep in touch with friends who live far away.",
    "I prefer a few close friends over a large group.",
    "I celebrate my friends' successes openly.",
    "I can tell when a friend is having a bad day.",
];

#[function_component(Survey)]
pub fn survey() -> Html {
    let answers = use_state(|| vec![None::<u8>; QUESTIONS.len()]);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let complete = answers.iter().all(Option::is_some);

    let on_submit = {
        let answers = answers.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let chosen: Vec<u8> = answers.iter().flatten().copied().collect();
            if chosen.len() != QUESTIONS.len() {
                error.set(Some("Please answer every question.".to_string()));
                return;
            }

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::submit_result(chosen).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Results);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to submit answers: {:?}", e);
                        error.set(Some(e));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "Assessment" }</h2>
            <p>{ format!("Rate each statement from 1 (not at all) to {} (completely).", ANSWER_SCALE_MAX) }</p>
            if let Some(message) = (*error).clone() {
                <div class="error">{ message }</div>
            }
            <form onsubmit={on_submit}>
                { for QUESTIONS.iter().enumerate().map(|(idx, question)| {
                    html! {
                        <fieldset class="question">
                            <legend>{ *question }</legend>
                            { for (1..=ANSWER_SCALE_MAX).map(|value| {
                                let class = if answers[idx] == Some(value) {
                                    "btn btn-primary"
                                } else {
                                    "btn"
                                };
                                let answers = answers.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    let mut next = (*answers).clone();
                                    next[idx] = Some(value);
                                    answers.set(next);
                                });
                                html! {
                                    <button type="button" {class} {onclick}>{ value.to_string() }</button>
                                }
                            })}
                        </fieldset>
                    }
                })}
                <button type="submit" class="btn btn-primary" disabled={!complete || *submitting}>
                    { if *submitting { "Submitting..." } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}
