use dioxus::prelude::*;

use super::graph::GraphView;
use crate::vm::{FeedbackVm, GameVm};

#[component]
pub fn PlayView(game: Signal<GameVm>) -> Element {
    let mut game = game;
    let (question, feedback, input_x, input_y, error) = {
        let vm = game.read();
        (
            vm.question(),
            vm.feedback(),
            vm.input_x().to_string(),
            vm.input_y().to_string(),
            vm.error(),
        )
    };
    let Some(question) = question else {
        return rsx! {};
    };
    let answered = feedback.is_some();
    let [first, second] = question.equations;

    rsx! {
        div { class: "page play",
            header { class: "play-header",
                span { class: "wave", "{question.wave_label}" }
                span { class: "score", "{question.score_label}" }
                button {
                    id: "play-quit",
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        if let Err(err) = game.write().quit() {
                            log::warn!("quit rejected: {err:?}");
                        }
                    },
                    "Quit"
                }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {question.progress_percent}%" }
            }
            section { class: "question",
                p { class: "context", "{question.context}" }
                div { class: "equations",
                    p { class: "equation", "{first}" }
                    p { class: "equation", "{second}" }
                }
            }
            section { class: "answer",
                label { r#for: "answer-x", "X =" }
                input {
                    id: "answer-x",
                    r#type: "text",
                    value: "{input_x}",
                    disabled: answered,
                    oninput: move |evt: FormEvent| game.write().set_input_x(evt.value()),
                }
                label { r#for: "answer-y", "Y =" }
                input {
                    id: "answer-y",
                    r#type: "text",
                    value: "{input_y}",
                    disabled: answered,
                    oninput: move |evt: FormEvent| game.write().set_input_y(evt.value()),
                }
                if !answered {
                    button {
                        id: "answer-submit",
                        class: "btn btn-primary",
                        onclick: move |_| {
                            if let Err(err) = game.write().submit() {
                                log::debug!("answer rejected: {err:?}");
                            }
                        },
                        "Check Answer"
                    }
                }
            }
            if let Some(error) = error {
                p { class: "error", role: "alert", "{error.message()}" }
            }
            if let Some(feedback) = feedback {
                FeedbackPanel { game, feedback }
            }
        }
    }
}

#[component]
fn FeedbackPanel(game: Signal<GameVm>, feedback: FeedbackVm) -> Element {
    let mut game = game;
    let class = if feedback.correct {
        "feedback feedback-correct"
    } else {
        "feedback feedback-incorrect"
    };

    rsx! {
        section { class: "{class}",
            h2 { "{feedback.headline}" }
            p { class: "solution", "{feedback.solution_text}" }
            if !feedback.steps.is_empty() {
                ol { class: "steps",
                    for step in feedback.steps.iter() {
                        li {
                            h3 { "{step.heading}" }
                            for line in step.lines.iter() {
                                p { class: "step-line", "{line}" }
                            }
                        }
                    }
                }
            }
            GraphView { graph: feedback.graph.clone() }
            button {
                id: "feedback-next",
                class: "btn btn-primary",
                onclick: move |_| {
                    if let Err(err) = game.write().advance() {
                        log::warn!("advance rejected: {err:?}");
                    }
                },
                "{feedback.next_label}"
            }
        }
    }
}
