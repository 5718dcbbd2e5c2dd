use dioxus::prelude::*;

use crate::vm::GameVm;

#[component]
pub fn GameOverView(game: Signal<GameVm>) -> Element {
    let mut game = game;
    let Some(over) = game.read().game_over() else {
        return rsx! {};
    };

    rsx! {
        div { class: "page game-over",
            h1 { "Session Complete" }
            p { class: "final-score", "Final score: {over.score}" }
            div { class: "{over.tier_class}",
                h2 { "{over.tier_title}" }
                p { "{over.tier_message}" }
            }
            ul { class: "game-over-stats",
                li { "{over.correct_label}" }
                li { "Time on the water: {over.duration_label}" }
                li { "Finished {over.finished_at}" }
            }
            button {
                id: "game-over-restart",
                class: "btn btn-primary",
                onclick: move |_| {
                    if let Err(err) = game.write().restart() {
                        log::warn!("restart rejected: {err:?}");
                    }
                },
                "Back to the Beach"
            }
        }
    }
}
