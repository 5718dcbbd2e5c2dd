use dioxus::prelude::*;

use crate::vm::GameVm;

#[component]
pub fn StartView(game: Signal<GameVm>) -> Element {
    let mut game = game;
    let (error, rules) = {
        let vm = game.read();
        (vm.error(), vm.rules())
    };

    rsx! {
        div { class: "page start",
            h1 { "Equation Surf" }
            p { class: "tagline", "Ride the waves by solving systems of two linear equations." }
            ul { class: "rules",
                for rule in rules {
                    li { "{rule}" }
                }
            }
            if let Some(error) = error {
                p { class: "error", role: "alert", "{error.message()}" }
            }
            button {
                id: "start-surfing",
                class: "btn btn-primary",
                onclick: move |_| {
                    if let Err(err) = game.write().start() {
                        log::warn!("start rejected: {err:?}");
                    }
                },
                "Start Surfing"
            }
        }
    }
}
