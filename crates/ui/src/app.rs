use dioxus::prelude::*;

use services::ModeKind;

use crate::context::AppContext;
use crate::views::{GameOverView, PlayView, StartView};
use crate::vm::GameVm;

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let game = use_signal(|| GameVm::new(ctx.new_game()));

    rsx! {
        style { {STYLE} }
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                GameScreen { game }
            }
        }
    }
}

/// Shows the screen for the current game mode.
#[component]
pub fn GameScreen(game: Signal<GameVm>) -> Element {
    let kind = game.read().mode_kind();
    match kind {
        ModeKind::Start => rsx! { StartView { game } },
        ModeKind::Playing => rsx! { PlayView { game } },
        ModeKind::GameOver => rsx! { GameOverView { game } },
    }
}
