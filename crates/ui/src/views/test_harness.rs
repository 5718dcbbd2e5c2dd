use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, QuestionBank, StaticQuestionBank};
use surf_core::model::{Equation, GameSettings, Question, QuestionDraft, QuestionId, Solution};
use surf_core::time::fixed_clock;

use crate::app::GameScreen;
use crate::context::{UiApp, build_app_context};
use crate::vm::GameVm;

#[derive(Clone)]
struct TestApp {
    bank: Arc<StaticQuestionBank>,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<dyn QuestionBank> {
        self.bank.clone()
    }

    fn settings(&self) -> GameSettings {
        GameSettings::default()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

/// Drives the game into the state under test before the first render.
pub type Prepare = fn(&mut GameVm);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    prepare: Prepare,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let game = use_signal(|| {
        let mut vm = GameVm::new(ctx.new_game());
        (props.prepare)(&mut vm);
        vm
    });
    rsx! { GameScreen { game } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// `2x + 3y = 12`, `x - y = 1`; solution `(3, 2)`.
pub fn sample_question(id: u64) -> Question {
    QuestionDraft::new(
        QuestionId::new(id),
        format!("Surf school wave {id}"),
        [
            Equation::new(2.0, 3.0, 12.0).expect("equation"),
            Equation::new(1.0, -1.0, 1.0).expect("equation"),
        ],
        Solution::new(3.0, 2.0),
    )
    .validate()
    .expect("valid question")
}

pub fn setup_view_harness(questions: usize, prepare: Prepare) -> ViewHarness {
    let ids = 1..=u64::try_from(questions).expect("question count");
    let bank = Arc::new(StaticQuestionBank::new(ids.map(sample_question).collect()));
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(TestApp { bank }),
            prepare,
        },
    );
    ViewHarness { dom }
}
