use super::test_harness::setup_view_harness;
use crate::vm::GameVm;

fn render(questions: usize, prepare: fn(&mut GameVm)) -> String {
    let mut harness = setup_view_harness(questions, prepare);
    harness.rebuild();
    harness.render()
}

fn answer(vm: &mut GameVm, x: &str, y: &str) {
    vm.set_input_x(x.to_string());
    vm.set_input_y(y.to_string());
    vm.submit().expect("submit");
}

#[test]
fn start_view_smoke_renders_title() {
    let html = render(3, |_| {});
    assert!(html.contains("Equation Surf"), "missing title in {html}");
    assert!(html.contains("Start Surfing"), "missing start button in {html}");
    assert!(html.contains("worth 100 points"), "missing rules in {html}");
}

#[test]
fn start_view_smoke_renders_empty_bank_error() {
    let html = render(0, |vm| {
        let _ = vm.start();
    });
    assert!(html.contains("No questions are available"), "missing error in {html}");
    assert!(html.contains("Start Surfing"), "missing start button in {html}");
}

#[test]
fn play_view_smoke_renders_question() {
    let html = render(3, |vm| vm.start().expect("start"));
    assert!(html.contains("Wave 1 of 3"), "missing wave label in {html}");
    assert!(html.contains("Points: 0"), "missing score in {html}");
    assert!(html.contains("Surf school wave 1"), "missing context in {html}");
    assert!(html.contains("2x + 3y = 12"), "missing equation in {html}");
    assert!(html.contains("x - y = 1"), "missing equation in {html}");
    assert!(html.contains("Check Answer"), "missing submit in {html}");
    assert!(!html.contains("Next Wave"), "unexpected feedback in {html}");
}

#[test]
fn play_view_smoke_reprompts_on_invalid_input() {
    let html = render(3, |vm| {
        vm.start().expect("start");
        vm.set_input_x("abc".to_string());
        let _ = vm.submit();
    });
    assert!(html.contains("Please enter numeric values"), "missing error in {html}");
    assert!(html.contains("Check Answer"), "missing submit in {html}");
}

#[test]
fn play_view_smoke_renders_correct_feedback() {
    let html = render(3, |vm| {
        vm.start().expect("start");
        answer(vm, "3", "2");
    });
    assert!(html.contains("NICE! PERFECT WAVE!"), "missing headline in {html}");
    assert!(html.contains("Points: 100"), "missing score in {html}");
    assert!(html.contains("Solution (3, 2)"), "missing graph label in {html}");
    assert!(html.contains("Next Wave"), "missing next button in {html}");
    assert!(!html.contains("Initial system"), "unexpected steps in {html}");
}

#[test]
fn play_view_smoke_renders_worked_solution_on_miss() {
    let html = render(3, |vm| {
        vm.start().expect("start");
        answer(vm, "1", "1");
    });
    assert!(html.contains("ALMOST THERE!"), "missing headline in {html}");
    assert!(html.contains("X = 3 and Y = 2"), "missing solution in {html}");
    assert!(html.contains("1. Initial system"), "missing steps in {html}");
    assert!(html.contains("5. Find x"), "missing last step in {html}");
    assert!(html.contains("<polyline"), "missing plot in {html}");
}

#[test]
fn play_view_smoke_offers_ranking_on_last_wave() {
    let html = render(1, |vm| {
        vm.start().expect("start");
        answer(vm, "3", "2");
    });
    assert!(html.contains("See Ranking"), "missing ranking button in {html}");
}

#[test]
fn game_over_view_smoke_renders_tier() {
    let html = render(2, |vm| {
        vm.start().expect("start");
        answer(vm, "3", "2");
        vm.advance().expect("advance");
        answer(vm, "0", "0");
        vm.advance().expect("advance");
    });
    assert!(html.contains("Final score: 100"), "missing score in {html}");
    assert!(html.contains("Beginner on the Board"), "missing tier in {html}");
    assert!(html.contains("1 of 2 waves ridden"), "missing count in {html}");
    assert!(html.contains("Back to the Beach"), "missing restart in {html}");
}
