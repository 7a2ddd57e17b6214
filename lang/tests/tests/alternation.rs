use pretty_assertions::assert_eq;
use recourse_alternative::prelude::*;
use recourse_tests::{
    run_case,
    utils::{Marker, bump_then_abort, bump_then_error, init_logger},
};

run_case!(
    counter_abort_keeps_increment,
    modify(|n: i32| n + 1).then(abort::<_, _, &str>("boom")) | inject("ok"),
    0,
    Err(ErrorTree::leaf("boom")),
    (1, true)
);

run_case!(
    counter_error_rolls_back,
    modify(|n: i32| n + 1).then(error::<_, &str, _>("miss")) | inject("ok"),
    0,
    Ok("ok"),
    (0, false)
);

#[test]
fn left_success_skips_right() {
    init_logger();
    let marker = Marker::new();
    let left = || modify(|n: i32| n + 3).then(inject::<_, &str, _>('a'));
    let alone = left().run(0);
    let both = alt_or(left(), marker.watch(inject('b'))).run(0);
    assert_eq!(both, alone);
    assert_eq!(both, (Ok('a'), (3, false)));
    assert!(!marker.fired());
}

#[test]
fn right_observes_state_before_left() {
    init_logger();
    let seen = alt_or(modify(|n: i32| n * 100).then(error("nope")), get::<i32, &str>());
    assert_eq!(seen.run(7), (Ok(7), (7, false)));
}

#[test]
fn both_failing_appends_last_child() {
    init_logger();
    let left = choice(bump_then_error("x"), [bump_then_error("y")]);
    let (outcome, state) = alt_or(left, bump_then_error("z")).run(0);
    let tree = outcome.unwrap_err();
    assert_eq!(tree.value(), &"x");
    assert_eq!(
        tree.children().iter().cloned().collect::<Vec<_>>(),
        vec![ErrorTree::leaf("y"), ErrorTree::leaf("z")]
    );
    // the right branch ran from the rolled-back counter
    assert_eq!(state, (1, false));
}

#[test]
fn abort_skips_right_branch() {
    init_logger();
    let marker = Marker::new();
    let comp = alt_or(abort::<i32, _, ()>("fatal"), marker.watch(inject(())));
    assert_eq!(comp.run(4), (Err(ErrorTree::leaf("fatal")), (4, true)));
    assert!(!marker.fired());
}

#[test]
fn abort_propagates_through_every_choice() {
    init_logger();
    let right = Marker::new();
    let outer = Marker::new();
    let inner = alt_or(bump_then_abort("deep"), right.watch(bump_then_error("r")));
    let comp = choice(bump_then_error("first"), [inner, outer.watch(bump_then_error("o"))]);
    let (outcome, state) = comp.run(0);
    assert_eq!(outcome, Err(ErrorTree::new("first", [ErrorTree::leaf("deep")])));
    assert_eq!(state, (1, true));
    assert!(!right.fired());
    assert!(!outer.fired());
}

#[test]
fn abort_after_success_inside_left_chain() {
    init_logger();
    let marker = Marker::new();
    let left =
        inject::<i32, &str, _>(1).bind(|n| modify(move |m: i32| m + n).then(abort("halt")));
    let comp = alt_or(left, marker.watch(inject(())));
    assert_eq!(comp.run(10), (Err(ErrorTree::leaf("halt")), (11, true)));
    assert!(!marker.fired());
}

#[test]
fn right_assoc_chain_prefers_leftmost_success() {
    init_logger();
    let late = Marker::new();
    let comp = bump_then_error("a")
        .map(|()| 0)
        .or_right_assoc(inject(1).or_right_assoc(late.watch(inject(2))));
    assert_eq!(comp.run(0), (Ok(1), (0, false)));
    assert!(!late.fired());
}

#[test]
fn right_assoc_chain_records_every_failure_in_order() {
    init_logger();
    let comp = alt_or_right_assoc(
        bump_then_error("a"),
        alt_or_right_assoc(bump_then_error("b"), bump_then_error("c")),
    );
    let tree = comp.run(0).0.unwrap_err();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(tree, ErrorTree::new("a", [ErrorTree::new("b", [ErrorTree::leaf("c")])]));
}

#[test]
fn pre_aborted_run_never_backtracks() {
    init_logger();
    let marker = Marker::new();
    let comp = alt_or(error::<i32, _, ()>("late"), marker.watch(inject(())));
    assert_eq!(comp.run_flagged((0, true)), (Err(ErrorTree::leaf("late")), (0, true)));
    assert!(!marker.fired());
}

#[test]
fn no_public_step_lowers_the_abort_flag() {
    init_logger();
    let steps: Vec<Alternative<i32, &str, ()>> = vec![
        inject(()),
        error("e"),
        lift(Ok(())),
        put(5),
        modify(|n: i32| n - 1),
        gets(|_: &i32| ()),
        get().map(|_| ()),
        defer(|| inject(())),
        sequence([inject(()), inject(())]).map(|_| ()),
        inject(|_: i32| ()).apply(inject(0)),
        choice(error("a"), [inject(())]),
    ];
    for step in steps {
        let (_, (_, aborted)) = step.run_flagged((0, true));
        assert!(aborted);
    }
    let (_, (_, aborted)) = catch::<i32, String, _>(|| ()).run_flagged((0, true));
    assert!(aborted);
}

#[test]
fn aborted_branch_is_never_rolled_back_by_later_steps() {
    init_logger();
    let marker = Marker::new();
    let left = bump_then_abort("fatal")
        .bind(|()| put(0))
        .or(modify(|n: i32| n - 100).then(error("after")));
    let comp = alt_or(left, marker.watch(inject(())));
    assert_eq!(comp.run(0), (Err(ErrorTree::leaf("fatal")), (1, true)));
    assert!(!marker.fired());
}
