use super::*;

#[test]
fn new_liveness_is_alive() {
    assert!(Liveness::new().is_alive());
    assert!(Liveness::default().is_alive());
}

#[test]
fn end_is_visible_through_clones() {
    let liveness = Liveness::new();
    let task_view = liveness.clone();
    liveness.end();
    assert!(!task_view.is_alive());
    assert!(!liveness.is_alive());
}

#[test]
fn end_is_irreversible() {
    let liveness = Liveness::new();
    liveness.end();
    liveness.end();
    assert!(!liveness.is_alive());
}
