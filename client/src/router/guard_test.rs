use super::*;

const PHASES: [SessionPhase; 3] =
    [SessionPhase::Undetermined, SessionPhase::Authenticated, SessionPhase::Unauthenticated];

#[test]
fn both_guards_suspend_while_undetermined() {
    assert_eq!(Guard::Authenticated.decide(SessionPhase::Undetermined), GuardDecision::Loading);
    assert_eq!(Guard::Unauthenticated.decide(SessionPhase::Undetermined), GuardDecision::Loading);
}

#[test]
fn authenticated_guard_renders_for_signed_in_user() {
    assert_eq!(Guard::Authenticated.decide(SessionPhase::Authenticated), GuardDecision::Render);
}

#[test]
fn authenticated_guard_redirects_anonymous_to_entry() {
    assert_eq!(
        Guard::Authenticated.decide(SessionPhase::Unauthenticated),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn unauthenticated_guard_redirects_signed_in_user_to_landing() {
    assert_eq!(
        Guard::Unauthenticated.decide(SessionPhase::Authenticated),
        GuardDecision::Redirect("/dashboard")
    );
}

#[test]
fn unauthenticated_guard_renders_for_anonymous() {
    assert_eq!(Guard::Unauthenticated.decide(SessionPhase::Unauthenticated), GuardDecision::Render);
}

#[test]
fn guards_are_complementary_once_settled() {
    for phase in PHASES.into_iter().filter(|p| *p != SessionPhase::Undetermined) {
        let protected = Guard::Authenticated.decide(phase) == GuardDecision::Render;
        let public = Guard::Unauthenticated.decide(phase) == GuardDecision::Render;
        assert_ne!(protected, public, "phase {phase:?}");
    }
}
