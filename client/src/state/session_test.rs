use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn default_is_logged_out_and_unrestored() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::LoggedOut);
    assert!(!state.restored);
}

#[test]
fn only_exact_true_sets_the_flag() {
    assert!(flag_is_set(Some("true")));
    for raw in [None, Some(""), Some("false"), Some("TRUE"), Some("1"), Some("true ")] {
        assert!(!flag_is_set(raw), "{raw:?}");
    }
}

#[test]
fn restore_reads_flag_from_store() {
    let state = SessionState::restore(&MemoryStorage::with(AUTH_FLAG_KEY, "true"));
    assert!(state.is_logged_in());
    assert!(state.restored);

    let state = SessionState::restore(&MemoryStorage::with(AUTH_FLAG_KEY, "yes"));
    assert!(!state.is_logged_in());
    assert!(state.restored);
}

#[test]
fn log_in_writes_flag() {
    let store = MemoryStorage::new();
    let mut state = SessionState::default();
    state.log_in(&store);
    assert!(state.is_logged_in());
    assert_eq!(store.get(AUTH_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn log_out_clears_flag_and_lands_on_login() {
    let store = MemoryStorage::with(AUTH_FLAG_KEY, "true");
    let mut state = SessionState::restore(&store);
    let landing = state.log_out(&store);
    assert_eq!(landing, Page::Login);
    assert_eq!(landing.path(), "/");
    assert!(!state.is_logged_in());
    assert_eq!(store.get(AUTH_FLAG_KEY), None);
}

#[test]
fn toggle_flips_status_and_storage() {
    let store = MemoryStorage::new();
    let mut state = SessionState::restore(&store);
    state.toggle(&store);
    assert!(state.is_logged_in());
    state.toggle(&store);
    assert!(!state.is_logged_in());
    assert_eq!(store.get(AUTH_FLAG_KEY), None);
}

#[test]
fn home_depends_on_status() {
    let store = MemoryStorage::new();
    let mut state = SessionState::restore(&store);
    assert_eq!(state.home(), Page::Login);
    state.log_in(&store);
    assert_eq!(state.home(), Page::Dashboard);
}
