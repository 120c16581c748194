use super::*;
use std::cell::Cell;

// =============================================================
// DisabledRemote
// =============================================================

#[test]
fn disabled_remote_has_no_values() {
    let remote = DisabledRemote;
    assert_eq!(remote.is_feature_enabled(FlagKey::NewDashboard), None);
    assert_eq!(remote.get_feature_flag(FlagKey::NewDashboard), None);
}

#[test]
fn disabled_remote_never_signals_loaded() {
    let fired = Rc::new(Cell::new(false));
    let signal = Rc::clone(&fired);
    DisabledRemote.on_loaded(Box::new(move || signal.set(true)));
    assert!(!fired.get());
}

// =============================================================
// StaticRemote values
// =============================================================

#[test]
fn static_remote_hides_values_until_loaded() {
    let remote = StaticRemote::with_values([(FlagKey::NewDashboard, FlagValue::Bool(true))]);
    assert_eq!(remote.is_feature_enabled(FlagKey::NewDashboard), None);

    remote.finish_loading();
    assert_eq!(remote.is_feature_enabled(FlagKey::NewDashboard), Some(true));
}

#[test]
fn static_remote_answers_none_for_unset_keys() {
    let remote = StaticRemote::new();
    remote.finish_loading();
    assert_eq!(remote.get_feature_flag(FlagKey::BetaFeatures), None);
}

#[test]
fn static_remote_set_updates_values_through_clones() {
    let remote = StaticRemote::new();
    let handle = remote.clone();
    handle.set(FlagKey::DarkModeV2, "variant-b");
    remote.finish_loading();
    assert_eq!(
        remote.get_feature_flag(FlagKey::DarkModeV2),
        Some(FlagValue::Str("variant-b".to_owned()))
    );
}

#[test]
fn static_remote_enabledness_follows_the_value() {
    let remote = StaticRemote::with_values([
        (FlagKey::NewDashboard, FlagValue::Bool(false)),
        (FlagKey::BetaFeatures, FlagValue::Str("on".to_owned())),
    ]);
    remote.finish_loading();
    assert_eq!(remote.is_feature_enabled(FlagKey::NewDashboard), Some(false));
    assert_eq!(remote.is_feature_enabled(FlagKey::BetaFeatures), Some(true));
}

// =============================================================
// StaticRemote load notification
// =============================================================

#[test]
fn listener_fires_once_on_finish_loading() {
    let remote = StaticRemote::new();
    let count = Rc::new(Cell::new(0));
    let signal = Rc::clone(&count);
    remote.on_loaded(Box::new(move || signal.set(signal.get() + 1)));

    remote.finish_loading();
    remote.finish_loading();
    assert_eq!(count.get(), 1);
}

#[test]
fn listener_registered_after_load_fires_immediately() {
    let remote = StaticRemote::new();
    remote.finish_loading();

    let fired = Rc::new(Cell::new(false));
    let signal = Rc::clone(&fired);
    remote.on_loaded(Box::new(move || signal.set(true)));
    assert!(fired.get());
}

#[test]
fn listener_may_query_the_provider() {
    let remote = StaticRemote::with_values([(FlagKey::NewDashboard, FlagValue::Bool(true))]);
    let seen = Rc::new(Cell::new(None));
    let signal = Rc::clone(&seen);
    let handle = remote.clone();
    remote.on_loaded(Box::new(move || {
        signal.set(handle.is_feature_enabled(FlagKey::NewDashboard));
    }));

    remote.finish_loading();
    assert_eq!(seen.get(), Some(true));
}

#[test]
fn is_loaded_reflects_finish_loading() {
    let remote = StaticRemote::new();
    assert!(!remote.is_loaded());
    remote.finish_loading();
    assert!(remote.is_loaded());
}
