use crate::domain::compare::compare;
use crate::domain::dex::DexEntry;
use crate::domain::session::{
    load, save, storage_key, Attempt, SessionPhase, SessionRejection, SessionState,
    DEFAULT_MAX_ATTEMPTS, STORAGE_VERSION,
};
use crate::domain::test_entries::{bulbasaur, entry};

fn attempt_for(target: &DexEntry, guess: &DexEntry) -> Attempt {
    let cmp = compare(target, guess);
    Attempt {
        id: guess.id,
        name: guess.name.clone(),
        sprite: guess.sprite_url(),
        types: guess.types.clone(),
        habitat: guess.habitat.clone(),
        color: guess.color.clone(),
        gen: guess.gen,
        evolution_stage: guess.evolution_stage,
        height_dm: guess.height_dm,
        weight_hg: guess.weight_hg,
        columns: cmp.columns,
        is_correct: cmp.is_correct,
    }
}

#[test]
fn fresh_session_is_empty() {
    let s = SessionState::new("2026-08-07", "classic");
    assert_eq!(s.phase(), SessionPhase::Empty);
    assert!(!s.finished);
    assert!(!s.won);
}

#[test]
fn misses_keep_the_session_in_progress() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");

    let phase = s
        .record(attempt_for(&target, &entry(50, &["rock"])), DEFAULT_MAX_ATTEMPTS)
        .unwrap();
    assert_eq!(phase, SessionPhase::InProgress);
    assert_eq!(s.attempts.len(), 1);
}

#[test]
fn winning_attempt_finishes_the_session() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");

    s.record(attempt_for(&target, &entry(50, &["rock"])), DEFAULT_MAX_ATTEMPTS)
        .unwrap();
    let phase = s
        .record(attempt_for(&target, &target), DEFAULT_MAX_ATTEMPTS)
        .unwrap();

    assert_eq!(phase, SessionPhase::Finished { won: true });
    assert!(s.finished);
    assert!(s.won);
    // Newest first
    assert_eq!(s.attempts[0].id, target.id);
}

#[test]
fn attempt_cap_finishes_as_lost_and_rejects_overflow() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");

    for i in 0..15 {
        let guess = entry(100 + i, &["rock"]);
        s.record(attempt_for(&target, &guess), 15).unwrap();
    }

    assert_eq!(s.phase(), SessionPhase::Finished { won: false });
    assert!(s.finished);
    assert!(!s.won);
    assert_eq!(s.attempts.len(), 15);

    // 16th submission: rejected without appending.
    let err = s
        .record(attempt_for(&target, &entry(400, &["rock"])), 15)
        .unwrap_err();
    assert_eq!(err, SessionRejection::AlreadyFinished);
    assert_eq!(s.attempts.len(), 15);
}

#[test]
fn duplicate_guess_is_rejected_without_mutation() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");
    let guess = entry(50, &["rock"]);

    s.record(attempt_for(&target, &guess), DEFAULT_MAX_ATTEMPTS)
        .unwrap();
    let before = s.clone();

    let err = s
        .record(attempt_for(&target, &guess), DEFAULT_MAX_ATTEMPTS)
        .unwrap_err();
    assert_eq!(err, SessionRejection::AlreadyTried);
    assert_eq!(s, before);
}

#[test]
fn guard_rejects_before_any_lookup() {
    let mut s = SessionState::new("2026-08-07", "classic");
    assert_eq!(s.check_guess(50), Ok(()));

    let target = bulbasaur();
    s.record(attempt_for(&target, &entry(50, &["rock"])), DEFAULT_MAX_ATTEMPTS)
        .unwrap();
    assert_eq!(s.check_guess(50), Err(SessionRejection::AlreadyTried));

    s.record(attempt_for(&target, &target), DEFAULT_MAX_ATTEMPTS)
        .unwrap();
    assert_eq!(s.check_guess(77), Err(SessionRejection::AlreadyFinished));
}

#[test]
fn guess_while_finished_is_rejected_even_when_cap_not_reached() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");

    s.record(attempt_for(&target, &target), DEFAULT_MAX_ATTEMPTS)
        .unwrap();

    let err = s
        .record(attempt_for(&target, &entry(50, &["rock"])), DEFAULT_MAX_ATTEMPTS)
        .unwrap_err();
    assert_eq!(err, SessionRejection::AlreadyFinished);
    assert_eq!(s.attempts.len(), 1);
}

#[test]
fn day_rollover_resets_state_for_the_new_key() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "classic");
    s.record(attempt_for(&target, &entry(50, &["rock"])), DEFAULT_MAX_ATTEMPTS)
        .unwrap();

    // Same key: untouched.
    let same = s.clone().for_day("2026-08-07");
    assert_eq!(same.attempts.len(), 1);

    // New key: fresh empty session for the same mode.
    let rolled = s.for_day("2026-08-08");
    assert_eq!(rolled.day_key, "2026-08-08");
    assert_eq!(rolled.mode, "classic");
    assert_eq!(rolled.phase(), SessionPhase::Empty);
}

#[test]
fn rollover_keeps_old_state_addressable_under_its_own_key() {
    // The superseded session is persisted under yesterday's key; the new
    // day writes a different key, so both coexist.
    assert_ne!(
        storage_key("2026-08-07", "classic"),
        storage_key("2026-08-08", "classic"),
    );
    assert_ne!(
        storage_key("2026-08-07", "classic"),
        storage_key("2026-08-07", "gen1"),
    );
}

#[test]
fn storage_round_trip_preserves_attempt_order() {
    let target = bulbasaur();
    let mut s = SessionState::new("2026-08-07", "gen1");
    for i in 0..5 {
        s.record(attempt_for(&target, &entry(100 + i, &["rock"])), 15)
            .unwrap();
    }

    let raw = save(&s).unwrap();
    let restored = load(&raw).unwrap();

    assert_eq!(restored, s);
    let ids: Vec<i32> = restored.attempts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![104, 103, 102, 101, 100]);
}

#[test]
fn unknown_envelope_versions_load_as_absent() {
    let s = SessionState::new("2026-08-07", "classic");
    let raw = save(&s).unwrap();

    let bumped = raw.replace(
        &format!("\"version\":{STORAGE_VERSION}"),
        "\"version\":999",
    );
    assert_ne!(raw, bumped);
    assert_eq!(load(&bumped), None);
    assert_eq!(load("not json"), None);
}

#[test]
fn storage_key_shape_is_stable() {
    assert_eq!(
        storage_key("2026-08-07", "classic"),
        "pokedle:v1:2026-08-07:classic"
    );
}
