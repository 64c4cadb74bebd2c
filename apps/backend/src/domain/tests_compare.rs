use crate::domain::compare::compare;
use crate::domain::test_entries::{bulbasaur, charizard, entry};
use crate::domain::verdict::Verdict;

#[test]
fn self_comparison_is_all_correct() {
    let e = bulbasaur();
    let cmp = compare(&e, &e);

    assert!(cmp.is_correct);
    assert_eq!(cmp.columns.type1, Verdict::Correct);
    assert_eq!(cmp.columns.type2, Verdict::Correct);
    assert_eq!(cmp.columns.gen, Verdict::Correct);
    assert_eq!(cmp.columns.habitat, Verdict::Correct);
    assert_eq!(cmp.columns.color, Verdict::Correct);
    assert_eq!(cmp.columns.evolution, Verdict::Correct);
    assert_eq!(cmp.columns.height, Verdict::Correct);
    assert_eq!(cmp.columns.weight, Verdict::Correct);
}

#[test]
fn is_correct_comes_from_ids_not_columns() {
    // Same attributes, different ids: every column correct, still a miss.
    let target = bulbasaur();
    let mut guess = bulbasaur();
    guess.id = 999;

    let cmp = compare(&target, &guess);
    assert!(!cmp.is_correct);
    assert_eq!(cmp.columns.gen, Verdict::Correct);
    assert_eq!(cmp.columns.habitat, Verdict::Correct);
}

#[test]
fn swapped_type_slots_score_present_in_both() {
    // target ["grass","poison"] vs guess ["poison","grass"]
    let target = entry(10, &["grass", "poison"]);
    let guess = entry(20, &["poison", "grass"]);

    let cmp = compare(&target, &guess);
    assert_eq!(cmp.columns.type1, Verdict::Present);
    assert_eq!(cmp.columns.type2, Verdict::Present);
}

#[test]
fn mono_type_target_scores_second_slot_absent() {
    // target ["fire"] vs guess ["fire","flying"]
    let target = entry(10, &["fire"]);
    let guess = entry(20, &["fire", "flying"]);

    let cmp = compare(&target, &guess);
    assert_eq!(cmp.columns.type1, Verdict::Correct);
    assert_eq!(cmp.columns.type2, Verdict::Absent);
}

#[test]
fn empty_guess_slot_matches_empty_target_slot() {
    let mono_target = entry(10, &["water"]);
    let mono_guess = entry(20, &["water"]);
    let cmp = compare(&mono_target, &mono_guess);
    // Both second slots empty
    assert_eq!(cmp.columns.type2, Verdict::Correct);

    let dual_target = entry(11, &["water", "ice"]);
    let cmp = compare(&dual_target, &mono_guess);
    // Guess slot empty, target slot filled
    assert_eq!(cmp.columns.type2, Verdict::Absent);
}

#[test]
fn cross_slot_awareness_only_applies_to_filled_guess_slots() {
    // Guess's first type lives in the target's second slot.
    let target = entry(10, &["flying", "dragon"]);
    let guess = entry(20, &["dragon"]);

    let cmp = compare(&target, &guess);
    assert_eq!(cmp.columns.type1, Verdict::Present);
    // Empty guess slot never borrows from the target's other slot.
    assert_eq!(cmp.columns.type2, Verdict::Absent);
}

#[test]
fn ordinal_columns_point_back_toward_the_target() {
    let mut target = entry(10, &["grass"]);
    target.gen = 3;
    let mut guess = entry(20, &["grass"]);

    guess.gen = 5;
    assert_eq!(compare(&target, &guess).columns.gen, Verdict::Higher);

    guess.gen = 1;
    assert_eq!(compare(&target, &guess).columns.gen, Verdict::Lower);

    guess.gen = 3;
    assert_eq!(compare(&target, &guess).columns.gen, Verdict::Correct);
}

#[test]
fn height_weight_and_evolution_are_ordinal() {
    let target = bulbasaur(); // 7 dm, 69 hg, stage 1
    let guess = charizard(); // 17 dm, 905 hg, stage 3

    let cmp = compare(&target, &guess);
    assert_eq!(cmp.columns.height, Verdict::Higher);
    assert_eq!(cmp.columns.weight, Verdict::Higher);
    assert_eq!(cmp.columns.evolution, Verdict::Higher);

    let cmp = compare(&guess, &target);
    assert_eq!(cmp.columns.height, Verdict::Lower);
    assert_eq!(cmp.columns.weight, Verdict::Lower);
    assert_eq!(cmp.columns.evolution, Verdict::Lower);
}

#[test]
fn categorical_columns_have_no_partial_credit() {
    let mut target = entry(10, &["grass"]);
    target.habitat = "forest".to_string();
    let mut guess = entry(20, &["grass"]);
    guess.habitat = "mountain".to_string();

    assert_eq!(compare(&target, &guess).columns.habitat, Verdict::Absent);
}

#[test]
fn both_unknown_categoricals_are_correct() {
    let mut target = entry(10, &["grass"]);
    target.habitat = "unknown".to_string();
    target.color = "unknown".to_string();
    let mut guess = entry(20, &["fire"]);
    guess.habitat = "unknown".to_string();
    guess.color = "unknown".to_string();

    let cmp = compare(&target, &guess);
    assert_eq!(cmp.columns.habitat, Verdict::Correct);
    assert_eq!(cmp.columns.color, Verdict::Correct);
}

#[test]
fn comparison_serializes_with_camel_case_and_lowercase_verdicts() {
    let cmp = compare(&bulbasaur(), &charizard());
    let json = serde_json::to_value(&cmp).unwrap();

    assert_eq!(json["isCorrect"], false);
    assert_eq!(json["columns"]["type1"], "absent");
    assert_eq!(json["columns"]["height"], "higher");
}
