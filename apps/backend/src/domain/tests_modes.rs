use crate::domain::modes::{all_modes, resolve_mode, CLASSIC};

#[test]
fn classic_has_no_filter() {
    let cfg = resolve_mode("classic");
    assert_eq!(cfg.id, "classic");
    assert_eq!(cfg.gens, None);
}

#[test]
fn each_generation_mode_filters_to_its_gen() {
    for gen in 1..=9i16 {
        let cfg = resolve_mode(&format!("gen{gen}"));
        assert_eq!(cfg.id, format!("gen{gen}"));
        assert_eq!(cfg.gens, Some(&[gen][..]));
    }
}

#[test]
fn unknown_and_empty_input_fall_back_to_classic() {
    // Deliberate permissive-default policy, not an error path.
    assert_eq!(resolve_mode("bogus"), CLASSIC);
    assert_eq!(resolve_mode(""), CLASSIC);
    assert_eq!(resolve_mode("gen10"), CLASSIC);
    assert_eq!(resolve_mode("  "), CLASSIC);
}

#[test]
fn matching_is_case_insensitive_and_trimmed() {
    assert_eq!(resolve_mode("GEN3").id, "gen3");
    assert_eq!(resolve_mode(" gen3 ").id, "gen3");
    assert_eq!(resolve_mode("Classic"), CLASSIC);
}

#[test]
fn registry_lists_classic_first() {
    let ids: Vec<&str> = all_modes().map(|m| m.id).collect();
    assert_eq!(
        ids,
        vec!["classic", "gen1", "gen2", "gen3", "gen4", "gen5", "gen6", "gen7", "gen8", "gen9"]
    );
}
