//! Property tests for the selector and comparator contracts.

use proptest::prelude::*;

use crate::domain::compare::compare;
use crate::domain::dex::DexEntry;
use crate::domain::selector::select_target;
use crate::domain::verdict::Verdict;

const TYPE_LABELS: [&str; 8] = [
    "grass", "poison", "fire", "water", "flying", "rock", "electric", "ice",
];
const HABITATS: [&str; 4] = ["forest", "mountain", "sea", "unknown"];
const COLORS: [&str; 4] = ["red", "green", "blue", "unknown"];

fn arb_types() -> impl Strategy<Value = Vec<String>> {
    // 0-2 distinct labels, slot order meaningful.
    proptest::sample::subsequence(TYPE_LABELS.to_vec(), 0..=2).prop_flat_map(|labels| {
        let labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
        if labels.len() == 2 {
            // Either slot order is valid source data.
            proptest::bool::ANY
                .prop_map(move |swap| {
                    let mut l = labels.clone();
                    if swap {
                        l.swap(0, 1);
                    }
                    l
                })
                .boxed()
        } else {
            Just(labels).boxed()
        }
    })
}

prop_compose! {
    fn arb_entry()(
        id in 1..2000i32,
        name in "[a-z]{3,12}",
        gen in 1..=9i16,
        height_dm in 1..3000i32,
        weight_hg in 1..10000i32,
        types in arb_types(),
        habitat in proptest::sample::select(HABITATS.to_vec()),
        color in proptest::sample::select(COLORS.to_vec()),
        evolution_stage in 1..=3i16,
    ) -> DexEntry {
        DexEntry {
            id,
            name,
            gen,
            height_dm,
            weight_hg,
            types,
            habitat: habitat.to_string(),
            color: color.to_string(),
            evolution_stage,
        }
    }
}

fn arb_pool() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::btree_set(1..5000i32, 1..200)
        .prop_map(|ids| ids.into_iter().collect())
}

proptest! {
    #[test]
    fn correctness_mirrors_id_equality(target in arb_entry(), guess in arb_entry()) {
        let cmp = compare(&target, &guess);
        prop_assert_eq!(cmp.is_correct, target.id == guess.id);
    }

    #[test]
    fn self_comparison_is_fully_correct(e in arb_entry()) {
        let cmp = compare(&e, &e);
        prop_assert!(cmp.is_correct);
        for v in [
            cmp.columns.type1,
            cmp.columns.type2,
            cmp.columns.gen,
            cmp.columns.habitat,
            cmp.columns.color,
            cmp.columns.evolution,
            cmp.columns.height,
            cmp.columns.weight,
        ] {
            prop_assert_eq!(v, Verdict::Correct);
        }
    }

    #[test]
    fn column_verdicts_stay_in_their_vocabulary(target in arb_entry(), guess in arb_entry()) {
        let cmp = compare(&target, &guess);

        // Type slots never use the ordinal verdicts.
        for v in [cmp.columns.type1, cmp.columns.type2] {
            prop_assert!(!matches!(v, Verdict::Higher | Verdict::Lower));
        }
        // Ordinal columns never use Present.
        for v in [cmp.columns.gen, cmp.columns.evolution, cmp.columns.height, cmp.columns.weight] {
            prop_assert!(!matches!(v, Verdict::Present));
        }
        // Categorical columns are binary.
        for v in [cmp.columns.habitat, cmp.columns.color] {
            prop_assert!(matches!(v, Verdict::Correct | Verdict::Absent));
        }
    }

    #[test]
    fn ordinal_verdicts_flip_when_roles_swap(target in arb_entry(), guess in arb_entry()) {
        let ab = compare(&target, &guess).columns;
        let ba = compare(&guess, &target).columns;
        let flipped = |v: Verdict| match v {
            Verdict::Higher => Verdict::Lower,
            Verdict::Lower => Verdict::Higher,
            other => other,
        };
        prop_assert_eq!(ab.gen, flipped(ba.gen));
        prop_assert_eq!(ab.height, flipped(ba.height));
        prop_assert_eq!(ab.weight, flipped(ba.weight));
        prop_assert_eq!(ab.evolution, flipped(ba.evolution));
    }

    #[test]
    fn selection_is_deterministic_and_in_pool(
        secret in "[a-zA-Z0-9]{4,24}",
        day in "20[0-9]{2}-[0-1][0-9]-[0-3][0-9]",
        mode in proptest::sample::select(vec!["classic", "gen1", "gen5", "gen9"]),
        pool in arb_pool(),
    ) {
        let first = select_target(&secret, &day, mode, &pool).unwrap();
        let second = select_target(&secret, &day, mode, &pool).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(pool.contains(&first));
    }
}
