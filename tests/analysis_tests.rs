mod common;

use proptest::prelude::*;
use team_analyzer::{
    chart::multiplier, summarize, BaseStats, Category, Creature, Defenses, SummaryLine, Team,
    TypeAnalysis,
};

use common::{creature, tallies};

fn category() -> impl Strategy<Value = Category> {
    (0..18usize).prop_map(|i| Category::all().nth(i).unwrap())
}

/// One or two distinct categories
fn categories() -> impl Strategy<Value = Vec<Category>> {
    prop_oneof![
        category().prop_map(|c| vec![c]),
        (category(), category())
            .prop_filter("distinct", |(a, b)| a != b)
            .prop_map(|(a, b)| vec![a, b]),
    ]
}

fn roster() -> impl Strategy<Value = Vec<Vec<Category>>> {
    prop::collection::vec(categories(), 1..=6)
}

fn team_of(members: &[Vec<Category>]) -> Team {
    let mut team = Team::new();
    for (i, cs) in members.iter().enumerate() {
        team.push(Creature::new(&format!("m{}", i), i as u32, cs.clone(), BaseStats::new()).unwrap())
            .unwrap();
    }
    team
}

/// A single grass/poison member only has minor weaknesses
#[test]
fn test_grass_poison_end_to_end() {
    let mut team = Team::new();
    team.push(creature(
        "Bulbasaur",
        1,
        &[Category::Grass, Category::Poison],
        [45, 49, 49, 65, 65, 45],
    ))
    .unwrap();

    let d = team[0].defenses();
    assert_eq!(d[Category::Fire], 2.0);
    assert_eq!(d[Category::Psychic], 2.0);
    assert_eq!(d[Category::Ground], 1.0);

    let analysis = TypeAnalysis::new(&team);
    assert_eq!(
        tallies(&analysis.weaknesses),
        vec![
            (Category::Fire, 1),
            (Category::Ice, 1),
            (Category::Flying, 1),
            (Category::Psychic, 1),
            (Category::Bug, 1),
        ]
    );

    let lines = summarize(&analysis);
    assert!(matches!(lines[0], SummaryLine::MinorWeaknesses(_)));
    assert!(!lines
        .iter()
        .any(|l| matches!(l, SummaryLine::MajorWeaknesses(_))));
    assert_eq!(
        lines[0].text(1),
        "   Minor weaknesses: Fire, Ice, Flying, Psychic, Bug"
    );
}

#[test]
fn test_shared_weakness_becomes_major() {
    let mut team = Team::new();
    for (i, cs) in [
        &[Category::Fire][..],
        &[Category::Fire, Category::Flying][..],
        &[Category::Rock][..],
        &[Category::Grass][..],
    ]
    .iter()
    .enumerate()
    {
        team.push(creature(&format!("m{}", i), i as u32, cs, [50; 6]))
            .unwrap();
    }
    // Water hits fire, fire/flying and rock; grass resists it
    let analysis = TypeAnalysis::new(&team);
    assert_eq!(analysis.weaknesses.get(&Category::Water), Some(&3));
    // Fire/flying takes 4x from rock; still counted once
    assert_eq!(analysis.weaknesses.get(&Category::Rock), Some(&2));

    let lines = summarize(&analysis);
    assert_eq!(lines[0].text(4), "⚠  Major weaknesses: Water (3/4)");
}

proptest! {
    #[test]
    fn prop_unlisted_pairs_are_neutral(a in category(), d in category()) {
        let listed = team_analyzer::chart::row(a).iter().any(|(c, _)| *c == d);
        if !listed {
            prop_assert_eq!(multiplier(a, d), 1.0);
        }
    }

    #[test]
    fn prop_defenses_are_products(cs in categories(), a in category()) {
        let d = Defenses::new(&cs);
        let expected: f64 = cs.iter().map(|&c| multiplier(a, c)).product();
        prop_assert_eq!(d[a], expected);
    }

    #[test]
    fn prop_analysis_ignores_order(members in roster(), seed in any::<u64>()) {
        let mut shuffled = members.clone();
        // Deterministic shuffle driven by the generated seed
        let n = shuffled.len();
        let mut s = seed;
        for i in (1..n).rev() {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (s >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        prop_assert_eq!(
            TypeAnalysis::new(&team_of(&members)),
            TypeAnalysis::new(&team_of(&shuffled))
        );
    }

    #[test]
    fn prop_reversed_roster_is_equal(members in roster()) {
        let mut reversed = members.clone();
        reversed.reverse();
        prop_assert_eq!(
            TypeAnalysis::new(&team_of(&members)),
            TypeAnalysis::new(&team_of(&reversed))
        );
    }

    #[test]
    fn prop_tallies_bounded_by_team_size(members in roster()) {
        let team = team_of(&members);
        let a = TypeAnalysis::new(&team);
        for c in Category::all() {
            let w = a.weaknesses.get(&c).copied().unwrap_or(0);
            let r = a.resistances.get(&c).copied().unwrap_or(0);
            let i = a.immunities.get(&c).copied().unwrap_or(0);
            prop_assert!(w + r + i <= team.len());
        }
        prop_assert!(a.weaknesses.values().all(|n| *n > 0));
        prop_assert!(a.resistances.values().all(|n| *n > 0));
        prop_assert!(a.immunities.values().all(|n| *n > 0));
    }

    #[test]
    fn prop_balanced_iff_no_tier(members in roster()) {
        let a = TypeAnalysis::new(&team_of(&members));
        let lines = summarize(&a);
        let any_tier = !a.weaknesses.is_empty()
            || a.resistances.values().any(|n| *n >= 2)
            || !a.immunities.is_empty();
        prop_assert_eq!(lines == vec![SummaryLine::Balanced], !any_tier);
        let no_empty_tier = lines.iter().all(|l| match l {
            SummaryLine::MajorWeaknesses(e)
            | SummaryLine::StrongResistances(e)
            | SummaryLine::Immunities(e) => !e.is_empty(),
            SummaryLine::MinorWeaknesses(e) => !e.is_empty(),
            SummaryLine::Balanced => true,
        });
        prop_assert!(no_empty_tier, "a tier line was emitted with no entries");
    }
}
