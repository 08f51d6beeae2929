use super::common::*;
use crate::quiz::domain::{Category, ResultKey, ScoreVector};
use crate::quiz::resolver::{find_content, lookup, resolve, resolve_with, TiePolicy};

fn scores(self_starter: u32, turning_point: u32, explorer: u32, reflective: u32) -> ScoreVector {
    ScoreVector {
        self_starter,
        turning_point,
        explorer,
        reflective,
    }
}

#[test]
fn single_leader_resolves_to_that_category() {
    assert_eq!(resolve(&scores(5, 2, 1, 0)).to_string(), "自発型");
    assert_eq!(resolve(&scores(0, 1, 2, 7)).to_string(), "内省型");
}

#[test]
fn two_way_tie_joins_in_canonical_order() {
    let key = resolve(&scores(3, 3, 1, 0));
    assert_eq!(key.to_string(), "自発型・転機型");

    let key = resolve(&scores(0, 1, 4, 4));
    assert_eq!(
        key.categories(),
        &[Category::Explorer, Category::Reflective]
    );
}

#[test]
fn three_way_tie_joins_in_canonical_order() {
    assert_eq!(
        resolve(&scores(2, 2, 2, 0)).to_string(),
        "自発型・転機型・探求型"
    );
    assert_eq!(
        resolve(&scores(1, 5, 5, 5)).to_string(),
        "転機型・探求型・内省型"
    );
}

#[test]
fn four_way_tie_collapses_to_first_category() {
    assert_eq!(resolve(&ScoreVector::default()), ResultKey::single(Category::SelfStarter));
    assert_eq!(resolve(&scores(4, 4, 4, 4)).to_string(), "自発型");
}

#[test]
fn combine_all_policy_reports_full_tie() {
    let key = resolve_with(&scores(4, 4, 4, 4), TiePolicy::CombineAll);
    assert_eq!(key.to_string(), "自発型・転機型・探求型・内省型");

    let key = resolve_with(&scores(3, 3, 1, 0), TiePolicy::CombineAll);
    assert_eq!(key.to_string(), "自発型・転機型");
}

#[test]
fn resolve_is_deterministic() {
    let vector = scores(2, 6, 6, 1);
    assert_eq!(resolve(&vector), resolve(&vector));
}

#[test]
fn lookup_returns_exact_entry_unmodified() {
    let bank = content_bank();
    let content = lookup(&ResultKey::single(Category::Explorer), &bank);
    assert_eq!(content, &result_copy("探求型", "Explorer"));
}

#[test]
fn lookup_hits_curated_mixed_key() {
    let bank = content_bank();
    let key = resolve(&scores(3, 3, 1, 0));
    let found = find_content(&key, &bank);
    assert!(found.is_exact());
    assert_eq!(found.content().title, "Mixed starter");
}

#[test]
fn lookup_falls_back_to_default_for_unmapped_key() {
    let bank = content_bank();
    let key: ResultKey = "自発型・探求型".parse().expect("valid key");
    let found = find_content(&key, &bank);
    assert!(!found.is_exact());
    assert_eq!(found.content(), bank.default_content());
    assert_eq!(lookup(&key, &bank).key, "自発型");

    let three_way = resolve(&scores(2, 2, 2, 0));
    assert_eq!(lookup(&three_way, &bank).key, "自発型");
}

#[test]
fn tie_policy_parses_aliases() {
    assert_eq!(TiePolicy::parse("Combine"), Some(TiePolicy::CombineAll));
    assert_eq!(TiePolicy::parse("collapse"), Some(TiePolicy::CollapseToFirst));
    assert_eq!(TiePolicy::parse("random"), None);
}
