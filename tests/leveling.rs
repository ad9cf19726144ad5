use std::error::Error;
use std::path::PathBuf;

use plandag::id::TaskId;
use plandag::layout::assign_levels;
use plandag::table::model::PrecedenceMap;
use plandag::table::load_and_validate;

type TestResult = Result<(), Box<dyn Error>>;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn precedence(entries: &[(&str, &[&str])]) -> PrecedenceMap {
    entries
        .iter()
        .map(|(task, preds)| {
            (
                TaskId::from(*task),
                preds.iter().map(|p| TaskId::from(*p)).collect(),
            )
        })
        .collect()
}

#[test]
fn worked_example_levels() -> TestResult {
    let map = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "2"]), ("4", &["3"])]);

    let levels = assign_levels(&map);

    assert_eq!(levels[&TaskId::from(1)], 0);
    assert_eq!(levels[&TaskId::from(2)], 0);
    assert_eq!(levels[&TaskId::from(3)], 1);
    assert_eq!(levels[&TaskId::from(4)], 2);

    Ok(())
}

#[test]
fn all_roots_sit_at_level_zero() -> TestResult {
    let map = precedence(&[("1", &[]), ("2", &[]), ("3", &[])]);

    let levels = assign_levels(&map);

    assert!(levels.values().all(|&level| level == 0));
    assert_eq!(levels.len(), 3);

    Ok(())
}

#[test]
fn level_is_the_longest_chain_not_the_first_eligible_one() -> TestResult {
    // 4 depends on both the root directly and on the end of a longer chain;
    // its level must follow the chain.
    let map = precedence(&[("1", &[]), ("2", &["1"]), ("3", &["2"]), ("4", &["1", "3"])]);

    let levels = assign_levels(&map);

    assert_eq!(levels[&TaskId::from(4)], 3);
    // The root keeps level 0 no matter how deep its dependents reach.
    assert_eq!(levels[&TaskId::from(1)], 0);

    Ok(())
}

#[test]
fn predecessor_order_does_not_affect_levels() -> TestResult {
    let forward = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "2"]), ("4", &["3"])]);
    let reversed = precedence(&[("1", &[]), ("2", &[]), ("3", &["2", "1"]), ("4", &["3"])]);

    assert_eq!(assign_levels(&forward), assign_levels(&reversed));

    Ok(())
}

#[test]
fn duplicate_predecessor_entries_are_harmless() -> TestResult {
    let with_dupes = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "1", "2"])]);
    let without = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "2"])]);

    assert_eq!(assign_levels(&with_dupes), assign_levels(&without));

    Ok(())
}

#[test]
fn every_task_sits_one_above_its_highest_predecessor() -> TestResult {
    let map = load_and_validate(fixture("site.tsv"))?;

    let levels = assign_levels(&map);

    assert_eq!(levels.len(), map.len());
    for (task, predecessors) in map.iter() {
        let expected = predecessors
            .iter()
            .map(|pred| levels[pred] + 1)
            .max()
            .unwrap_or(0);
        assert_eq!(levels[task], expected, "level mismatch for {task}");
    }

    Ok(())
}

#[test]
fn peers_in_one_frontier_share_a_level() -> TestResult {
    let map = load_and_validate(fixture("site.tsv"))?;

    let levels = assign_levels(&map);

    // 10 and 2 both wait only on the root, so they are peers at level 1.
    assert_eq!(levels[&TaskId::Num(10)], 1);
    assert_eq!(levels[&TaskId::Num(2)], 1);

    Ok(())
}
