use std::collections::BTreeMap;
use std::error::Error;

use plandag::id::TaskId;
use plandag::layout::{Position, assign_levels, plan_positions};
use plandag::table::model::PrecedenceMap;

type TestResult = Result<(), Box<dyn Error>>;

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

fn pos(positions: &BTreeMap<TaskId, Position>, id: &str) -> (u32, f64) {
    let p = positions[&TaskId::from(id)];
    (p.x, p.y)
}

#[test]
fn worked_example_positions() -> TestResult {
    let map = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "2"]), ("4", &["3"])]);

    let positions = plan_positions(&assign_levels(&map));

    assert_eq!(pos(&positions, "1"), (0, 0.5));
    assert_eq!(pos(&positions, "2"), (0, -0.5));
    assert_eq!(pos(&positions, "3"), (1, 0.0));
    assert_eq!(pos(&positions, "4"), (2, 0.0));

    Ok(())
}

#[test]
fn three_roots_spread_evenly_around_zero() -> TestResult {
    let map = precedence(&[("1", &[]), ("2", &[]), ("3", &[])]);

    let positions = plan_positions(&assign_levels(&map));

    assert_eq!(pos(&positions, "1"), (0, 1.0));
    assert_eq!(pos(&positions, "2"), (0, 0.0));
    assert_eq!(pos(&positions, "3"), (0, -1.0));

    Ok(())
}

#[test]
fn no_two_tasks_share_a_position_and_levels_balance_around_zero() -> TestResult {
    let map = precedence(&[
        ("1", &[]),
        ("2", &[]),
        ("3", &[]),
        ("4", &[]),
        ("5", &["1", "2"]),
        ("6", &["3", "4"]),
        ("7", &["5", "6"]),
    ]);

    let positions = plan_positions(&assign_levels(&map));

    let mut by_level: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for p in positions.values() {
        by_level.entry(p.x).or_default().push(p.y);
    }

    for (level, ys) in by_level {
        // Unique y per level.
        let mut sorted = ys.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted.dedup();
        assert_eq!(sorted.len(), ys.len(), "duplicate y at level {level}");

        // Symmetric around 0 and spaced by 1.
        let sum: f64 = ys.iter().sum();
        assert!(sum.abs() < 1e-9, "level {level} not centered: {ys:?}");
        for pair in sorted.windows(2) {
            assert!((pair[1] - pair[0] - 1.0).abs() < 1e-9);
        }
    }

    Ok(())
}

#[test]
fn planning_is_idempotent() -> TestResult {
    let map = precedence(&[("1", &[]), ("2", &[]), ("3", &["1", "2"]), ("4", &["3"])]);
    let levels = assign_levels(&map);

    assert_eq!(plan_positions(&levels), plan_positions(&levels));

    Ok(())
}

#[test]
fn ranks_follow_the_id_order_numbers_first_then_labels() -> TestResult {
    // All at level 0; 2 < 10 numerically, labels come last.
    let map = precedence(&[("10", &[]), ("2", &[]), ("alpha", &[])]);

    let positions = plan_positions(&assign_levels(&map));

    assert_eq!(pos(&positions, "2"), (0, 1.0));
    assert_eq!(pos(&positions, "10"), (0, 0.0));
    assert_eq!(pos(&positions, "alpha"), (0, -1.0));

    Ok(())
}

#[test]
fn scaling_stretches_coordinates_without_touching_the_layout() -> TestResult {
    let position = Position { x: 2, y: -0.5 };

    assert_eq!(position.scaled(1.0), (2.0, -0.5));
    assert_eq!(position.scaled(3.0), (6.0, -1.5));

    Ok(())
}
