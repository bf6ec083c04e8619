use motitask::models::{Difficulty, Task, TaskTemplate};
use motitask::recommend::{
    build_view, effective_difficulty, filter_templates, group_by_difficulty, recommended_tier, ViewFilter,
    RECOMMENDED_LIMIT,
};
use proptest::prelude::*;

fn task(id: &str, difficulty: Difficulty, duration: Option<u32>, completed: bool) -> Task {
    Task {
        id: id.into(),
        title: format!("Task {}", id),
        difficulty,
        completed,
        category: None,
        duration,
        has_timer: false,
        has_reminder: false,
        reminder_time: None,
    }
}

fn template(title: &str, base: Difficulty) -> TaskTemplate {
    TaskTemplate { title: title.into(), base_difficulty: base }
}

#[test]
fn test_low_motivation_recommends_easy() {
    assert_eq!(recommended_tier(2), Difficulty::Easy);

    let tasks = vec![
        task("easy", Difficulty::Easy, None, false),
        task("hard", Difficulty::Hard, None, false),
    ];
    let view = build_view(2, &tasks, ViewFilter::Recommended, false);
    assert_eq!(view.pending.len(), 1);
    assert_eq!(view.pending[0].id, "easy");
}

#[test]
fn test_tier_boundaries() {
    for m in 1..=3 {
        assert_eq!(recommended_tier(m), Difficulty::Easy);
    }
    for m in 4..=7 {
        assert_eq!(recommended_tier(m), Difficulty::Medium);
    }
    for m in 8..=10 {
        assert_eq!(recommended_tier(m), Difficulty::Hard);
    }
}

#[test]
fn test_recommended_is_capped_in_insertion_order() {
    let tasks: Vec<Task> = (0..5)
        .map(|i| task(&i.to_string(), Difficulty::Medium, Some(50 - i * 10), false))
        .collect();
    let view = build_view(5, &tasks, ViewFilter::Recommended, false);
    assert_eq!(view.pending.len(), RECOMMENDED_LIMIT);
    let ids: Vec<&str> = view.pending.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn test_recommended_skips_completed() {
    let tasks = vec![
        task("done", Difficulty::Hard, None, true),
        task("open", Difficulty::Hard, None, false),
    ];
    let view = build_view(9, &tasks, ViewFilter::Recommended, false);
    assert_eq!(view.pending.len(), 1);
    assert_eq!(view.pending[0].id, "open");
    assert_eq!(view.completed.len(), 1);
}

#[test]
fn test_all_view_sorts_by_difficulty_then_duration() {
    let tasks = vec![
        task("h", Difficulty::Hard, Some(5), false),
        task("m30", Difficulty::Medium, Some(30), false),
        task("e", Difficulty::Easy, Some(60), false),
        task("m_none", Difficulty::Medium, None, false),
        task("m10", Difficulty::Medium, Some(10), false),
    ];
    let view = build_view(5, &tasks, ViewFilter::All, false);
    let ids: Vec<&str> = view.pending.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["e", "m_none", "m10", "m30", "h"]);

    let groups = view.groups();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[1].difficulty, Difficulty::Medium);
    assert_eq!(groups[1].tasks.len(), 3);
}

#[test]
fn test_empty_buckets_are_not_rendered() {
    let tasks = vec![
        task("a", Difficulty::Hard, None, false),
        task("b", Difficulty::Easy, None, false),
    ];
    let groups = group_by_difficulty(&tasks);
    let tiers: Vec<Difficulty> = groups.iter().map(|g| g.difficulty).collect();
    assert_eq!(tiers, vec![Difficulty::Easy, Difficulty::Hard]);
}

#[test]
fn test_hide_completed_drops_completed_section() {
    let tasks = vec![
        task("a", Difficulty::Hard, Some(20), true),
        task("b", Difficulty::Easy, Some(20), true),
        task("c", Difficulty::Medium, None, false),
    ];
    let shown = build_view(5, &tasks, ViewFilter::All, false);
    let ids: Vec<&str> = shown.completed.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let hidden = build_view(5, &tasks, ViewFilter::All, true);
    assert!(hidden.completed.is_empty());
    assert_eq!(hidden.pending.len(), 1);
}

#[test]
fn test_no_matching_tasks_is_an_empty_view() {
    let view = build_view(9, &[], ViewFilter::Recommended, false);
    assert!(view.is_empty());
    assert!(view.groups().is_empty());
}

#[test]
fn test_template_filtering_by_motivation() {
    let templates = vec![
        template("stretch", Difficulty::Easy),
        template("jog", Difficulty::Medium),
        template("gym", Difficulty::Hard),
        template("walk", Difficulty::Easy),
    ];

    let low: Vec<&str> = filter_templates(&templates, 3).iter().map(|t| t.title.as_str()).collect();
    assert_eq!(low, vec!["stretch", "walk"]);

    let mid: Vec<&str> = filter_templates(&templates, 7).iter().map(|t| t.title.as_str()).collect();
    assert_eq!(mid, vec!["jog"]);

    let high: Vec<&str> = filter_templates(&templates, 8).iter().map(|t| t.title.as_str()).collect();
    assert_eq!(high, vec!["gym"]);

    assert!(filter_templates(&templates[..1], 9).is_empty());
}

#[test]
fn test_effective_difficulty() {
    for m in 1..=10 {
        assert_eq!(effective_difficulty(Difficulty::Easy, m), Difficulty::Easy);
    }
    assert_eq!(effective_difficulty(Difficulty::Medium, 3), Difficulty::Easy);
    assert_eq!(effective_difficulty(Difficulty::Medium, 4), Difficulty::Medium);
    assert_eq!(effective_difficulty(Difficulty::Medium, 10), Difficulty::Medium);
    assert_eq!(effective_difficulty(Difficulty::Hard, 3), Difficulty::Easy);
    assert_eq!(effective_difficulty(Difficulty::Hard, 7), Difficulty::Medium);
    assert_eq!(effective_difficulty(Difficulty::Hard, 8), Difficulty::Hard);
}

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Medium), Just(Difficulty::Hard)]
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((arb_difficulty(), prop::option::of(0u32..120), any::<bool>()), 0..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (d, dur, done))| task(&i.to_string(), d, dur, done))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_tier_is_monotonic(m in 1u8..10) {
        prop_assert!(recommended_tier(m) <= recommended_tier(m + 1));
    }

    #[test]
    fn prop_all_view_is_a_permutation_of_pending(tasks in arb_tasks(), m in 1u8..=10) {
        let view = build_view(m, &tasks, ViewFilter::All, true);
        let pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
        prop_assert_eq!(view.pending.len(), pending.len());

        let groups = view.groups();
        let grouped: usize = groups.iter().map(|g| g.tasks.len()).sum();
        prop_assert_eq!(grouped, pending.len());

        for t in &pending {
            let hits = groups
                .iter()
                .filter(|g| g.tasks.iter().any(|x| x.id == t.id))
                .count();
            prop_assert_eq!(hits, 1);
            let bucket = groups.iter().find(|g| g.tasks.iter().any(|x| x.id == t.id)).unwrap();
            prop_assert_eq!(bucket.difficulty, t.difficulty);
        }
    }

    #[test]
    fn prop_recommended_matches_tier(tasks in arb_tasks(), m in 1u8..=10) {
        let view = build_view(m, &tasks, ViewFilter::Recommended, false);
        prop_assert!(view.pending.len() <= RECOMMENDED_LIMIT);
        for t in &view.pending {
            prop_assert!(!t.completed);
            prop_assert_eq!(t.difficulty, recommended_tier(m));
        }
    }
}
