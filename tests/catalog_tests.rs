use motitask::categories::{all_categories, builtin_categories, category_name, find_category, new_custom_category};
use motitask::messages::{completion_rate, empty_state, encouragement, mood, motivation_blurb, streak_banner, Mood};
use motitask::models::{ColorTag, Difficulty, IconTag};
use motitask::recommend::filter_templates;
use motitask::session::{add_task, delete_task, reset_daily_tasks, resolve_id, short_id, toggle_task, NewTask};
use motitask::Error;

#[test]
fn test_builtin_catalog_shape() {
    let builtin = builtin_categories();
    let ids: Vec<&str> = builtin.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["study", "fitness", "cleaning", "personal", "hobby", "mood"]);

    for c in &builtin {
        assert_eq!(c.tasks.len(), 9, "{}", c.id);
        for d in Difficulty::ALL {
            let count = c.tasks.iter().filter(|t| t.base_difficulty == d).count();
            assert_eq!(count, 3, "{} {}", c.id, d);
        }
    }
}

#[test]
fn test_every_builtin_category_offers_three_per_tier() {
    for c in builtin_categories() {
        for m in 1..=10 {
            assert_eq!(filter_templates(&c.tasks, m).len(), 3, "{} at {}", c.id, m);
        }
    }
}

#[test]
fn test_custom_categories_follow_builtins() {
    let garden = new_custom_category("Garden", IconTag::Heart, ColorTag::Emerald).unwrap();
    let all = all_categories(std::slice::from_ref(&garden));
    assert_eq!(all.len(), 7);
    assert_eq!(all[6].id, garden.id);

    assert_eq!(find_category(&[garden.clone()], &garden.id).unwrap().name, "Garden");
    assert_eq!(find_category(&[], "FITNESS").unwrap().id, "fitness");
    assert!(find_category(&[], "unknown").is_none());
}

#[test]
fn test_new_custom_categories_get_distinct_ids() {
    let a = new_custom_category("A", IconTag::Star, ColorTag::Blue).unwrap();
    let b = new_custom_category("A", IconTag::Star, ColorTag::Blue).unwrap();
    assert_ne!(a.id, b.id);
    assert!(matches!(
        new_custom_category("  ", IconTag::Star, ColorTag::Blue),
        Err(Error::EmptyName)
    ));
}

#[test]
fn test_category_name_fallbacks() {
    assert_eq!(category_name(&[], None), "-");
    assert_eq!(category_name(&[], Some("custom")), "Custom");
    assert_eq!(category_name(&[], Some("mood")), "Mood Booster");
    assert_eq!(category_name(&[], Some("deleted-42")), "deleted-42");
}

#[test]
fn test_tag_parsing() {
    assert_eq!("gamepad2".parse::<IconTag>().unwrap(), IconTag::Gamepad2);
    assert_eq!("Teal".parse::<ColorTag>().unwrap(), ColorTag::Teal);
    assert!("Rocket".parse::<IconTag>().is_err());
    assert_eq!(IconTag::from("Rocket".to_string()), IconTag::Star);
    assert_eq!(ColorTag::default(), ColorTag::Blue);
}

#[test]
fn test_mood_selection() {
    assert_eq!(mood(0, 0, 9), Mood::NoTasks);
    assert_eq!(mood(0, 4, 2), Mood::LowEnergy);
    assert_eq!(mood(4, 4, 3), Mood::LowEnergy);
    assert_eq!(mood(4, 4, 6), Mood::Complete);
    assert_eq!(mood(3, 4, 6), Mood::HighProgress);
    assert_eq!(mood(2, 5, 6), Mood::MidProgress);
    assert_eq!(mood(1, 5, 6), Mood::LowProgress);
}

#[test]
fn test_encouragement_pick_wraps() {
    assert_eq!(encouragement(0, 0, 5, 0), encouragement(0, 0, 5, 3));
    assert_ne!(encouragement(0, 0, 5, 0), encouragement(0, 0, 5, 1));
}

#[test]
fn test_copy_helpers() {
    assert_eq!(empty_state(2).0, "Start Small");
    assert_eq!(empty_state(7).0, "Ready to Begin");
    assert_eq!(empty_state(8).0, "Let's Go!");
    assert_ne!(motivation_blurb(1), motivation_blurb(10));

    assert_eq!(completion_rate(0, 0), 0);
    assert_eq!(completion_rate(1, 3), 33);
    assert_eq!(completion_rate(2, 3), 67);

    assert!(streak_banner(0).contains("start your streak"));
    assert!(streak_banner(4).contains("4-day"));
}

#[test]
fn test_session_round() {
    let mut tasks = Vec::new();
    let mut streak = 0;

    let mut new = NewTask::new("  Plan week  ", Difficulty::Hard);
    new.reminder_time = Some("09:00".into());
    let planned = add_task(&mut tasks, new).unwrap();
    assert_eq!(planned.title, "Plan week");
    assert!(planned.has_reminder);

    let walk = add_task(&mut tasks, NewTask::new("Walk", Difficulty::Easy)).unwrap();
    assert_eq!(tasks[0].id, walk.id);
    assert!(matches!(add_task(&mut tasks, NewTask::new("", Difficulty::Easy)), Err(Error::EmptyTitle)));

    assert!(toggle_task(&mut tasks, &mut streak, &walk.id).unwrap());
    assert!(toggle_task(&mut tasks, &mut streak, &planned.id).unwrap());
    assert!(!toggle_task(&mut tasks, &mut streak, &planned.id).unwrap());
    assert_eq!(streak, 2);

    assert_eq!(reset_daily_tasks(&mut tasks), 1);
    assert_eq!(reset_daily_tasks(&mut tasks), 0);

    let removed = delete_task(&mut tasks, &walk.id).unwrap();
    assert_eq!(removed.title, "Walk");
    assert!(matches!(delete_task(&mut tasks, &walk.id), Err(Error::TaskNotFound(_))));
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_resolve_id_prefixes() {
    let mut tasks = Vec::new();
    add_task(&mut tasks, NewTask::new("A", Difficulty::Easy)).unwrap();
    add_task(&mut tasks, NewTask::new("B", Difficulty::Easy)).unwrap();
    tasks[0].id = "abc-1".into();
    tasks[1].id = "abc-2".into();

    assert_eq!(resolve_id(&tasks, "abc-1").unwrap(), "abc-1");
    assert_eq!(resolve_id(&tasks, "abc-2").unwrap(), "abc-2");
    assert!(matches!(resolve_id(&tasks, "abc"), Err(Error::AmbiguousId(_))));
    assert!(matches!(resolve_id(&tasks, "xyz"), Err(Error::TaskNotFound(_))));
    assert!(matches!(resolve_id(&tasks, ""), Err(Error::TaskNotFound(_))));
}

#[test]
fn test_streak_saturates_at_max() {
    let mut tasks = Vec::new();
    let task = add_task(&mut tasks, NewTask::new("Read", Difficulty::Easy)).unwrap();
    let mut streak = u32::MAX;

    assert!(toggle_task(&mut tasks, &mut streak, &task.id).unwrap());
    assert_eq!(streak, u32::MAX);
}

#[test]
fn test_short_id_for_uuids() {
    let mut tasks = Vec::new();
    let a = add_task(&mut tasks, NewTask::new("A", Difficulty::Easy)).unwrap();
    add_task(&mut tasks, NewTask::new("B", Difficulty::Easy)).unwrap();

    let short = short_id(&a.id, &tasks);
    assert_eq!(short.chars().count(), 8);
    assert_eq!(resolve_id(&tasks, short).unwrap(), a.id);
}

#[test]
fn test_short_id_widens_until_unique() {
    let mut tasks = Vec::new();
    for _ in 0..3 {
        add_task(&mut tasks, NewTask::new("Imported", Difficulty::Medium)).unwrap();
    }
    tasks[0].id = "1760870000001".into();
    tasks[1].id = "1760870000002".into();
    tasks[2].id = "1760870012345".into();

    assert_eq!(short_id("1760870000001", &tasks), "1760870000001");
    assert_eq!(short_id("1760870012345", &tasks), "176087001");
    for t in &tasks {
        assert_eq!(resolve_id(&tasks, short_id(&t.id, &tasks)).unwrap(), t.id);
    }
}

#[test]
fn test_short_id_respects_char_boundaries() {
    let mut tasks = Vec::new();
    add_task(&mut tasks, NewTask::new("A", Difficulty::Easy)).unwrap();
    add_task(&mut tasks, NewTask::new("B", Difficulty::Easy)).unwrap();
    tasks[0].id = "abcdefgé-1".into();
    tasks[1].id = "abc".into();

    assert_eq!(short_id("abcdefgé-1", &tasks), "abcdefgé");
    assert_eq!(short_id("abc", &tasks), "abc");
    assert_eq!(resolve_id(&tasks, "abcdefgé").unwrap(), "abcdefgé-1");

    tasks[1].id = "abcdefgé-2".into();
    assert_eq!(short_id("abcdefgé-1", &tasks), "abcdefgé-1");
}
