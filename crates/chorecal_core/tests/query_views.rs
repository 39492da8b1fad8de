use chorecal_core::{
    assignee_filter_options, chores_by_date, filter_by_assignee, sort_by_priority, sort_soonest,
    weekly_completion, Chore, ChoreStatus, Priority,
};
use chrono::{DateTime, NaiveDate, Utc};

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("test timestamp should parse")
        .with_timezone(&Utc)
}

fn chore(id: &str, title: &str, scheduled: Option<&str>) -> Chore {
    let mut chore = Chore::with_id(id.to_string(), title);
    chore.scheduled = scheduled.map(instant);
    chore
}

#[test]
fn sort_soonest_puts_unscheduled_last() {
    let chores = vec![
        chore("a", "Later", Some("2024-06-12T10:00:00Z")),
        chore("b", "Unscheduled", None),
        chore("c", "Sooner", Some("2024-06-10T08:00:00Z")),
    ];

    let sorted = sort_soonest(&chores);
    let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn sort_by_priority_orders_high_first_and_is_stable() {
    let mut low = chore("low", "Low", None);
    low.priority = Priority::Low;
    let mut high = chore("high", "High", None);
    high.priority = Priority::High;
    let medium_a = chore("m1", "First medium", None);
    let medium_b = chore("m2", "Second medium", None);

    let chores = vec![low, medium_a, high, medium_b];
    let sorted = sort_by_priority(&chores);
    let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["high", "m1", "m2", "low"]);
}

#[test]
fn filter_by_assignee_matches_exactly() {
    let mut a = chore("a", "One", None);
    a.assignee = "Sam".to_string();
    let mut b = chore("b", "Two", None);
    b.assignee = "sam".to_string();

    let chores = vec![a, b];
    let filtered = filter_by_assignee(&chores, "Sam");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "a");
}

#[test]
fn assignee_filter_options_are_distinct_sorted_non_empty() {
    let mut a = chore("a", "One", None);
    a.assignee = "Taylor".to_string();
    let mut b = chore("b", "Two", None);
    b.assignee = "Alex".to_string();
    let mut c = chore("c", "Three", None);
    c.assignee = "Taylor".to_string();
    let d = chore("d", "Four", None);

    let chores = vec![a, b, c, d];
    assert_eq!(
        assignee_filter_options(&chores),
        vec!["Alex".to_string(), "Taylor".to_string()]
    );
}

#[test]
fn chores_by_date_groups_and_sorts_within_day() {
    let chores = vec![
        chore("evening", "Evening", Some("2024-06-10T18:00:00Z")),
        chore("other-day", "Other day", Some("2024-06-11T09:00:00Z")),
        chore("morning", "Morning", Some("2024-06-10T08:00:00Z")),
        chore("unscheduled", "Unscheduled", None),
    ];

    let grouped = chores_by_date(&chores);
    assert_eq!(grouped.len(), 2);

    let june_10 = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");
    let day: Vec<&str> = grouped[&june_10].iter().map(|c| c.id.as_str()).collect();
    assert_eq!(day, ["morning", "evening"]);
}

#[test]
fn weekly_completion_rounds_one_of_three_to_33_percent() {
    // 2024-06-10 is a Monday; all three fall in that week.
    let mut done = chore("done", "Done", Some("2024-06-10T09:00:00Z"));
    done.status = ChoreStatus::Completed;
    let pending = chore("p", "Pending", Some("2024-06-12T09:00:00Z"));
    let in_week = chore("w", "Sunday", Some("2024-06-16T20:00:00Z"));
    // Outside the week and unscheduled chores are excluded from the ratio.
    let next_week = chore("n", "Next week", Some("2024-06-17T09:00:00Z"));
    let unscheduled = chore("u", "Unscheduled", None);

    let chores = vec![done, pending, in_week, next_week, unscheduled];
    let progress = weekly_completion(&chores, instant("2024-06-13T12:00:00Z"));

    assert_eq!(progress.total, 3);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.percent, 33);
}

#[test]
fn weekly_completion_is_zero_when_nothing_is_scheduled_this_week() {
    let chores = vec![chore("u", "Unscheduled", None)];
    let progress = weekly_completion(&chores, instant("2024-06-13T12:00:00Z"));

    assert_eq!(progress.total, 0);
    assert_eq!(progress.completed, 0);
    assert_eq!(progress.percent, 0);
}

#[test]
fn weekly_completion_counts_monday_and_sunday_boundaries() {
    let mut monday = chore("mon", "Monday start", Some("2024-06-10T00:00:00Z"));
    monday.status = ChoreStatus::Completed;
    let sunday = chore("sun", "Sunday end", Some("2024-06-16T23:59:00Z"));

    let chores = vec![monday, sunday];
    let progress = weekly_completion(&chores, instant("2024-06-10T00:00:00Z"));

    assert_eq!(progress.total, 2);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.percent, 50);
}
