use crate::model::group::TaskGroup;

/// Stable sort of a group's tasks, earliest due date first. Tasks sharing
/// a due date keep their existing order. The serializer writes tasks
/// as-given, so a caller who wants due-date order on disk runs this before
/// saving; a caller preserving hand-edited file order skips it.
pub fn sort_group_tasks(group: &mut TaskGroup) {
    group.tasks.sort_by(|a, b| a.due_date().cmp(&b.due_date()));
}

/// [`sort_group_tasks`] over every group. Group order is untouched.
pub fn sort_all_groups(groups: &mut [TaskGroup]) {
    for group in groups {
        sort_group_tasks(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use chrono::NaiveDate;

    fn task(m: u32, d: u32, name: &str) -> Task {
        let date = NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        Task::with_reference(date, name, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
    }

    fn names(group: &TaskGroup) -> Vec<&str> {
        group.tasks.iter().map(Task::name).collect()
    }

    #[test]
    fn test_sorts_earliest_first() {
        let mut group = TaskGroup::new(
            "g",
            vec![task(6, 7, "Tea"), task(5, 5, "Coffee"), task(5, 20, "Waffles")],
        );
        sort_group_tasks(&mut group);
        assert_eq!(names(&group), vec!["Coffee", "Waffles", "Tea"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_due_dates() {
        let mut group = TaskGroup::new(
            "g",
            vec![task(5, 5, "First"), task(5, 5, "Second"), task(5, 1, "Early")],
        );
        sort_group_tasks(&mut group);
        assert_eq!(names(&group), vec!["Early", "First", "Second"]);
    }

    #[test]
    fn test_sort_all_groups_keeps_group_order() {
        let mut groups = vec![
            TaskGroup::new("b", vec![task(6, 7, "Tea"), task(5, 5, "Coffee")]),
            TaskGroup::new("a", vec![task(5, 2, "Waffles")]),
        ];
        sort_all_groups(&mut groups);
        assert_eq!(groups[0].name, "b");
        assert_eq!(names(&groups[0]), vec!["Coffee", "Tea"]);
        assert_eq!(groups[1].name, "a");
    }
}
