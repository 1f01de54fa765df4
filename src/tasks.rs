use crate::lock::is_locked;
use crate::models::{Store, Task};
use uuid::Uuid;

/// Why an operation left the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Locked,
    EmptyText,
    MissingDay,
    MissingTask,
}

impl Ignored {
    pub fn as_str(self) -> &'static str {
        match self {
            Ignored::Locked => "locked",
            Ignored::EmptyText => "empty_text",
            Ignored::MissingDay => "missing_day",
            Ignored::MissingTask => "missing_task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Applied(T),
    Ignored(Ignored),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn ignored(&self) -> Option<Ignored> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Ignored(reason) => Some(*reason),
        }
    }
}

impl Store {
    /// Appends a task to `date`, returning its id.
    pub fn add_task(&mut self, date: &str, text: &str, today: &str) -> Outcome<String> {
        if is_locked(date, self, today) {
            return Outcome::Ignored(Ignored::Locked);
        }
        let text = text.trim();
        if text.is_empty() {
            return Outcome::Ignored(Ignored::EmptyText);
        }

        let id = Uuid::new_v4().to_string();
        self.days.entry(date.to_string()).or_default().tasks.push(Task {
            id: id.clone(),
            text: text.to_string(),
            done: false,
        });
        Outcome::Applied(id)
    }

    /// Flips a task's `done` flag. Completing the last open task locks the day for good.
    pub fn toggle_task(&mut self, date: &str, id: &str, today: &str) -> Outcome {
        if is_locked(date, self, today) {
            return Outcome::Ignored(Ignored::Locked);
        }
        let Some(day) = self.days.get_mut(date) else {
            return Outcome::Ignored(Ignored::MissingDay);
        };
        let Some(task) = day.task_mut(id) else {
            return Outcome::Ignored(Ignored::MissingTask);
        };

        task.done = !task.done;
        if day.all_done() {
            day.locked = true;
        }
        Outcome::Applied(())
    }

    /// Removes a task. The day's `locked` flag is left as it was.
    pub fn delete_task(&mut self, date: &str, id: &str, today: &str) -> Outcome {
        if is_locked(date, self, today) {
            return Outcome::Ignored(Ignored::Locked);
        }
        let Some(day) = self.days.get_mut(date) else {
            return Outcome::Ignored(Ignored::MissingDay);
        };
        let before = day.tasks.len();
        day.tasks.retain(|task| task.id != id);
        if day.tasks.len() == before {
            return Outcome::Ignored(Ignored::MissingTask);
        }
        Outcome::Applied(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::is_locked;
    use crate::models::DayRecord;

    const TODAY: &str = "2024-06-01";

    fn added(store: &mut Store, date: &str, text: &str) -> String {
        match store.add_task(date, text, TODAY) {
            Outcome::Applied(id) => id,
            Outcome::Ignored(reason) => panic!("add ignored: {reason:?}"),
        }
    }

    #[test]
    fn add_creates_day_with_open_task() {
        let mut store = Store::default();
        added(&mut store, TODAY, "Buy milk");

        assert_eq!(store.days.len(), 1);
        let day = store.day(TODAY).expect("missing day");
        assert_eq!(day.tasks.len(), 1);
        assert_eq!(day.tasks[0].text, "Buy milk");
        assert!(!day.tasks[0].done);
        assert!(!day.locked);
    }

    #[test]
    fn add_trims_text_and_rejects_blank() {
        let mut store = Store::default();
        assert_eq!(
            store.add_task(TODAY, "   ", TODAY),
            Outcome::Ignored(Ignored::EmptyText)
        );
        assert!(store.days.is_empty());

        added(&mut store, TODAY, "  walk dog \n");
        assert_eq!(store.day(TODAY).unwrap().tasks[0].text, "walk dog");
    }

    #[test]
    fn add_assigns_distinct_ids() {
        let mut store = Store::default();
        let first = added(&mut store, TODAY, "a");
        let second = added(&mut store, TODAY, "b");
        assert_ne!(first, second);
        let ids: Vec<_> = store.day(TODAY).unwrap().tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn add_to_past_day_is_ignored() {
        let mut store = Store::default();
        let before = store.clone();
        assert_eq!(
            store.add_task("2024-05-01", "Buy milk", TODAY),
            Outcome::Ignored(Ignored::Locked)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn add_to_completed_day_is_ignored() {
        let mut store = Store::default();
        let id = added(&mut store, TODAY, "only");
        assert!(store.toggle_task(TODAY, &id, TODAY).is_applied());

        let before = store.clone();
        assert_eq!(store.add_task(TODAY, "more", TODAY).ignored(), Some(Ignored::Locked));
        assert_eq!(store, before);
    }

    #[test]
    fn toggling_single_task_locks_day() {
        let mut store = Store::default();
        let id = added(&mut store, TODAY, "Buy milk");
        assert!(store.toggle_task(TODAY, &id, TODAY).is_applied());

        let day = store.day(TODAY).unwrap();
        assert!(day.tasks[0].done);
        assert!(day.locked);
        assert!(is_locked(TODAY, &store, TODAY));
    }

    #[test]
    fn completion_lock_is_sticky() {
        let mut store = Store::default();
        let id = added(&mut store, TODAY, "a");
        store.toggle_task(TODAY, &id, TODAY);

        // Reopen the task behind the API; the flag still holds.
        store.days.get_mut(TODAY).unwrap().tasks[0].done = false;
        assert_eq!(store.toggle_task(TODAY, &id, TODAY).ignored(), Some(Ignored::Locked));
        assert!(store.day(TODAY).unwrap().locked);
    }

    #[test]
    fn partial_completion_keeps_day_open() {
        let mut store = Store::default();
        let first = added(&mut store, TODAY, "a");
        added(&mut store, TODAY, "b");

        assert!(store.toggle_task(TODAY, &first, TODAY).is_applied());
        assert!(!store.day(TODAY).unwrap().locked);
        assert!(store.toggle_task(TODAY, &first, TODAY).is_applied());
        assert!(!store.day(TODAY).unwrap().tasks[0].done);
        assert!(!store.day(TODAY).unwrap().locked);
    }

    #[test]
    fn finishing_the_rest_locks_and_blocks_delete() {
        let mut store = Store::default();
        let first = added(&mut store, TODAY, "a");
        let second = added(&mut store, TODAY, "b");
        store.toggle_task(TODAY, &first, TODAY);
        store.toggle_task(TODAY, &second, TODAY);
        assert!(store.day(TODAY).unwrap().locked);

        assert_eq!(store.delete_task(TODAY, &first, TODAY).ignored(), Some(Ignored::Locked));
        let day = store.day(TODAY).unwrap();
        assert_eq!(day.tasks.len(), 2);
        assert!(day.locked);
    }

    #[test]
    fn toggle_reports_missing_targets() {
        let mut store = Store::default();
        assert_eq!(store.toggle_task(TODAY, "nope", TODAY).ignored(), Some(Ignored::MissingDay));
        added(&mut store, TODAY, "a");
        assert_eq!(store.toggle_task(TODAY, "nope", TODAY).ignored(), Some(Ignored::MissingTask));
        assert!(!store.day(TODAY).unwrap().locked);
    }

    #[test]
    fn deleting_only_task_keeps_lock_flag() {
        let mut store = Store::default();
        let id = added(&mut store, TODAY, "a");
        assert!(store.delete_task(TODAY, &id, TODAY).is_applied());

        let day = store.day(TODAY).unwrap();
        assert!(day.tasks.is_empty());
        assert!(!day.locked);
    }

    #[test]
    fn deleting_leaves_remaining_order() {
        let mut store = Store::default();
        let a = added(&mut store, TODAY, "a");
        let b = added(&mut store, TODAY, "b");
        let c = added(&mut store, TODAY, "c");
        store.delete_task(TODAY, &b, TODAY);

        let ids: Vec<_> = store.day(TODAY).unwrap().tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn delete_reports_missing_targets() {
        let mut store = Store::default();
        assert_eq!(store.delete_task(TODAY, "x", TODAY).ignored(), Some(Ignored::MissingDay));
        store.days.insert(TODAY.to_string(), DayRecord::default());
        assert_eq!(store.delete_task(TODAY, "x", TODAY).ignored(), Some(Ignored::MissingTask));
    }

    #[test]
    fn future_days_accept_tasks() {
        let mut store = Store::default();
        added(&mut store, "2024-07-04", "fireworks");
        assert_eq!(store.day("2024-07-04").unwrap().tasks.len(), 1);
    }
}
