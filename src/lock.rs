use crate::models::Store;

/// A day accepts no edits once it is in the past or its completion flag is set.
pub fn is_locked(date: &str, store: &Store, today: &str) -> bool {
    if date < today {
        return true;
    }
    store.day(date).is_some_and(|day| day.locked)
}
