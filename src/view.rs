use crate::lock::is_locked;
use crate::models::{DayView, Store, TaskRow};

const READ_ONLY_SUFFIX: &str = " (Completed - Read Only)";

pub fn render(store: &Store, date: &str, today: &str) -> DayView {
    let locked = is_locked(date, store, today);
    let rows: Vec<TaskRow> = store
        .day(date)
        .map(|day| {
            day.tasks
                .iter()
                .map(|task| TaskRow {
                    id: task.id.clone(),
                    text: task.text.clone(),
                    done: task.done,
                    checkbox_disabled: locked,
                    deletable: !locked,
                })
                .collect()
        })
        .unwrap_or_default();

    let mut title = format!("Tasks for {date}");
    if locked {
        title.push_str(READ_ONLY_SUFFIX);
    }

    DayView {
        date: date.to_string(),
        title,
        locked,
        input_disabled: locked,
        add_disabled: locked,
        rows,
    }
}
