use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRecord {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub locked: bool,
}

impl DayRecord {
    pub fn all_done(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.done)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

/// Every day record, keyed by `YYYY-MM-DD`. Persisted as a bare JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Store {
    pub days: BTreeMap<String, DayRecord>,
}

impl Store {
    pub fn day(&self, date: &str) -> Option<&DayRecord> {
        self.days.get(date)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    pub date: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    pub date: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub checkbox_disabled: bool,
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub date: String,
    pub title: String,
    pub locked: bool,
    pub input_disabled: bool,
    pub add_disabled: bool,
    pub rows: Vec<TaskRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub applied: bool,
    pub ignored: Option<String>,
    pub day: DayView,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub total: usize,
    pub done: usize,
    pub locked: bool,
}

#[derive(Debug, Serialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub total: usize,
    pub done: usize,
    pub completed_days: u8,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub today: String,
    pub last_7_days: Vec<DailyPoint>,
    pub weekly: Vec<WeeklyPoint>,
}
