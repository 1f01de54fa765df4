use crate::dates::date_key;
use crate::lock::is_locked;
use crate::models::{DailyPoint, OverviewResponse, Store, WeeklyPoint};
use chrono::{Datelike, Duration, Local, NaiveDate};

const WEEK_COUNT: usize = 8;

pub fn build_overview(store: &Store) -> OverviewResponse {
    build_overview_at(Local::now().date_naive(), store)
}

pub fn build_overview_at(today: NaiveDate, store: &Store) -> OverviewResponse {
    let today_key = date_key(today);

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let key = date_key(today - Duration::days(offset));
        let (total, done) = counts(store, &key);
        last_7_days.push(DailyPoint {
            locked: is_locked(&key, store, &today_key),
            date: key,
            total,
            done,
        });
    }

    let current_week_start = week_start(today);
    let mut weekly = Vec::with_capacity(WEEK_COUNT);

    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let mut total = 0usize;
        let mut done = 0usize;
        let mut completed_days = 0u8;
        for day_offset in 0..7 {
            let key = date_key(start + Duration::days(day_offset));
            let (day_total, day_done) = counts(store, &key);
            total += day_total;
            done += day_done;
            if store.day(&key).is_some_and(|day| day.locked) {
                completed_days += 1;
            }
        }

        weekly.push(WeeklyPoint {
            week: week_label(start),
            start_date: date_key(start),
            end_date: date_key(end),
            total,
            done,
            completed_days,
        });
    }

    OverviewResponse {
        today: today_key,
        last_7_days,
        weekly,
    }
}

fn counts(store: &Store, key: &str) -> (usize, usize) {
    store
        .day(key)
        .map(|day| {
            let done = day.tasks.iter().filter(|task| task.done).count();
            (day.tasks.len(), done)
        })
        .unwrap_or((0, 0))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRecord, Task};

    fn day(done: &[bool], locked: bool) -> DayRecord {
        DayRecord {
            tasks: done
                .iter()
                .enumerate()
                .map(|(idx, done)| Task {
                    id: idx.to_string(),
                    text: format!("t{idx}"),
                    done: *done,
                })
                .collect(),
            locked,
        }
    }

    #[test]
    fn last_7_days_counts_tasks_and_locks() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let mut store = Store::default();
        store.days.insert("2026-01-05".to_string(), day(&[true, false, false], false));
        store.days.insert("2026-01-07".to_string(), day(&[true], true));

        let overview = build_overview_at(today, &store);
        assert_eq!(overview.today, "2026-01-07");
        assert_eq!(overview.last_7_days.len(), 7);
        assert_eq!(overview.last_7_days[0].date, "2026-01-01");

        let past = overview
            .last_7_days
            .iter()
            .find(|point| point.date == "2026-01-05")
            .expect("missing day");
        assert_eq!((past.total, past.done), (3, 1));
        assert!(past.locked);

        let current = overview.last_7_days.last().unwrap();
        assert_eq!((current.total, current.done), (1, 1));
        assert!(current.locked);
    }

    #[test]
    fn weekly_series_groups_by_iso_week() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let mut store = Store::default();
        store.days.insert("2026-01-05".to_string(), day(&[true, true], true));
        store.days.insert("2026-01-06".to_string(), day(&[false], false));
        store.days.insert("2025-12-29".to_string(), day(&[true], true));

        let overview = build_overview_at(today, &store);
        assert_eq!(overview.weekly.len(), WEEK_COUNT);

        let current = overview.weekly.last().unwrap();
        assert_eq!(current.week, "2026-W02");
        assert_eq!(current.start_date, "2026-01-05");
        assert_eq!(current.end_date, "2026-01-11");
        assert_eq!((current.total, current.done, current.completed_days), (3, 2, 1));

        let previous = &overview.weekly[WEEK_COUNT - 2];
        assert_eq!(previous.week, "2026-W01");
        assert_eq!(previous.completed_days, 1);
    }
}
