use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar day as `YYYY-MM-DD`.
///
/// Keys in this format compare lexically in chronological order, which the
/// lock policy relies on.
pub fn today() -> String {
    date_key(Local::now().date_naive())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date_key(input: &str) -> Option<String> {
    let input = input.trim();
    // chrono accepts unpadded fields and signed years; keys must be exactly ten bytes.
    if input.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .map(date_key)
}
