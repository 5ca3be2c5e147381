use chrono::NaiveDate;

/// `"Saturday, January 6, 2024"`, used by the page header and the simple calendar export.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `"Jan 6, 2024"`, used on wallpapers.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `"Jan 6"`, the per-day label of the page grid.
pub fn format_tooltip(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
