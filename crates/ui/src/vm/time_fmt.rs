use chrono::NaiveDateTime;

#[must_use]
pub fn format_date(value: NaiveDateTime) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_short_date() {
        let value = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_date(value), "Jun 1, 2024");
        assert_eq!(format_minutes(15), "15 min");
    }
}
