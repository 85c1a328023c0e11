/// Formats a remaining time in whole seconds as `MM:SS`, both fields
/// zero-padded to two digits.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(3), "00:03");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(300), "05:00");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_format_time_above_an_hour() {
        // Minutes are not capped at 59, the field just widens.
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(3725), "62:05");
    }
}
