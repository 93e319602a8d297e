use crate::core::types::DayOfWeek;
use crate::extensions::chrono::WeekdayExt;
use crate::extensions::enums::valid_csv;
use chrono::Weekday;

#[test]
fn valid_csv_lists_every_variant() {
    let csv = valid_csv::<DayOfWeek>();
    assert_eq!(csv.split(", ").count(), 7);
}

#[test]
fn weekday_conversion_covers_the_whole_week() {
    let pairs = [
        (Weekday::Mon, DayOfWeek::Mon),
        (Weekday::Tue, DayOfWeek::Tue),
        (Weekday::Wed, DayOfWeek::Wed),
        (Weekday::Thu, DayOfWeek::Thu),
        (Weekday::Fri, DayOfWeek::Fri),
        (Weekday::Sat, DayOfWeek::Sat),
        (Weekday::Sun, DayOfWeek::Sun),
    ];
    for (weekday, expected) in pairs {
        assert_eq!(weekday.to_day_of_week(), expected);
    }
}
