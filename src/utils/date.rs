use chrono::{Datelike, NaiveDate, Weekday};

/// Strict `YYYY-MM-DD`: "2026-1-5" is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

const MONTHS_SV: [&str; 12] = [
    "januari",
    "februari",
    "mars",
    "april",
    "maj",
    "juni",
    "juli",
    "augusti",
    "september",
    "oktober",
    "november",
    "december",
];

pub fn weekday_sv(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "måndag",
        Weekday::Tue => "tisdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lördag",
        Weekday::Sun => "söndag",
    }
}

pub fn month_sv(month: u32) -> &'static str {
    MONTHS_SV[(month as usize - 1) % 12]
}

/// Swedish long-form date, sv-SE conventions: "lördag 22 november 2025".
pub fn long_date_sv(d: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        weekday_sv(d.weekday()),
        d.day(),
        month_sv(d.month()),
        d.year()
    )
}
