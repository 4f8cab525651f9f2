use crate::data::filters::day_name;
use crate::data::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::data::trip_struct::Trip;
use crate::error::BikeshareError;
use chrono::TimeDelta;
use std::io::{self, Write};

pub const RULE: &str = "----------------------------------------";

/// Segundos como "D days, HH:MM:SS"
pub fn format_duration(seconds: f64) -> String {
    let Some(delta) = TimeDelta::try_seconds(seconds.round() as i64) else {
        return format!("{} seconds", seconds);
    };
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();

    format!(
        "{}{} days, {:02}:{:02}:{:02}",
        sign,
        delta.num_days(),
        delta.num_hours() % 24,
        delta.num_minutes() % 60,
        delta.num_seconds() % 60
    )
}

fn month_label(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map_or_else(|| month.to_string(), |m| format!("{} ({})", month, m.name()))
}

pub fn print_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    writeln!(out, "Most common month: {}", month_label(stats.month))?;
    writeln!(out, "Most common day of week: {}", day_name(stats.day_of_week))?;
    writeln!(out, "Most common start hour: {}", stats.hour)
}

pub fn print_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(out, "Most commonly used start station: {}", stats.start_station)?;
    writeln!(out, "Most commonly used end station: {}", stats.end_station)?;
    writeln!(
        out,
        "Most frequent combination of start and end station: {}",
        stats.route
    )
}

pub fn print_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(
        out,
        "Total travel time: {} seconds ({})",
        stats.total,
        format_duration(stats.total)
    )?;
    writeln!(
        out,
        "Average travel time: {:.2} seconds ({})",
        stats.mean,
        format_duration(stats.mean)
    )?;
    writeln!(out, "Trips counted: {}", stats.count)
}

fn print_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "  (no data)");
    }
    let width = counts
        .iter()
        .map(|(value, _)| value.chars().count())
        .max()
        .unwrap_or(0);
    for (value, count) in counts {
        writeln!(out, "  {:<width$}  {}", value, count, width = width)?;
    }
    Ok(())
}

pub fn print_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "Counts of user types:")?;
    print_counts(out, &stats.user_type_counts)?;

    let Some(demographics) = &stats.demographics else {
        return Ok(());
    };

    writeln!(out, "\nCounts of gender:")?;
    print_counts(out, &demographics.gender_counts)?;

    writeln!(out, "\nBirth year statistics:")?;
    match &demographics.birth_year {
        Some(years) => {
            writeln!(out, "Earliest year of birth: {}", years.earliest)?;
            writeln!(out, "Most recent year of birth: {}", years.most_recent)?;
            writeln!(out, "Most common year of birth: {}", years.most_common)
        }
        None => writeln!(out, "No birth year data available."),
    }
}

/// Una fila por línea: número de fila original y el registro en JSON
pub fn print_raw_rows<W: Write>(out: &mut W, trips: &[Trip]) -> Result<(), BikeshareError> {
    for trip in trips {
        let json = serde_json::to_string(&trip.record)?;
        writeln!(out, "{:>7}  {}", trip.row, json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::{BirthYearStats, Demographics};
    use chrono::Weekday;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn duration_breakdown() {
        assert_eq!(format_duration(0.0), "0 days, 00:00:00");
        assert_eq!(format_duration(3661.0), "0 days, 01:01:01");
        assert_eq!(format_duration(90061.4), "1 days, 01:01:01");
        assert_eq!(format_duration(-61.0), "-0 days, 00:01:01");
    }

    #[test]
    fn time_stats_show_month_name() {
        let text = render(|out| {
            print_time_stats(
                out,
                &TimeStats {
                    month: 6,
                    day_of_week: Weekday::Wed,
                    hour: 17,
                },
            )
        });
        assert!(text.contains("Most common month: 6 (June)"));
        assert!(text.contains("Most common day of week: wednesday"));
        assert!(text.contains("Most common start hour: 17"));
    }

    #[test]
    fn user_stats_without_demographics_stop_after_user_types() {
        let text = render(|out| {
            print_user_stats(
                out,
                &UserStats {
                    user_type_counts: vec![
                        ("Subscriber".to_string(), 3),
                        ("Customer".to_string(), 1),
                    ],
                    demographics: None,
                },
            )
        });
        assert!(text.contains("Subscriber  3"));
        assert!(text.contains("Customer    1"));
        assert!(!text.contains("gender"));
    }

    #[test]
    fn counts_align_on_characters() {
        let text = render(|out| {
            print_counts(
                out,
                &[("Señora".to_string(), 2), ("Customer".to_string(), 1)],
            )
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  Señora    2");
        assert_eq!(lines[1], "  Customer  1");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn user_stats_with_demographics() {
        let text = render(|out| {
            print_user_stats(
                out,
                &UserStats {
                    user_type_counts: vec![("Subscriber".to_string(), 2)],
                    demographics: Some(Demographics {
                        gender_counts: vec![("Female".to_string(), 2)],
                        birth_year: Some(BirthYearStats {
                            earliest: 1950,
                            most_recent: 2001,
                            most_common: 1988,
                        }),
                    }),
                },
            )
        });
        assert!(text.contains("Counts of gender:"));
        assert!(text.contains("Earliest year of birth: 1950"));
        assert!(text.contains("Most recent year of birth: 2001"));
        assert!(text.contains("Most common year of birth: 1988"));
    }
}
