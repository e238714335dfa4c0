//! Table rendering for the two display regions: current conditions and
//! the multi-day forecast.

use skycast_core::{CurrentConditions, ForecastDay};

const DATE_FORMAT: &str = "%a, %b %d";

/// The current-conditions region: heading plus a Parameter/Value table.
pub fn current_table(current: &CurrentConditions) -> String {
    let rows = vec![
        vec!["Parameter".to_string(), "Value".to_string()],
        vec![
            "Temperature".to_string(),
            format!("{:.1} °C", current.temperature_c),
        ],
        vec!["Condition".to_string(), current.condition.clone()],
        vec!["Humidity".to_string(), format!("{}%", current.humidity_pct)],
        vec![
            "Wind Speed".to_string(),
            format!("{} m/s", current.wind_speed_mps),
        ],
    ];

    format!(
        "Current weather for {} ({})\n{}",
        current.city,
        current.observed_at.format(DATE_FORMAT),
        table(&rows)
    )
}

/// The forecast region: one row per day, ascending date order.
pub fn forecast_table(days: &[ForecastDay]) -> String {
    let mut rows = vec![vec![
        "Date".to_string(),
        "Max Temp".to_string(),
        "Min Temp".to_string(),
        "Condition".to_string(),
    ]];

    for day in days {
        rows.push(vec![
            day.date.format(DATE_FORMAT).to_string(),
            format!("{:.1} °C", day.max_temp_c),
            format!("{:.1} °C", day.min_temp_c),
            day.condition.clone(),
        ]);
    }

    format!("Forecast (up to 5 days, grouped by day)\n{}", table(&rows))
}

/// ASCII table with columns sized to their widest cell. The first row is
/// the header and gets its own separator.
fn table(rows: &[Vec<String>]) -> String {
    let columns = rows.first().map_or(0, Vec::len);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!(" {cell:<w$} "))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!("|{line}|\n"));

        if idx == 0 {
            out.push_str(&separator);
            out.push('\n');
        }
    }

    out.push_str(&separator);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_current() -> CurrentConditions {
        CurrentConditions {
            city: "London".to_string(),
            observed_at: Utc.with_ymd_and_hms(2026, 2, 7, 12, 0, 0).unwrap(),
            temperature_c: 20.5,
            condition: "Clear Sky".to_string(),
            humidity_pct: 65,
            wind_speed_mps: 3.2,
        }
    }

    #[test]
    fn current_table_shows_all_four_rows() {
        let out = current_table(&sample_current());

        assert!(out.contains("Current weather for London (Sat, Feb 07)"));
        assert!(out.contains("| Parameter"));
        assert!(out.contains("| Temperature | 20.5 °C"));
        assert!(out.contains("| Condition   | Clear Sky"));
        assert!(out.contains("| Humidity    | 65%"));
        assert!(out.contains("| Wind Speed  | 3.2 m/s"));
    }

    #[test]
    fn current_table_formats_negative_temperatures() {
        let mut current = sample_current();
        current.temperature_c = -5.0;

        assert!(current_table(&current).contains("-5.0 °C"));
    }

    #[test]
    fn forecast_table_renders_one_row_per_day_in_order() {
        let days = vec![
            ForecastDay {
                date: NaiveDate::from_ymd_opt(2026, 2, 7).unwrap(),
                max_temp_c: 12.0,
                min_temp_c: 10.0,
                condition: "Light Rain".to_string(),
            },
            ForecastDay {
                date: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
                max_temp_c: 15.0,
                min_temp_c: 7.5,
                condition: "Clear Sky".to_string(),
            },
        ];

        let out = forecast_table(&days);
        assert!(out.contains("| Date"));
        assert!(out.contains("| Sat, Feb 07 | 12.0 °C"));
        assert!(out.contains("| Sun, Feb 08 | 15.0 °C"));

        let first = out.find("Sat, Feb 07").unwrap();
        let second = out.find("Sun, Feb 08").unwrap();
        assert!(first < second);
    }

    #[test]
    fn forecast_table_with_no_days_is_just_the_header() {
        let out = forecast_table(&[]);
        assert!(out.contains("| Date"));
        assert_eq!(out.matches('\n').count(), 4);
    }
}
