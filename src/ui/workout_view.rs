//! Text rendering of workouts: marker popups, list entries and the table.

use crate::models::workout::Workout;
use crate::utils::colors::colorize_type;
use crate::utils::formatting::{number, one_decimal};
use crate::utils::table::{Column, Table};

/// "🏃‍♂️ Running on April 14"
pub fn popup_content(w: &Workout) -> String {
    format!("{} {}", w.workout_type().icon(), w.description())
}

/// Value/unit pairs shown for a workout, variant metrics last.
pub fn details(w: &Workout) -> Vec<(&'static str, String, &'static str)> {
    let t = w.workout_type();
    let mut out = vec![
        (t.icon(), number(w.distance()), "km"),
        ("⏱", number(w.duration()), "min"),
    ];

    if let (Some(pace), Some(cadence)) = (w.pace(), w.cadence()) {
        out.push(("⚡️", one_decimal(pace), "min/km"));
        out.push(("👣", number(cadence), "spm"));
    }

    if let (Some(speed), Some(elevation)) = (w.speed(), w.elevation_gain()) {
        out.push(("⚡️", one_decimal(speed), "km/h"));
        out.push(("⛰", number(elevation), "m"));
    }

    out
}

/// Multi-line list entry.
pub fn render_entry(w: &Workout) -> String {
    let mut s = format!(
        "{} [{}]\n",
        colorize_type(w.workout_type(), w.description()),
        w.id()
    );
    let line = details(w)
        .into_iter()
        .map(|(icon, value, unit)| format!("{} {} {}", icon, value, unit))
        .collect::<Vec<_>>()
        .join("   ");
    s.push_str("   ");
    s.push_str(&line);
    s
}

pub fn render_table(workouts: &[Workout]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("WORKOUT"),
        Column::new("KM"),
        Column::new("MIN"),
        Column::new("PACE/SPEED"),
        Column::new("CADENCE/ELEV"),
        Column::new("POSITION"),
    ]);

    for w in workouts {
        let (rate, metric) = match (w.pace(), w.speed()) {
            (Some(pace), _) => (
                format!("{} min/km", one_decimal(pace)),
                format!("{} spm", number(w.cadence().unwrap_or_default())),
            ),
            (None, Some(speed)) => (
                format!("{} km/h", one_decimal(speed)),
                format!("{} m", number(w.elevation_gain().unwrap_or_default())),
            ),
            (None, None) => ("-".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            w.id().to_string(),
            w.get_date_time(),
            w.description().to_string(),
            number(w.distance()),
            number(w.duration()),
            rate,
            metric,
            w.coords().to_string(),
        ]);
    }

    table.render()
}
