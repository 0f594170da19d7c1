use crate::db::log::read_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{pad_left, pad_right};
use ansi_term::Colour;

/// Maximum visible width of the "operation (target)" column.
const OP_WIDTH_MAX: usize = 60;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = read_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id.to_string(), date, operation, target, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in rows {
            // only the operation word is colored; padding is computed on the
            // visible text
            let visible = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} ({})", operation, target)
            };
            let visible = truncate(&visible, OP_WIDTH_MAX);
            let padded = pad_right(&visible, op_w);

            let colored = match padded.strip_prefix(operation.as_str()) {
                Some(rest) => format!(
                    "{}{}",
                    color_for_operation(&operation).paint(operation.as_str()),
                    rest
                ),
                None => padded.clone(),
            };

            println!(
                "{}: {} | {} => {}",
                pad_left(&id, id_w),
                pad_right(&date, date_w),
                colored,
                message
            );
        }

        Ok(())
    }
}
