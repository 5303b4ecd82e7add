use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::paint;
use ansi_term::Colour;
use std::io::{self, IsTerminal};

/// ANSI colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "close" => Colour::Yellow,
        "delete" => Colour::Red,
        "truncate" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = pool.transaction(|tx| load_log(tx))?;

        if entries.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let tty = io::stdout().is_terminal();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            println!(
                "{:>4}  {:<date_w$}  {}  {}",
                e.id,
                e.date,
                paint(color_for_operation(&e.operation).normal(), op_target, tty),
                e.message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
