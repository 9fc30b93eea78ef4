use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::ttlog;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::today_label;

/// Record one attendance entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        time_in,
        time_out,
        date,
    } = cmd
    {
        //
        // 1. Date label (default = today, locale-style)
        //
        let date_label = match date {
            Some(d) if !d.trim().is_empty() => d.trim().to_string(),
            _ => today_label(&cfg.date_format),
        };

        //
        // 2. Open store
        //
        let mut store = open_store(cfg)?;

        //
        // 3. Validate + append
        //
        let record = AddLogic::apply(
            &mut store,
            name,
            time_in.as_deref(),
            time_out.as_deref(),
            &date_label,
        )?;

        success(format!(
            "OJT record added: {} on {} (in {}, out {})",
            record.name,
            record.date,
            record.time_in().unwrap_or("-"),
            record.time_out().unwrap_or("-"),
        ));

        //
        // 4. Audit log (non-blocking)
        //
        if let Err(e) = ttlog(
            &store.storage().pool().conn,
            "add",
            &record.name,
            &format!(
                "date={} in={} out={}",
                record.date,
                record.time_in().unwrap_or(""),
                record.time_out().unwrap_or("")
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
