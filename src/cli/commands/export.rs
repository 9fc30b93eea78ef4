use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_report, default_name};
use crate::db::log::ttlog;
use crate::db::open_store;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        name,
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let records = store.load_or_empty()?;

        let selected = name
            .clone()
            .or_else(|| default_name(&records))
            .ok_or_else(|| AppError::NoRecords("any trainee".into()))?;

        let format = match format {
            Some(f) => *f,
            None => cfg.export_format()?,
        };

        let path = match file {
            Some(f) => expand_tilde(f),
            None => ExportLogic::default_path(&cfg.export_dir()?, &selected, format),
        };

        let report = build_report(&records, &selected)?;

        if ExportLogic::export(&report, format, &path, *force)?
            && let Err(e) = ttlog(
                &store.storage().pool().conn,
                "export",
                &selected,
                &format!("{} rows to {}", report.rows.len(), path.display()),
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
