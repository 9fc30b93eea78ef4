use crate::config::Config;
use crate::core::report::list_distinct_names;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, paint};

/// Print every tracked trainee; the first one is the default selection.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let records = store.load_or_empty()?;
    let names = list_distinct_names(&records);

    if names.is_empty() {
        println!("No trainees recorded yet.");
        return Ok(());
    }

    for (i, n) in names.iter().enumerate() {
        if i == 0 {
            println!("{} {}", n, paint(GREEN, "(default)"));
        } else {
            println!("{}", n);
        }
    }

    Ok(())
}
