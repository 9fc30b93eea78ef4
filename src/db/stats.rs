use crate::core::report::list_distinct_names;
use crate::db::migrate::applied_versions;
use crate::db::storage::SqliteStorage;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &RecordStore<SqliteStorage>, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!("{}• Storage key:{} {}", CYAN, RESET, store.key());

    //
    // 2) RECORDS
    //
    let records = store.load_or_empty()?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    //
    // 3) PEOPLE
    //
    let names = list_distinct_names(&records);
    println!("{}• Trainees:{} {}", CYAN, RESET, names.len());

    let fmt_first = records
        .first()
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .last()
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Recorded:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&store.storage().pool().conn)?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        versions.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
