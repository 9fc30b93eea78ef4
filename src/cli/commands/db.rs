use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open_store;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening the store also applies pending migrations
        let store = open_store(cfg)?;
        let conn = &store.storage().pool().conn;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&store, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            // the record blob must also parse
            match store.load() {
                Ok(records) => println!(
                    "{}✔ Stored records readable ({}).{}\n",
                    GREEN,
                    records.len(),
                    RESET
                ),
                Err(e) => println!("{}✘ {}{}\n", RED, e, RESET),
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
