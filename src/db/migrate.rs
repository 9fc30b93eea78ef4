use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema migrations, applied in order. Each version is recorded in the
/// `log` table as a `migration_applied` row once it has run.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250101_0001_create_storage",
        "Created key-value storage table",
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250101_0002_index_log_operation",
        "Indexed log table by operation",
        r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);
        "#,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    conn.execute_batch(sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn, version, message, sql)?;
        success(format!("Migration applied: {} → {}", version, message));
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert_eq!(applied_versions(&conn).unwrap().len(), MIGRATIONS.len());
    }
}
