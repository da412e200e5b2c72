//! Schema scripts. The script at index `i` upgrades a database to `i + 1`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const SCRIPTS: [&str; 2] = [
    include_str!("0001_kv_store.sql"),
    include_str!("0002_journal_entries.sql"),
];

/// Schema version produced by this build.
pub const SCHEMA_VERSION: u32 = SCRIPTS.len() as u32;

/// Reads the version recorded in `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Brings `conn` up to `SCHEMA_VERSION` in one transaction.
pub(crate) fn migrate(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, script) in (1u32..).zip(SCRIPTS).skip(found as usize) {
        tx.execute_batch(script)
            .map_err(|source| DbError::Migration { version, source })?;
        tx.pragma_update(None, "user_version", version)?;
        info!("event=db_migrate module=db status=ok from={found} to={version}");
    }
    tx.commit()?;
    Ok(())
}
