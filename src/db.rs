use crate::error::{AnalysisError, Result};
use crate::models::RawUsageRecord;
use crate::schema::{dokument, werkzeug_details};
use diesel::prelude::*;
use tracing::debug;

pub fn connect(database_url: &str) -> Result<SqliteConnection> {
    SqliteConnection::establish(database_url).map_err(|source| AnalysisError::Connection {
        url: database_url.to_string(),
        source,
    })
}

/// Performs the single bulk read: every tool-usage row, left-joined to its
/// job document. Rows without a matching document are kept with nulls on the
/// job side. This is the only I/O in the pipeline; a failure here aborts the
/// ingestion with no partial result.
pub fn load_raw_records(conn: &mut SqliteConnection) -> Result<Vec<RawUsageRecord>> {
    let rows: Vec<RawUsageRecord> = werkzeug_details::table
        .left_join(dokument::table)
        .select((
            werkzeug_details::wkz_bez,
            werkzeug_details::schneide,
            werkzeug_details::wkz_laufzeit_sec,
            werkzeug_details::durchmesser,
            werkzeug_details::eckenradius,
            werkzeug_details::ausspannlaenge,
            werkzeug_details::gesamtlaenge,
            werkzeug_details::grundhalter,
            werkzeug_details::zwischenhalter,
            werkzeug_details::kommentar,
            dokument::auftragsnr.nullable(),
            dokument::maschine.nullable(),
            dokument::teil_bezeichnung.nullable(),
            dokument::erstelldatum.nullable(),
            dokument::kommentar.nullable(),
            dokument::programmierer.nullable(),
        ))
        .load(conn)?;

    debug!(count = rows.len(), "bulk read completed");
    Ok(rows)
}
