//! Fixture helpers: seeded on-disk SQLite databases for pipeline tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tempfile::TempDir;

pub struct FixtureDb {
    pub url: String,
    // Held so the database file outlives the test body.
    _dir: TempDir,
}

const SCHEMA: &str = r#"
    CREATE TABLE dokument (
        dokument_id TEXT PRIMARY KEY,
        auftragsnr TEXT,
        maschine TEXT,
        teil_bezeichnung TEXT,
        erstelldatum TEXT,
        kommentar TEXT,
        programmierer TEXT
    );
    CREATE TABLE werkzeug_details (
        wkz_bez TEXT,
        schneide TEXT,
        wkz_laufzeit_sec REAL,
        durchmesser TEXT,
        eckenradius TEXT,
        ausspannlaenge TEXT,
        "gesamtlänge" TEXT,
        grundhalter TEXT,
        zwischenhalter TEXT,
        kommentar TEXT,
        dokument_id TEXT
    );
"#;

const FIXTURE_ROWS: &str = r#"
    INSERT INTO dokument VALUES
        ('D1', 'A100', 'DMU-50', 'Deckel', '05.03.2024 14:30', 'Serienlauf', 'MB'),
        ('D2', 'A200', 'HERMLE-C32', 'Gehäuse', '06.03.2024 08:00', 'Musterteil', 'TK');

    INSERT INTO werkzeug_details VALUES
        ('T-A', 'Sandvik CoroMill 390', 180000.0, '12,5 mm', '0,45', '40', '100 mm',
         'HSK63', '-', 'schruppen kontur', 'D1'),
        ('T-B', 'Fraisa NX', 108000.0, '10,0 mm', '0,2', '35', '90 mm',
         'HSK63', 'VERL-120', 'schlichten wand', 'D1'),
        ('T-C', 'Eigenbau Spezial', 72000.0, '6 mm', '0', '30', '80 mm',
         'HSK63', '-', 'fase entgraten', 'D1'),
        ('T-GUE', 'Gühring VHM Bohrer', 7200.0, '8,0 mm', '0', '35', '90 mm',
         'HSK63', '-', 'zentrierbohrung', 'D2'),
        ('T-ORPHAN', 'Messtaster Renishaw', 3600.0, '6,0', '0', '20', '60',
         NULL, NULL, 'antasten messen', NULL);
"#;

/// Creates a database with the source schema but no rows.
pub fn empty_db() -> FixtureDb {
    build_db(&[SCHEMA])
}

/// Creates the canonical fixture: two job documents, four joined usage rows
/// and one orphan row with no document match.
pub fn seeded_db() -> FixtureDb {
    build_db(&[SCHEMA, FIXTURE_ROWS])
}

/// Creates a database containing none of the expected tables.
pub fn malformed_db() -> FixtureDb {
    build_db(&["CREATE TABLE unrelated (id TEXT PRIMARY KEY);"])
}

fn build_db(statements: &[&str]) -> FixtureDb {
    let dir = TempDir::new().expect("failed to create fixture dir");
    let url = dir
        .path()
        .join("tools.db")
        .to_string_lossy()
        .into_owned();

    let mut conn = SqliteConnection::establish(&url).expect("failed to open fixture database");
    for statement in statements {
        conn.batch_execute(statement)
            .expect("failed to seed fixture database");
    }

    FixtureDb { url, _dir: dir }
}
