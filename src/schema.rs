//! Diesel schema definitions for the tool-usage source tables.

diesel::table! {
    use diesel::sql_types::*;

    werkzeug_details (wkz_bez) {
        wkz_bez -> Nullable<Text>,
        schneide -> Nullable<Text>,
        wkz_laufzeit_sec -> Nullable<Double>,
        durchmesser -> Nullable<Text>,
        eckenradius -> Nullable<Text>,
        ausspannlaenge -> Nullable<Text>,
        #[sql_name = "gesamtlänge"]
        gesamtlaenge -> Nullable<Text>,
        grundhalter -> Nullable<Text>,
        zwischenhalter -> Nullable<Text>,
        kommentar -> Nullable<Text>,
        dokument_id -> Nullable<Text>,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    dokument (dokument_id) {
        dokument_id -> Text,
        auftragsnr -> Nullable<Text>,
        maschine -> Nullable<Text>,
        teil_bezeichnung -> Nullable<Text>,
        erstelldatum -> Nullable<Text>,
        kommentar -> Nullable<Text>,
        programmierer -> Nullable<Text>,
    }
}

diesel::joinable!(werkzeug_details -> dokument (dokument_id));
diesel::allow_tables_to_appear_in_same_query!(werkzeug_details, dokument);
