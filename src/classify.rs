//! Rule-based classification of free-text tool and job descriptions.
//!
//! Both rule tables are order-significant: the first matching entry wins on
//! ambiguous text. The tables are built once at classifier construction and
//! never mutated.

use crate::models::UNKNOWN;

/// Fallback bucket for descriptions that match no known manufacturer. This is
/// distinct from [`UNKNOWN`], which marks missing input.
pub const OTHER_MANUFACTURER: &str = "Sonstige";

/// Fallback category for comments that match no operation keywords.
pub const GENERAL_OPERATION: &str = "Allgemein";

#[derive(Debug, Clone)]
pub struct ManufacturerRules {
    // (display name, lowercased needle), in precedence order
    names: Vec<(String, String)>,
}

impl ManufacturerRules {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let lower = name.to_lowercase();
                (name, lower)
            })
            .collect();
        Self { names }
    }

    /// Case-insensitive substring match over the combined cutting-edge and
    /// base-holder text. `None` input (both labels absent at the source)
    /// lands in the distinct "Unbekannt" bucket.
    pub fn classify(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return UNKNOWN.to_string();
        };
        let haystack = text.to_lowercase();
        self.names
            .iter()
            .find(|(_, needle)| haystack.contains(needle))
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| OTHER_MANUFACTURER.to_string())
    }
}

impl Default for ManufacturerRules {
    fn default() -> Self {
        Self::new([
            "Pokolm",
            "Rineck",
            "Dormer",
            "Precitool",
            "Nine9",
            "Garant",
            "Hoffmann",
            "Seco",
            "Sandvik",
            "Iscar",
            "Walter",
            "Kennametal",
            "Fraisa",
            "Gühring",
            "Heidenhain",
            "Renishaw",
            "Haimer",
        ])
    }
}

#[derive(Debug, Clone)]
pub struct OperationRules {
    categories: Vec<(String, Vec<String>)>,
}

impl OperationRules {
    pub fn new<I, S, K>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<K>)>,
        S: Into<String>,
        K: Into<String>,
    {
        let categories = categories
            .into_iter()
            .map(|(category, keywords)| {
                (
                    category.into(),
                    keywords
                        .into_iter()
                        .map(|k| k.into().to_lowercase())
                        .collect(),
                )
            })
            .collect();
        Self { categories }
    }

    /// Returns the first category, in declaration order, for which any
    /// keyword is a substring of the combined lowercased comments.
    pub fn classify(&self, tool_comment: &str, job_comment: &str) -> String {
        let combined = format!("{tool_comment} {job_comment}").to_lowercase();
        self.categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| combined.contains(k.as_str())))
            .map(|(category, _)| category.clone())
            .unwrap_or_else(|| GENERAL_OPERATION.to_string())
    }
}

impl Default for OperationRules {
    fn default() -> Self {
        Self::new([
            ("Schruppen", vec!["schrup", "rough", "planfräsen", "fräsen"]),
            ("Schlichten", vec!["schlich", "finish", "restmat", "nachfahr"]),
            ("Bohren", vec!["bohr", "zentrier", "senk"]),
            ("Gewinde", vec!["gewinde", "m6", "m8", "m10", "m12", "m16"]),
            ("Fasen", vec!["fase", "entgrat"]),
            ("Messen", vec!["mess", "tast", "probe"]),
        ])
    }
}
