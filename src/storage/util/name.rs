use rand::{distributions::Alphanumeric, Rng};
use regex::Regex;

pub const MAX_NAME_LENGTH: usize = 255;
pub const FALLBACK_NAME: &str = "file";
const SUFFIX_LENGTH: usize = 7;

lazy_static! {
    static ref INVALID_CHARS: Regex = Regex::new(r"[^-A-Za-z0-9_.]").unwrap();
}

/// Turns a client supplied filename into one safe to use inside the storage
/// directory: last path component only, spaces as underscores, nothing outside
/// `[-A-Za-z0-9_.]`.
pub fn get_valid_name(name: &str) -> String {
    let base_name = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let underscored = base_name.trim().replace(' ', "_");
    let cleaned = INVALID_CHARS.replace_all(&underscored, "");

    let valid = match cleaned.as_ref() {
        "" | "." | ".." => FALLBACK_NAME.to_string(),
        cleaned => cleaned.to_string(),
    };

    truncate(&valid, MAX_NAME_LENGTH)
}

/// `photo.png` -> `photo_aB3dE9x.png`
pub fn get_alternative_name(name: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    // `_` plus the suffix always fit; a very long extension gives way first.
    let budget = MAX_NAME_LENGTH - SUFFIX_LENGTH - 1;
    let (stem, ext) = split_extension(name);
    let ext = &ext[..ext.len().min(budget)];
    let stem = truncate(stem, budget - ext.len());

    format!("{}_{}{}", stem, suffix, ext)
}

/// Splits off the final extension, keeping the dot. A leading dot belongs to
/// the stem (`.env` has no extension).
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) if index > 0 => name.split_at(index),
        _ => (name, ""),
    }
}

// Names are ASCII after get_valid_name, so byte length equals char count.
fn truncate(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    let (stem, ext) = split_extension(name);
    if ext.len() >= max {
        return name[..max].to_string();
    }

    [&stem[..max - ext.len()], ext].concat()
}
