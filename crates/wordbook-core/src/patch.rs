use regex::Captures;

use crate::phonetics::PhoneticSource;
use crate::row::{self, bracket_phonetic, escape, missing_phonetic_pattern, unescape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub document: String,
    pub substituted: usize,
    /// Headwords still at `[]`, in document order
    pub missing: Vec<String>,
}

/// Fill `[]` phonetic cells of a rendered table from `source`.
///
/// Matching is textual on the row grammar in [`crate::row`]. Lookup failures
/// count as misses and never abort the pass.
pub fn patch<S: PhoneticSource + ?Sized>(document: &str, source: &S) -> PatchReport {
    let pattern = missing_phonetic_pattern();
    let total = pattern.find_iter(document).count();
    tracing::info!("Found {total} rows without phonetics");

    let mut substituted = 0;
    let mut missing = Vec::new();

    let patched = pattern.replace_all(document, |caps: &Captures| {
        let index = &caps[1];
        let headword = unescape(&caps[2]);

        let phonetic = match source.lookup(&headword) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("{} lookup failed for {headword}: {e}", source.name());
                None
            }
        };

        match phonetic {
            Some(phonetic) => {
                let phonetic = escape(&bracket_phonetic(&phonetic));
                tracing::info!("Added phonetic for {headword}: {phonetic}");
                substituted += 1;
                row::cells(&[index, &caps[2], phonetic.as_str()])
            }
            None => {
                tracing::info!("No phonetic found for {headword}");
                missing.push(headword);
                caps[0].to_string()
            }
        }
    });

    tracing::info!("Phonetic patch complete, {substituted} rows updated");

    PatchReport {
        document: patched.into_owned(),
        substituted,
        missing,
    }
}
