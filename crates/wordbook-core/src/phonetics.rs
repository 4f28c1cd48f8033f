use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::PhoneticError;

/// Anything that can answer "what is the phonetic for this headword".
pub trait PhoneticSource {
    fn name(&self) -> &str;

    /// Bracketed phonetic, `Ok(None)` when the headword is unknown.
    /// Callers treat `Err` the same as `Ok(None)`.
    fn lookup(&self, headword: &str) -> Result<Option<String>, PhoneticError>;
}

impl PhoneticSource for HashMap<String, String> {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, headword: &str) -> Result<Option<String>, PhoneticError> {
        Ok(self.get(headword).cloned())
    }
}

/// British transcriptions for headwords the source shipped without one.
/// Keys are case-sensitive; `at`, `a` and `time` cover the words of `at a time`.
pub static BUILTIN_PHONETICS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("idle", "[ˈaɪd(ə)l]"),
        ("overwhelm", "[ˌəʊvəˈwelm]"),
        ("crunch", "[krʌntʃ]"),
        ("sentiment", "[ˈsentɪmənt]"),
        ("obstacle", "[ˈɒbstək(ə)l]"),
        ("drown", "[draʊn]"),
        ("legitimate", "[lɪˈdʒɪtɪmət]"),
        ("forecast", "[ˈfɔːkɑːst]"),
        ("qualify", "[ˈkwɒlɪfaɪ]"),
        ("decapitate", "[dɪˈkæpɪteɪt]"),
        ("halve", "[hɑːv]"),
        ("swelling", "[ˈswelɪŋ]"),
        ("contemporary", "[kənˈtemp(ə)rəri]"),
        ("netizens", "[ˈnetɪzənz]"),
        ("penis", "[ˈpiːnɪs]"),
        ("Genius", "[ˈdʒiːniəs]"),
        ("syndrome", "[ˈsɪndrəʊm]"),
        ("imposter", "[ɪmˈpɒstə]"),
        ("waterfront", "[ˈwɔːtəfrʌnt]"),
        ("condense", "[kənˈdens]"),
        ("obnoxious", "[əbˈnɒkʃəs]"),
        ("coalesce", "[ˌkəʊəˈles]"),
        ("divide", "[dɪˈvaɪd]"),
        ("intermediate", "[ˌɪntəˈmiːdiət]"),
        ("regulatory", "[ˈreɡjələtəri]"),
        ("voluntary", "[ˈvɒləntri]"),
        ("involuntary", "[ɪnˈvɒləntri]"),
        ("celibate", "[ˈselɪbət]"),
        ("copper", "[ˈkɒpə]"),
        ("perpetual", "[pəˈpetʃuəl]"),
        ("notch", "[nɒtʃ]"),
        ("quirk", "[kwɜːk]"),
        ("haze", "[heɪz]"),
        ("tragically", "[ˈtrædʒɪkli]"),
        ("blimey", "[ˈblaɪmi]"),
        ("natter", "[ˈnætə]"),
        ("chuffed", "[tʃʌft]"),
        ("tickle", "[ˈtɪk(ə)l]"),
        ("cheeky", "[ˈtʃiːki]"),
        ("mischievous", "[ˈmɪstʃɪvəs]"),
        ("tweak", "[twiːk]"),
        ("sober", "[ˈsəʊbə]"),
        ("at", "[æt]"),
        ("a", "[ə]"),
        ("time", "[taɪm]"),
    ]
    .into_iter()
    .collect()
});

/// Built-in table plus optional overrides layered on top.
///
/// The built-in map is never mutated, overrides live in this value.
#[derive(Debug, Clone, Default)]
pub struct PhoneticTable {
    overrides: HashMap<String, String>,
    use_builtin: bool,
}

impl PhoneticTable {
    pub fn builtin() -> Self {
        Self {
            overrides: HashMap::new(),
            use_builtin: true,
        }
    }

    /// Table without the built-in entries
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, headword: impl Into<String>, phonetic: impl Into<String>) {
        self.overrides.insert(headword.into(), phonetic.into());
    }

    /// Merge a JSON object of `headword -> phonetic`, returns how many entries were read
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, PhoneticError> {
        let extra: HashMap<String, String> = serde_json::from_str(json)?;
        let count = extra.len();
        self.overrides.extend(extra);
        Ok(count)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, PhoneticError> {
        tracing::info!("Loading extra phonetics from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let count = self.extend_from_json(&json)?;
        tracing::info!("Loaded {count} extra phonetics");
        Ok(count)
    }

    pub fn get(&self, headword: &str) -> Option<&str> {
        self.overrides.get(headword).map(String::as_str).or_else(|| {
            self.use_builtin
                .then(|| BUILTIN_PHONETICS.get(headword).copied())
                .flatten()
        })
    }

    pub fn len(&self) -> usize {
        let builtin_only = if self.use_builtin {
            BUILTIN_PHONETICS
                .keys()
                .filter(|key| !self.overrides.contains_key(**key))
                .count()
        } else {
            0
        };
        builtin_only + self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PhoneticSource for PhoneticTable {
    fn name(&self) -> &str {
        "static table"
    }

    fn lookup(&self, headword: &str) -> Result<Option<String>, PhoneticError> {
        Ok(self.get(headword).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = PhoneticTable::builtin();
        assert_eq!(table.get("idle"), Some("[ˈaɪd(ə)l]"));
        assert_eq!(table.get("unknown"), None);
        assert_eq!(table.len(), BUILTIN_PHONETICS.len());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let table = PhoneticTable::builtin();
        assert_eq!(table.get("Genius"), Some("[ˈdʒiːniəs]"));
        assert_eq!(table.get("genius"), None);
        assert_eq!(table.get("Idle"), None);
    }

    #[test]
    fn test_function_word_overrides_present() {
        let table = PhoneticTable::builtin();
        assert_eq!(table.get("at"), Some("[æt]"));
        assert_eq!(table.get("a"), Some("[ə]"));
        assert_eq!(table.get("time"), Some("[taɪm]"));
    }

    #[test]
    fn test_overrides_win() {
        let mut table = PhoneticTable::builtin();
        let count = table
            .extend_from_json(r#"{ "idle": "[ˈaɪdl]", "gloss": "[ɡlɒs]" }"#)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(table.get("idle"), Some("[ˈaɪdl]"));
        assert_eq!(table.get("gloss"), Some("[ɡlɒs]"));
        assert_eq!(table.len(), BUILTIN_PHONETICS.len() + 1);
        // the static table itself is untouched
        assert_eq!(BUILTIN_PHONETICS.get("idle"), Some(&"[ˈaɪd(ə)l]"));
    }

    #[test]
    fn test_empty_table() {
        let mut table = PhoneticTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.get("idle"), None);
        table.insert("idle", "[x]");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "quay": "[kiː]" }}"#).unwrap();

        let mut table = PhoneticTable::empty();
        assert_eq!(table.extend_from_file(file.path()).unwrap(), 1);
        assert_eq!(table.lookup("quay").unwrap(), Some("[kiː]".to_string()));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut table = PhoneticTable::empty();
        let err = table.extend_from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, PhoneticError::InvalidTable(_)));
    }

    #[test]
    fn test_hash_map_source() {
        let map: HashMap<String, String> =
            [("idle".to_string(), "[ˈaɪd(ə)l]".to_string())].into();
        assert_eq!(map.lookup("idle").unwrap().as_deref(), Some("[ˈaɪd(ə)l]"));
        assert_eq!(map.lookup("busy").unwrap(), None);
    }
}
