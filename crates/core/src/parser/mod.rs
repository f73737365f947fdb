//! Command-argument parsing.
//!
//! Raw argument strings are split into a positional preamble plus prefixed
//! named fields (`d/`, `t/`, `type/`, `notes/`), then each field is run
//! through its validator. Parsing fails fast: the first violated constraint
//! produces that field's specific error.

pub mod fields;

/// Prefix introducing the session date field.
pub const PREFIX_DATE: &str = "d/";
/// Prefix introducing the session time field.
pub const PREFIX_TIME: &str = "t/";
/// Prefix introducing the care-type field.
pub const PREFIX_TYPE: &str = "type/";
/// Prefix introducing the optional notes field.
pub const PREFIX_NOTES: &str = "notes/";

/// Result of tokenizing an argument string against a set of prefixes.
#[derive(Debug)]
pub struct ArgumentTokens {
    preamble: String,
    fields: Vec<(&'static str, String)>,
}

impl ArgumentTokens {
    /// The text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The preamble split on whitespace.
    pub fn preamble_tokens(&self) -> Vec<&str> {
        self.preamble.split_whitespace().collect()
    }

    /// The value of the given prefix, if it appeared.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when any prefix appeared more than once.
    pub fn has_duplicate_prefixes(&self) -> bool {
        self.fields
            .iter()
            .enumerate()
            .any(|(i, (p, _))| self.fields[..i].iter().any(|(q, _)| q == p))
    }
}

/// Splits `args` into a preamble and prefixed field values.
///
/// A prefix is only recognised at a word boundary (start of string or after
/// whitespace), so a value such as `notes/check d-levels` does not start a
/// new field mid-word. When two prefixes could match at the same position
/// the longer one wins.
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentTokens {
    let mut markers: Vec<(usize, &'static str)> = Vec::new();
    let mut at_boundary = true;
    for (pos, c) in args.char_indices() {
        if at_boundary {
            let best = prefixes
                .iter()
                .copied()
                .filter(|p| args[pos..].starts_with(p))
                .max_by_key(|p| p.len());
            if let Some(prefix) = best {
                markers.push((pos, prefix));
            }
        }
        at_boundary = c.is_whitespace();
    }

    let preamble_end = markers.first().map_or(args.len(), |(pos, _)| *pos);
    let preamble = args[..preamble_end].trim().to_owned();

    let mut fields = Vec::with_capacity(markers.len());
    for (i, (pos, prefix)) in markers.iter().enumerate() {
        let value_start = pos + prefix.len();
        let value_end = markers.get(i + 1).map_or(args.len(), |(next, _)| *next);
        fields.push((*prefix, args[value_start..value_end].trim().to_owned()));
    }

    ArgumentTokens { preamble, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&str] = &[PREFIX_DATE, PREFIX_TIME, PREFIX_TYPE, PREFIX_NOTES];

    #[test]
    fn splits_preamble_and_fields() {
        let tokens = tokenize(
            " 1 d/2025-10-16 t/14:30 type/medication notes/Give insulin shot",
            ALL,
        );
        assert_eq!(tokens.preamble(), "1");
        assert_eq!(tokens.value(PREFIX_DATE), Some("2025-10-16"));
        assert_eq!(tokens.value(PREFIX_TIME), Some("14:30"));
        assert_eq!(tokens.value(PREFIX_TYPE), Some("medication"));
        assert_eq!(tokens.value(PREFIX_NOTES), Some("Give insulin shot"));
    }

    #[test]
    fn missing_prefix_yields_none() {
        let tokens = tokenize("1 d/2025-10-16 t/14:30 type/medication", ALL);
        assert_eq!(tokens.value(PREFIX_NOTES), None);
    }

    #[test]
    fn prefix_mid_word_does_not_start_a_field() {
        let tokens = tokenize("1 type/wound-care notes/re-dress/inspect", ALL);
        assert_eq!(tokens.value(PREFIX_TYPE), Some("wound-care"));
        assert_eq!(tokens.value(PREFIX_NOTES), Some("re-dress/inspect"));
    }

    #[test]
    fn longer_prefix_wins_at_same_position() {
        // "type/" must not be consumed as a stray "t..." token boundary
        let tokens = tokenize("1 type/medication t/14:30", ALL);
        assert_eq!(tokens.value(PREFIX_TYPE), Some("medication"));
        assert_eq!(tokens.value(PREFIX_TIME), Some("14:30"));
    }

    #[test]
    fn duplicate_prefixes_are_detected() {
        let tokens = tokenize("1 d/2025-10-16 d/2025-10-17", ALL);
        assert!(tokens.has_duplicate_prefixes());
        let tokens = tokenize("1 d/2025-10-16 t/14:30", ALL);
        assert!(!tokens.has_duplicate_prefixes());
    }

    #[test]
    fn multi_token_preamble_is_preserved() {
        let tokens = tokenize("1 2 d/2025-10-16", ALL);
        assert_eq!(tokens.preamble_tokens(), ["1", "2"]);
    }
}
