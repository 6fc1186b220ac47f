//! Validated component name type.

use super::GenerationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when a request does not provide one.
pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedExperience";

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 64;

/// Display name of a generated component, between 3 and 64 characters.
///
/// The name is kept exactly as supplied; [`ComponentName::identifier`]
/// derives the JavaScript function name from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Creates a validated component name.
    ///
    /// Length is measured in characters, not bytes, and the input is not
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationDomainError::NameTooShort`] below 3 characters or
    /// [`GenerationDomainError::NameTooLong`] above 64 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, GenerationDomainError> {
        let raw = value.into();
        let length = raw.chars().count();

        if length < MIN_NAME_LENGTH {
            return Err(GenerationDomainError::NameTooShort { length });
        }

        if length > MAX_NAME_LENGTH {
            return Err(GenerationDomainError::NameTooLong { length });
        }

        Ok(Self(raw))
    }

    /// Returns the name as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the component identifier.
    ///
    /// Every word is title-cased, then every non-alphanumeric character is
    /// dropped: `"my cool thing"` becomes `MyCoolThing` and `"abc-123_def"`
    /// becomes `Abc123Def`. A cased letter that follows a cased letter is
    /// lowered and any other cased letter takes its titlecase form, so
    /// uncased scripts start a new word (`"日本abc"` becomes `日本Abc`).
    ///
    /// Names made only of punctuation yield an empty identifier and names
    /// starting with a digit yield a digit-leading one. Both are returned
    /// as-is.
    #[must_use]
    pub fn identifier(&self) -> String {
        let mut identifier = String::with_capacity(self.0.len());
        let mut previous_cased = false;
        let mut chars = self.0.chars();

        while let Some(ch) = chars.next() {
            let mapped = if previous_cased {
                lowercase_within_word(ch, chars.clone())
            } else {
                titlecase(ch)
            };
            identifier.extend(mapped.chars().filter(|c| c.is_alphanumeric()));
            previous_cased = is_cased(ch);
        }

        identifier
    }
}

/// Titlecase letters (general category `Lt`).
const fn is_titlecase_letter(ch: char) -> bool {
    matches!(
        ch,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || is_titlecase_letter(ch)
}

/// Apostrophes, word-internal punctuation, spacing modifiers and combining
/// diacritics, which do not end a word for final-sigma purposes.
const fn is_case_ignorable(ch: char) -> bool {
    matches!(
        ch,
        '\'' | '.'
            | ':'
            | '^'
            | '`'
            | '\u{00A8}'
            | '\u{00AD}'
            | '\u{00AF}'
            | '\u{00B4}'
            | '\u{00B7}'
            | '\u{00B8}'
            | '\u{02B0}'..='\u{036F}'
            | '\u{0374}'..='\u{0375}'
            | '\u{037A}'
            | '\u{0384}'..='\u{0385}'
            | '\u{0387}'
            | '\u{2018}'..='\u{2019}'
            | '\u{2024}'
            | '\u{2027}'
            | '\u{200B}'..='\u{200F}'
    )
}

/// Lowers a letter inside a word; a capital sigma not followed by another
/// cased letter takes its final form.
fn lowercase_within_word(ch: char, rest: impl Iterator<Item = char>) -> String {
    if ch == '\u{03A3}' {
        let mut following = rest.skip_while(|next| is_case_ignorable(*next));
        let continues_word = following.next().is_some_and(is_cased);
        return if continues_word { '\u{03C3}' } else { '\u{03C2}' }.to_string();
    }
    ch.to_lowercase().collect()
}

/// Full Unicode titlecase mapping.
///
/// Titlecase equals uppercase except for the digraphs, Georgian Mkhedruli
/// (which has no titlecase form), the Greek letters with iota subscript and
/// letters whose uppercase expands to several characters, where only the
/// first character is raised (`ß` becomes `Ss`).
fn titlecase(ch: char) -> String {
    let single = match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(ch) + 8)
        }
        '\u{10D0}'..='\u{10FA}'
        | '\u{10FD}'..='\u{10FF}'
        | '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => Some(ch),
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    if let Some(mapped) = single {
        return mapped.to_string();
    }

    let expanded = match ch {
        '\u{0149}' => Some("\u{02BC}N"),
        '\u{1FB2}' => Some("\u{1FBA}\u{0345}"),
        '\u{1FB4}' => Some("\u{0386}\u{0345}"),
        '\u{1FB7}' => Some("\u{0391}\u{0342}\u{0345}"),
        '\u{1FC2}' => Some("\u{1FCA}\u{0345}"),
        '\u{1FC4}' => Some("\u{0389}\u{0345}"),
        '\u{1FC7}' => Some("\u{0397}\u{0342}\u{0345}"),
        '\u{1FF2}' => Some("\u{1FFA}\u{0345}"),
        '\u{1FF4}' => Some("\u{038F}\u{0345}"),
        '\u{1FF7}' => Some("\u{03A9}\u{0342}\u{0345}"),
        _ => None,
    };
    if let Some(mapped) = expanded {
        return mapped.to_owned();
    }

    let mut upper = ch.to_uppercase();
    let mut titled = String::new();
    if let Some(first) = upper.next() {
        titled.push(first);
    }
    titled.extend(upper.flat_map(char::to_lowercase));
    titled
}

impl Default for ComponentName {
    fn default() -> Self {
        Self(DEFAULT_COMPONENT_NAME.to_owned())
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
