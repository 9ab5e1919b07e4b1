use crate::Result;
use std::{fmt::Write as _, fs::OpenOptions, io::Write as _, path::Path};
use time::OffsetDateTime;

/// Writes `values` through `f` into `out`, inserting `separator` between the
/// items that produced output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Longest prefix of `text` that fits in `max` bytes without cutting a
/// character in half.
pub fn truncate_at_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    &text[..cut]
}

#[macro_export]
macro_rules! truncate_long {
    ($text:expr) => {
        format_args!(
            "{}{}",
            $crate::truncate_at_boundary(&$text, 497).trim_end(),
            if $text.len() > 497 { "..." } else { "" },
        )
    };
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    let date = OffsetDateTime::now_utc().date();
    let mut out = String::with_capacity(10);
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    );
    out
}

/// Writes `content` to the file at `path`, creating it if needed.
/// With `append` set the content is added at the end instead of replacing.
pub fn save_as_file(path: impl AsRef<Path>, content: &str, append: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Coarse character classification used to split warehouse identifiers.
/// Anything outside ASCII digits and letters (CJK included) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Letter,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Other
        }
    }
}

/// Splits `input` into maximal runs of one [`CharClass`], preserving order
/// and content.
pub fn split_char_classes(input: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut run = String::new();
    let mut class = None;
    for c in input.chars() {
        let current = CharClass::of(c);
        if class.is_some_and(|previous| previous != current) {
            result.push(std::mem::take(&mut run));
        }
        run.push(c);
        class = Some(current);
    }
    if !run.is_empty() {
        result.push(run);
    }
    result
}

pub fn contains_digit(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

pub fn contains_letter(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_alphabetic())
}

/// Removes every ASCII digit.
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Removes the punctuation that commonly leaks into column names.
pub fn strip_symbols(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '_' | '(' | ')'))
        .collect()
}
