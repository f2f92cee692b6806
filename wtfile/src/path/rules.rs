//! Host path rules applied to text.
//!
//! These functions work on `&str` rather than `Path` so that the values they
//! produce are exactly the text a caller would predict: no trailing-separator
//! cleanup, no component normalization except in [`normpath`].
//!
//! Separators are recognized with [`std::path::is_separator`] and emitted as
//! [`std::path::MAIN_SEPARATOR`].

use std::path::{is_separator, Path, MAIN_SEPARATOR};

/// Whether a segment replaces everything joined before it.
fn is_absolute_segment(segment: &str) -> bool {
    segment.starts_with(is_separator) || Path::new(segment).is_absolute()
}

/// Join segments with the host separator.
///
/// An absolute segment discards everything before it. No separator is
/// inserted when the accumulated text is empty or already ends with one.
///
/// # Examples
///
/// ```
/// use wtfile::path::rules::join;
///
/// assert_eq!(join(["/tmp", "wtfile", "tmp.file"]), "/tmp/wtfile/tmp.file");
/// assert_eq!(join(["/tmp", "/etc", "hosts"]), "/etc/hosts");
/// assert_eq!(join(Vec::<&str>::new()), "");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if is_absolute_segment(segment) {
            joined.clear();
        } else if !joined.is_empty() && !joined.ends_with(is_separator) {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(segment);
    }
    joined
}

/// Split into `(head, tail)` around the final separator.
///
/// `tail` never contains a separator. Trailing separators are stripped from
/// `head` unless it consists only of separators (the root).
///
/// # Examples
///
/// ```
/// use wtfile::path::rules::split;
///
/// assert_eq!(split("/tmp/wtfile/tmp.file"), ("/tmp/wtfile", "tmp.file"));
/// assert_eq!(split("/tmp"), ("/", "tmp"));
/// assert_eq!(split("tmp.file"), ("", "tmp.file"));
/// assert_eq!(split("/tmp/"), ("/tmp", ""));
/// ```
#[must_use]
pub fn split(text: &str) -> (&str, &str) {
    let tail_start = text.rfind(is_separator).map_or(0, |i| i + 1);
    let (head, tail) = text.split_at(tail_start);
    let trimmed = head.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        (head, tail)
    } else {
        (trimmed, tail)
    }
}

/// The directory part of `text`; see [`split`].
#[must_use]
pub fn dirname(text: &str) -> &str {
    split(text).0
}

/// The final segment of `text`; see [`split`].
#[must_use]
pub fn basename(text: &str) -> &str {
    split(text).1
}

/// Split into `(root, extension)` where `extension` starts at the last dot
/// of the final segment.
///
/// Dots that only lead the final segment do not start an extension, so
/// hidden files like `.bashrc` have none.
///
/// # Examples
///
/// ```
/// use wtfile::path::rules::splitext;
///
/// assert_eq!(splitext("/tmp/tmp.file"), ("/tmp/tmp", ".file"));
/// assert_eq!(splitext("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(splitext("/home/.bashrc"), ("/home/.bashrc", ""));
/// assert_eq!(splitext("dir.d/file"), ("dir.d/file", ""));
/// ```
#[must_use]
pub fn splitext(text: &str) -> (&str, &str) {
    let name_start = text.rfind(is_separator).map_or(0, |i| i + 1);
    if let Some(dot) = text.rfind('.') {
        if dot >= name_start && text[name_start..dot].chars().any(|c| c != '.') {
            return text.split_at(dot);
        }
    }
    (text, "")
}

/// Collapse `.`, `..` and redundant separators.
///
/// Purely lexical: `..` after a normal segment removes it, `..` at the root
/// of an absolute path is dropped, and leading `..` of a relative path are
/// kept. The empty path normalizes to `.`.
///
/// # Examples
///
/// ```
/// use wtfile::path::rules::normpath;
///
/// assert_eq!(normpath("/tmp//wtfile/./folder/.."), "/tmp/wtfile");
/// assert_eq!(normpath("/.."), "/");
/// assert_eq!(normpath("../a/../../b"), "../../b");
/// assert_eq!(normpath(""), ".");
/// ```
#[must_use]
pub fn normpath(text: &str) -> String {
    if text.is_empty() {
        return ".".to_string();
    }

    let absolute = text.starts_with(is_separator);
    let mut kept: Vec<&str> = Vec::new();
    for segment in text.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match kept.last() {
                Some(&last) if last != ".." => {
                    kept.pop();
                }
                None if absolute => {}
                _ => kept.push(segment),
            },
            _ => kept.push(segment),
        }
    }

    let body = kept.join(&MAIN_SEPARATOR.to_string());
    if absolute {
        format!("{MAIN_SEPARATOR}{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
