//! Per-character syntax classification.
//!
//! Highlighting is a single left-to-right scan over a row's rendered bytes. The only
//! state carried between rows is whether a multi-line comment is still open at the end
//! of the previous row; the buffer propagates that flag forward when it changes.

use crate::syntax::Language;

/// Classification of one rendered character. Only used to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    MultiLineComment,
    Keyword,
    Type,
    String,
    Number,
    Match,
}

/// Bytes that delimit tokens for keyword and number matching.
pub fn is_separator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b'\0' || b",.()+-/*=~%<>[];".contains(&c)
}

/// Result of highlighting one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHighlight {
    pub tags: Vec<Highlight>,
    /// A multi-line comment is still open at the end of the row
    pub open_comment: bool,
}

/// Classify every byte of `render`.
///
/// `in_comment` is the trailing-comment flag of the previous row. Without a language
/// every byte is `Normal` and the comment state is closed.
pub fn highlight_row(render: &[u8], language: Option<&Language>, in_comment: bool) -> RowHighlight {
    let mut tags = vec![Highlight::Normal; render.len()];
    let Some(lang) = language else {
        return RowHighlight {
            tags,
            open_comment: false,
        };
    };

    let scs = lang.singleline_comment.unwrap_or("").as_bytes();
    let (mcs, mce): (&[u8], &[u8]) = match lang.multiline_comment {
        Some((start, end)) => (start.as_bytes(), end.as_bytes()),
        None => (b"", b""),
    };

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = in_comment && !mcs.is_empty() && !mce.is_empty();

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { tags[i - 1] } else { Highlight::Normal };

        if !scs.is_empty() && in_string.is_none() && !in_comment && render[i..].starts_with(scs) {
            tags[i..].fill(Highlight::Comment);
            break;
        }

        if !mcs.is_empty() && !mce.is_empty() && in_string.is_none() {
            if in_comment {
                tags[i] = Highlight::MultiLineComment;
                if render[i..].starts_with(mce) {
                    tags[i..i + mce.len()].fill(Highlight::MultiLineComment);
                    i += mce.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if render[i..].starts_with(mcs) {
                tags[i..i + mcs.len()].fill(Highlight::MultiLineComment);
                i += mcs.len();
                in_comment = true;
                continue;
            }
        }

        if lang.highlight_strings {
            if let Some(quote) = in_string {
                tags[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    tags[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                tags[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if lang.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            tags[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, tag)) = match_keyword(&render[i..], lang.keywords) {
                tags[i..i + len].fill(tag);
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    RowHighlight {
        tags,
        open_comment: in_comment,
    }
}

/// First keyword in table order that matches at the start of `text` and is followed by a
/// separator (or the end of the row). A trailing `|` marks a type keyword.
fn match_keyword(text: &[u8], keywords: &[&str]) -> Option<(usize, Highlight)> {
    keywords.iter().find_map(|kw| {
        let (word, tag) = match kw.strip_suffix('|') {
            Some(word) => (word.as_bytes(), Highlight::Type),
            None => (kw.as_bytes(), Highlight::Keyword),
        };
        if word.is_empty() || !text.starts_with(word) {
            return None;
        }
        let next = text.get(word.len()).copied().unwrap_or(b'\0');
        is_separator(next).then_some((word.len(), tag))
    })
}
