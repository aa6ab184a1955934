// src/csv.rs
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::sanitize::single_line;
use crate::model::FlashcardPair;

/* ---------------- Delimiter ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Equals,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::Tab, Delimiter::Comma, Delimiter::Equals];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
            Delimiter::Equals => '=',
        }
    }

    /// File extension used for downloads.
    pub fn ext(self) -> &'static str {
        match self {
            Delimiter::Comma => "csv",
            Delimiter::Tab => "tsv",
            Delimiter::Equals => "txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Tab => "Tab",
            Delimiter::Comma => "Comma (,)",
            Delimiter::Equals => "Equals (=)",
        }
    }

    /// Strict lookup: setting names, literal characters, and format names.
    pub fn from_name(s: &str) -> Option<Self> {
        if s == "\t" {
            return Some(Delimiter::Tab);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "tab" | "\\t" | "tsv" => Some(Delimiter::Tab),
            "comma" | "," | "csv" => Some(Delimiter::Comma),
            "equals" | "=" | "txt" => Some(Delimiter::Equals),
            _ => None,
        }
    }

    /// Lenient lookup used at export time: anything unknown falls back to comma.
    pub fn parse_or_comma(s: &str) -> Self {
        Self::from_name(s).unwrap_or_else(|| {
            logw!("Export: unknown delimiter {:?}, using comma", s);
            Delimiter::Comma
        })
    }
}

/* ---------------- Writing ---------------- */

/// Escape one field for the chosen delimiter.
/// Line breaks always become spaces. Comma gets CSV quoting when the field
/// holds a comma or a quote; tab/equals get the delimiter replaced by a space.
pub fn escape_field(field: &str, delim: Delimiter) -> String {
    let flat = single_line(field);
    let sep = delim.as_char();
    match delim {
        Delimiter::Comma => {
            if flat.contains(sep) || flat.contains('"') {
                format!("\"{}\"", flat.replace('"', "\"\""))
            } else {
                flat
            }
        }
        Delimiter::Tab | Delimiter::Equals => flat.replace(sep, " "),
    }
}

/// Write one `term<d>definition` line to any writer.
pub fn write_pair<W: Write>(mut w: W, pair: &FlashcardPair, delim: Delimiter) -> io::Result<()> {
    writeln!(
        w,
        "{}{}{}",
        escape_field(&pair.term, delim),
        delim.as_char(),
        escape_field(&pair.definition, delim)
    )
}

/// Full export text (Copy/Download): one line per pair, no header.
pub fn to_export_string(pairs: &[FlashcardPair], delim: Delimiter) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for p in pairs {
        let _ = write_pair(&mut buf, p, delim);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
