//! Static alias table for named markup escapes.
//!
//! Maps escape identifiers ("alpha", "Sun", "times", ...) to replacement
//! tokens: Greek letters, Hershey vector symbols, graph markers, font
//! switches, or plain substitution text. The table is built once on first
//! use and is read-only thereafter, so concurrent lookups need no locking.
//! Lookup is case-sensitive exact match: "alpha" and "Alpha" are distinct
//! entries (lower- and upper-case Greek), and no prefix matching is done.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::style::FontStyle;

mod table;

/// Replacement payload for one alias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolKind {
    /// Greek letter, carried as its Latin transliteration ('a' for alpha,
    /// 'W' for Omega); resolved to a glyph at layout time.
    Greek(char),
    /// Hershey vector-glyph number.
    Hershey(u16),
    /// Graph-marker number (dot, plus, asterisk, ...).
    Marker(u16),
    /// Font family switch.
    Font(FontStyle),
    /// Literal substitution text.
    Text(&'static str),
}

/// One alias entry: an exact-match name and its replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolEntry {
    pub name: &'static str,
    pub kind: SymbolKind,
}

lazy_static! {
    static ref SYMBOL_TABLE: HashMap<&'static str, &'static SymbolEntry> = {
        let mut map = HashMap::with_capacity(table::ENTRIES.len());
        for entry in table::ENTRIES {
            map.insert(entry.name, entry);
        }
        map
    };
}

/// Look up an escape identifier. Not-found is an expected outcome; the
/// scanner falls back to emitting the escape text literally.
pub fn lookup(name: &str) -> Option<&'static SymbolEntry> {
    SYMBOL_TABLE.get(name).copied()
}

/// Map a Greek transliteration letter to its Unicode codepoint.
///
/// The table stores Greek aliases as Latin letters in the classic symbol-
/// font convention ('q' for theta, 'c' for xi, 'w' for omega); this is the
/// inverse mapping applied when a `Greek` token is turned into a glyph.
/// Unknown letters pass through unchanged.
pub fn greek_codepoint(translit: char) -> char {
    match translit {
        'a' => 'α',
        'b' => 'β',
        'g' => 'γ',
        'd' => 'δ',
        'e' => 'ε',
        'z' => 'ζ',
        'h' => 'η',
        'q' => 'θ',
        'i' => 'ι',
        'k' => 'κ',
        'l' => 'λ',
        'm' => 'μ',
        'n' => 'ν',
        'c' => 'ξ',
        'o' => 'ο',
        'p' => 'π',
        'r' => 'ρ',
        's' => 'σ',
        't' => 'τ',
        'u' => 'υ',
        'f' => 'φ',
        'x' => 'χ',
        'y' => 'ψ',
        'w' => 'ω',
        'A' => 'Α',
        'B' => 'Β',
        'G' => 'Γ',
        'D' => 'Δ',
        'E' => 'Ε',
        'Z' => 'Ζ',
        'H' => 'Η',
        'Q' => 'Θ',
        'I' => 'Ι',
        'K' => 'Κ',
        'L' => 'Λ',
        'M' => 'Μ',
        'N' => 'Ν',
        'C' => 'Ξ',
        'O' => 'Ο',
        'P' => 'Π',
        'R' => 'Ρ',
        'S' => 'Σ',
        'T' => 'Τ',
        'U' => 'Υ',
        'F' => 'Φ',
        'X' => 'Χ',
        'Y' => 'Ψ',
        'W' => 'Ω',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lower = lookup("alpha").expect("alpha should be in the table");
        let upper = lookup("Alpha").expect("Alpha should be in the table");
        assert_eq!(lower.kind, SymbolKind::Greek('a'));
        assert_eq!(upper.kind, SymbolKind::Greek('A'));
        assert_ne!(lower.kind, upper.kind);
    }

    #[test]
    fn test_lookup_is_exact_not_prefix() {
        assert!(lookup("alpha").is_some());
        assert!(lookup("alphabeta").is_none());
        assert!(lookup("alph").is_none());
    }

    #[test]
    fn test_lookup_unknown_name_is_none() {
        assert!(lookup("notasymbol").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_sun_maps_to_hershey_2281() {
        let sun = lookup("Sun").expect("Sun should be in the table");
        assert_eq!(sun.kind, SymbolKind::Hershey(2281));
    }

    #[test]
    fn test_font_aliases() {
        assert_eq!(
            lookup("italic").map(|e| e.kind),
            Some(SymbolKind::Font(FontStyle::Italic))
        );
        assert_eq!(
            lookup("roman").map(|e| e.kind),
            Some(SymbolKind::Font(FontStyle::Roman))
        );
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut seen = std::collections::HashSet::new();
        for entry in super::table::ENTRIES {
            assert!(
                seen.insert(entry.name),
                "duplicate symbol name: {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_greek_codepoint_round_trip_samples() {
        assert_eq!(greek_codepoint('a'), 'α');
        assert_eq!(greek_codepoint('A'), 'Α');
        assert_eq!(greek_codepoint('q'), 'θ');
        assert_eq!(greek_codepoint('W'), 'Ω');
        // Non-transliteration letters pass through
        assert_eq!(greek_codepoint('7'), '7');
    }
}
