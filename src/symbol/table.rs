//! Fixed alias data. Not user-configurable at runtime.

use super::{SymbolEntry, SymbolKind};
use crate::style::FontStyle;

macro_rules! entry {
    ($name:literal, $kind:expr) => {
        SymbolEntry {
            name: $name,
            kind: $kind,
        }
    };
}

pub(super) static ENTRIES: &[SymbolEntry] = &[
    // Greek, lower case (payload is the symbol-font transliteration letter)
    entry!("alpha", SymbolKind::Greek('a')),
    entry!("beta", SymbolKind::Greek('b')),
    entry!("gamma", SymbolKind::Greek('g')),
    entry!("delta", SymbolKind::Greek('d')),
    entry!("epsilon", SymbolKind::Greek('e')),
    entry!("zeta", SymbolKind::Greek('z')),
    entry!("eta", SymbolKind::Greek('h')),
    entry!("theta", SymbolKind::Greek('q')),
    entry!("iota", SymbolKind::Greek('i')),
    entry!("kappa", SymbolKind::Greek('k')),
    entry!("lambda", SymbolKind::Greek('l')),
    entry!("mu", SymbolKind::Greek('m')),
    entry!("nu", SymbolKind::Greek('n')),
    entry!("xi", SymbolKind::Greek('c')),
    entry!("omicron", SymbolKind::Greek('o')),
    entry!("pi", SymbolKind::Greek('p')),
    entry!("rho", SymbolKind::Greek('r')),
    entry!("sigma", SymbolKind::Greek('s')),
    entry!("tau", SymbolKind::Greek('t')),
    entry!("upsilon", SymbolKind::Greek('u')),
    entry!("phi", SymbolKind::Greek('f')),
    entry!("chi", SymbolKind::Greek('x')),
    entry!("psi", SymbolKind::Greek('y')),
    entry!("omega", SymbolKind::Greek('w')),
    // Greek, upper case
    entry!("Alpha", SymbolKind::Greek('A')),
    entry!("Beta", SymbolKind::Greek('B')),
    entry!("Gamma", SymbolKind::Greek('G')),
    entry!("Delta", SymbolKind::Greek('D')),
    entry!("Epsilon", SymbolKind::Greek('E')),
    entry!("Zeta", SymbolKind::Greek('Z')),
    entry!("Eta", SymbolKind::Greek('H')),
    entry!("Theta", SymbolKind::Greek('Q')),
    entry!("Iota", SymbolKind::Greek('I')),
    entry!("Kappa", SymbolKind::Greek('K')),
    entry!("Lambda", SymbolKind::Greek('L')),
    entry!("Mu", SymbolKind::Greek('M')),
    entry!("Nu", SymbolKind::Greek('N')),
    entry!("Xi", SymbolKind::Greek('C')),
    entry!("Omicron", SymbolKind::Greek('O')),
    entry!("Pi", SymbolKind::Greek('P')),
    entry!("Rho", SymbolKind::Greek('R')),
    entry!("Sigma", SymbolKind::Greek('S')),
    entry!("Tau", SymbolKind::Greek('T')),
    entry!("Upsilon", SymbolKind::Greek('U')),
    entry!("Phi", SymbolKind::Greek('F')),
    entry!("Chi", SymbolKind::Greek('X')),
    entry!("Psi", SymbolKind::Greek('Y')),
    entry!("Omega", SymbolKind::Greek('W')),
    // Solar-system bodies (Hershey vector glyphs)
    entry!("Sun", SymbolKind::Hershey(2281)),
    entry!("Mercury", SymbolKind::Hershey(2282)),
    entry!("Venus", SymbolKind::Hershey(2283)),
    entry!("Earth", SymbolKind::Hershey(2284)),
    entry!("Mars", SymbolKind::Hershey(2285)),
    entry!("Jupiter", SymbolKind::Hershey(2286)),
    entry!("Saturn", SymbolKind::Hershey(2287)),
    entry!("Uranus", SymbolKind::Hershey(2288)),
    entry!("Neptune", SymbolKind::Hershey(2289)),
    entry!("Pluto", SymbolKind::Hershey(2290)),
    entry!("Moon", SymbolKind::Hershey(2291)),
    // Mathematical operators
    entry!("times", SymbolKind::Text("×")),
    entry!("div", SymbolKind::Text("÷")),
    entry!("pm", SymbolKind::Text("±")),
    entry!("mp", SymbolKind::Text("∓")),
    entry!("leq", SymbolKind::Text("≤")),
    entry!("geq", SymbolKind::Text("≥")),
    entry!("neq", SymbolKind::Text("≠")),
    entry!("approx", SymbolKind::Text("≈")),
    entry!("propto", SymbolKind::Text("∝")),
    entry!("infinity", SymbolKind::Text("∞")),
    entry!("partial", SymbolKind::Text("∂")),
    entry!("nabla", SymbolKind::Text("∇")),
    entry!("sqrt", SymbolKind::Text("√")),
    entry!("sum", SymbolKind::Text("∑")),
    entry!("prod", SymbolKind::Text("∏")),
    entry!("int", SymbolKind::Text("∫")),
    entry!("deg", SymbolKind::Text("°")),
    entry!("cdot", SymbolKind::Text("·")),
    entry!("angstrom", SymbolKind::Text("Å")),
    // Graph markers
    entry!("dot", SymbolKind::Marker(1)),
    entry!("plus", SymbolKind::Marker(2)),
    entry!("asterisk", SymbolKind::Marker(3)),
    entry!("circle", SymbolKind::Marker(4)),
    entry!("cross", SymbolKind::Marker(5)),
    // Font switches (longhand aliases for \fn, \fr, \fi, \fs, \fb)
    entry!("normal", SymbolKind::Font(FontStyle::Normal)),
    entry!("roman", SymbolKind::Font(FontStyle::Roman)),
    entry!("italic", SymbolKind::Font(FontStyle::Italic)),
    entry!("script", SymbolKind::Font(FontStyle::Script)),
    entry!("bold", SymbolKind::Font(FontStyle::Bold)),
];
