//! HTML entity decoding.
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// HTML 4 named entities, `amp` excepted.
const ENTITIES: &[(&str, char)] = &[
    ("quot", '\u{22}'), ("lt", '\u{3c}'), ("gt", '\u{3e}'), ("nbsp", '\u{a0}'),
    ("iexcl", '\u{a1}'), ("cent", '\u{a2}'), ("pound", '\u{a3}'), ("curren", '\u{a4}'),
    ("yen", '\u{a5}'), ("brvbar", '\u{a6}'), ("sect", '\u{a7}'), ("uml", '\u{a8}'),
    ("copy", '\u{a9}'), ("ordf", '\u{aa}'), ("laquo", '\u{ab}'), ("not", '\u{ac}'),
    ("shy", '\u{ad}'), ("reg", '\u{ae}'), ("macr", '\u{af}'), ("deg", '\u{b0}'),
    ("plusmn", '\u{b1}'), ("sup2", '\u{b2}'), ("sup3", '\u{b3}'), ("acute", '\u{b4}'),
    ("micro", '\u{b5}'), ("para", '\u{b6}'), ("middot", '\u{b7}'), ("cedil", '\u{b8}'),
    ("sup1", '\u{b9}'), ("ordm", '\u{ba}'), ("raquo", '\u{bb}'), ("frac14", '\u{bc}'),
    ("frac12", '\u{bd}'), ("frac34", '\u{be}'), ("iquest", '\u{bf}'), ("Agrave", '\u{c0}'),
    ("Aacute", '\u{c1}'), ("Acirc", '\u{c2}'), ("Atilde", '\u{c3}'), ("Auml", '\u{c4}'),
    ("Aring", '\u{c5}'), ("AElig", '\u{c6}'), ("Ccedil", '\u{c7}'), ("Egrave", '\u{c8}'),
    ("Eacute", '\u{c9}'), ("Ecirc", '\u{ca}'), ("Euml", '\u{cb}'), ("Igrave", '\u{cc}'),
    ("Iacute", '\u{cd}'), ("Icirc", '\u{ce}'), ("Iuml", '\u{cf}'), ("ETH", '\u{d0}'),
    ("Ntilde", '\u{d1}'), ("Ograve", '\u{d2}'), ("Oacute", '\u{d3}'), ("Ocirc", '\u{d4}'),
    ("Otilde", '\u{d5}'), ("Ouml", '\u{d6}'), ("times", '\u{d7}'), ("Oslash", '\u{d8}'),
    ("Ugrave", '\u{d9}'), ("Uacute", '\u{da}'), ("Ucirc", '\u{db}'), ("Uuml", '\u{dc}'),
    ("Yacute", '\u{dd}'), ("THORN", '\u{de}'), ("szlig", '\u{df}'), ("agrave", '\u{e0}'),
    ("aacute", '\u{e1}'), ("acirc", '\u{e2}'), ("atilde", '\u{e3}'), ("auml", '\u{e4}'),
    ("aring", '\u{e5}'), ("aelig", '\u{e6}'), ("ccedil", '\u{e7}'), ("egrave", '\u{e8}'),
    ("eacute", '\u{e9}'), ("ecirc", '\u{ea}'), ("euml", '\u{eb}'), ("igrave", '\u{ec}'),
    ("iacute", '\u{ed}'), ("icirc", '\u{ee}'), ("iuml", '\u{ef}'), ("eth", '\u{f0}'),
    ("ntilde", '\u{f1}'), ("ograve", '\u{f2}'), ("oacute", '\u{f3}'), ("ocirc", '\u{f4}'),
    ("otilde", '\u{f5}'), ("ouml", '\u{f6}'), ("divide", '\u{f7}'), ("oslash", '\u{f8}'),
    ("ugrave", '\u{f9}'), ("uacute", '\u{fa}'), ("ucirc", '\u{fb}'), ("uuml", '\u{fc}'),
    ("yacute", '\u{fd}'), ("thorn", '\u{fe}'), ("yuml", '\u{ff}'), ("OElig", '\u{152}'),
    ("oelig", '\u{153}'), ("Scaron", '\u{160}'), ("scaron", '\u{161}'), ("Yuml", '\u{178}'),
    ("fnof", '\u{192}'), ("circ", '\u{2c6}'), ("tilde", '\u{2dc}'), ("Alpha", '\u{391}'),
    ("Beta", '\u{392}'), ("Gamma", '\u{393}'), ("Delta", '\u{394}'), ("Epsilon", '\u{395}'),
    ("Zeta", '\u{396}'), ("Eta", '\u{397}'), ("Theta", '\u{398}'), ("Iota", '\u{399}'),
    ("Kappa", '\u{39a}'), ("Lambda", '\u{39b}'), ("Mu", '\u{39c}'), ("Nu", '\u{39d}'),
    ("Xi", '\u{39e}'), ("Omicron", '\u{39f}'), ("Pi", '\u{3a0}'), ("Rho", '\u{3a1}'),
    ("Sigma", '\u{3a3}'), ("Tau", '\u{3a4}'), ("Upsilon", '\u{3a5}'), ("Phi", '\u{3a6}'),
    ("Chi", '\u{3a7}'), ("Psi", '\u{3a8}'), ("Omega", '\u{3a9}'), ("alpha", '\u{3b1}'),
    ("beta", '\u{3b2}'), ("gamma", '\u{3b3}'), ("delta", '\u{3b4}'), ("epsilon", '\u{3b5}'),
    ("zeta", '\u{3b6}'), ("eta", '\u{3b7}'), ("theta", '\u{3b8}'), ("iota", '\u{3b9}'),
    ("kappa", '\u{3ba}'), ("lambda", '\u{3bb}'), ("mu", '\u{3bc}'), ("nu", '\u{3bd}'),
    ("xi", '\u{3be}'), ("omicron", '\u{3bf}'), ("pi", '\u{3c0}'), ("rho", '\u{3c1}'),
    ("sigmaf", '\u{3c2}'), ("sigma", '\u{3c3}'), ("tau", '\u{3c4}'), ("upsilon", '\u{3c5}'),
    ("phi", '\u{3c6}'), ("chi", '\u{3c7}'), ("psi", '\u{3c8}'), ("omega", '\u{3c9}'),
    ("thetasym", '\u{3d1}'), ("upsih", '\u{3d2}'), ("piv", '\u{3d6}'), ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'), ("thinsp", '\u{2009}'), ("zwnj", '\u{200c}'), ("zwj", '\u{200d}'),
    ("lrm", '\u{200e}'), ("rlm", '\u{200f}'), ("ndash", '\u{2013}'), ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'), ("rsquo", '\u{2019}'), ("sbquo", '\u{201a}'), ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'), ("bdquo", '\u{201e}'), ("dagger", '\u{2020}'), ("Dagger", '\u{2021}'),
    ("bull", '\u{2022}'), ("hellip", '\u{2026}'), ("permil", '\u{2030}'), ("prime", '\u{2032}'),
    ("Prime", '\u{2033}'), ("lsaquo", '\u{2039}'), ("rsaquo", '\u{203a}'), ("oline", '\u{203e}'),
    ("frasl", '\u{2044}'), ("euro", '\u{20ac}'), ("image", '\u{2111}'), ("weierp", '\u{2118}'),
    ("real", '\u{211c}'), ("trade", '\u{2122}'), ("alefsym", '\u{2135}'), ("larr", '\u{2190}'),
    ("uarr", '\u{2191}'), ("rarr", '\u{2192}'), ("darr", '\u{2193}'), ("harr", '\u{2194}'),
    ("crarr", '\u{21b5}'), ("lArr", '\u{21d0}'), ("uArr", '\u{21d1}'), ("rArr", '\u{21d2}'),
    ("dArr", '\u{21d3}'), ("hArr", '\u{21d4}'), ("forall", '\u{2200}'), ("part", '\u{2202}'),
    ("exist", '\u{2203}'), ("empty", '\u{2205}'), ("nabla", '\u{2207}'), ("isin", '\u{2208}'),
    ("notin", '\u{2209}'), ("ni", '\u{220b}'), ("prod", '\u{220f}'), ("sum", '\u{2211}'),
    ("minus", '\u{2212}'), ("lowast", '\u{2217}'), ("radic", '\u{221a}'), ("prop", '\u{221d}'),
    ("infin", '\u{221e}'), ("ang", '\u{2220}'), ("and", '\u{2227}'), ("or", '\u{2228}'),
    ("cap", '\u{2229}'), ("cup", '\u{222a}'), ("int", '\u{222b}'), ("there4", '\u{2234}'),
    ("sim", '\u{223c}'), ("cong", '\u{2245}'), ("asymp", '\u{2248}'), ("ne", '\u{2260}'),
    ("equiv", '\u{2261}'), ("le", '\u{2264}'), ("ge", '\u{2265}'), ("sub", '\u{2282}'),
    ("sup", '\u{2283}'), ("nsub", '\u{2284}'), ("sube", '\u{2286}'), ("supe", '\u{2287}'),
    ("oplus", '\u{2295}'), ("otimes", '\u{2297}'), ("perp", '\u{22a5}'), ("sdot", '\u{22c5}'),
    ("lceil", '\u{2308}'), ("rceil", '\u{2309}'), ("lfloor", '\u{230a}'), ("rfloor", '\u{230b}'),
    ("lang", '\u{2329}'), ("rang", '\u{232a}'), ("loz", '\u{25ca}'), ("spades", '\u{2660}'),
    ("clubs", '\u{2663}'), ("hearts", '\u{2665}'), ("diams", '\u{2666}'),
];

lazy_static! {
    static ref DIGIT_ENTITY: Regex = Regex::new(r"&#(\d+);").unwrap();
    static ref ALPHA_ENTITY: Regex = Regex::new(r"&(\w+);").unwrap();
    static ref NAMED: HashMap<&'static str, char> = ENTITIES.iter().copied().collect();
}

/// Decode numeric and named HTML entities.
///
/// `&amp;` becomes `" and "`; unknown entities are left as they are.
pub fn html2unicode(text: &str) -> String {
    let text = DIGIT_ENTITY.replace_all(text, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    let text = ALPHA_ENTITY.replace_all(&text, |caps: &Captures| {
        match NAMED.get(&caps[1]) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    });

    text.replace("&amp;", " and ")
}

#[cfg(test)]
mod tests {
    use super::html2unicode;

    #[test]
    fn numeric() {
        assert_eq!(html2unicode("it&#39;s"), "it's");
        assert_eq!(html2unicode("&#128514;"), "😂");
    }

    #[test]
    fn named() {
        assert_eq!(html2unicode("&lt;3 &quot;hi&quot;"), "<3 \"hi\"");
        assert_eq!(html2unicode("&unknown;"), "&unknown;");
    }

    #[test]
    fn full_entity_set() {
        assert_eq!(html2unicode("i &hearts; it &rarr; now"), "i ♥ it → now");
        assert_eq!(html2unicode("&Eacute;t&eacute; &euro;5"), "Été €5");
        assert_eq!(html2unicode("&alpha;&Omega;"), "αΩ");
    }

    #[test]
    fn ampersand() {
        assert_eq!(html2unicode("rock&amp;roll"), "rock and roll");
    }
}
