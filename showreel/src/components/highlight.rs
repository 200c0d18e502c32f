use serde::{Deserialize, Serialize};

use crate::theme::SyntaxColors;
use crate::theme::color::Color;

/// One source character with its syntax color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightedChar {
    /// The character.
    pub ch: char,
    /// Its color.
    pub color: Color,
}

const KEYWORDS: [&str; 4] = ["const", "return", "true", "false"];
const FRAMEWORK_WORDS: [&str; 5] = [
    "useState",
    "onClick",
    "onMouseEnter",
    "onMouseLeave",
    "className",
];

/// Color a JS/JSX snippet character by character.
///
/// Keywords need a trailing boundary (end, whitespace, `(`, `,` or `=`); framework identifiers
/// match anywhere. Quoted strings run to the matching quote or the end of input.
pub fn highlight_code(code: &str, colors: &SyntaxColors) -> Vec<HighlightedChar> {
    let src: Vec<char> = code.chars().collect();
    let mut out = Vec::with_capacity(src.len());

    let mut i = 0;
    'scan: while i < src.len() {
        for kw in KEYWORDS {
            if starts_with_at(&src, i, kw) {
                let next = src.get(i + kw.chars().count());
                if next.is_none_or(|c| c.is_whitespace() || matches!(c, '(' | ',' | '=')) {
                    out.extend(kw.chars().map(|ch| HighlightedChar {
                        ch,
                        color: colors.keyword,
                    }));
                    i += kw.chars().count();
                    continue 'scan;
                }
            }
        }
        for word in FRAMEWORK_WORDS {
            if starts_with_at(&src, i, word) {
                out.extend(word.chars().map(|ch| HighlightedChar {
                    ch,
                    color: colors.react,
                }));
                i += word.chars().count();
                continue 'scan;
            }
        }

        let c = src[i];
        match c {
            '\'' | '"' => {
                out.push(HighlightedChar { ch: c, color: colors.string });
                i += 1;
                while i < src.len() && src[i] != c {
                    out.push(HighlightedChar { ch: src[i], color: colors.string });
                    i += 1;
                }
                if i < src.len() {
                    out.push(HighlightedChar { ch: src[i], color: colors.string });
                    i += 1;
                }
            }
            '<' | '>' => {
                out.push(HighlightedChar { ch: c, color: colors.jsx });
                i += 1;
            }
            '{' | '}' | '(' | ')' | '[' | ']' => {
                out.push(HighlightedChar { ch: c, color: colors.bracket });
                i += 1;
            }
            '=' if src.get(i + 1) == Some(&'>') => {
                out.push(HighlightedChar { ch: '=', color: colors.arrow });
                out.push(HighlightedChar { ch: '>', color: colors.arrow });
                i += 2;
            }
            _ => {
                out.push(HighlightedChar { ch: c, color: colors.default });
                i += 1;
            }
        }
    }
    out
}

fn starts_with_at(src: &[char], at: usize, word: &str) -> bool {
    let mut idx = at;
    for w in word.chars() {
        if src.get(idx) != Some(&w) {
            return false;
        }
        idx += 1;
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/components/highlight.rs"]
mod tests;
