use super::*;
use crate::theme::ThemeName;

fn colors() -> SyntaxColors {
    ThemeName::Terminal.theme().colors.syntax
}

fn colors_of(code: &str) -> Vec<Color> {
    highlight_code(code, &colors()).into_iter().map(|h| h.color).collect()
}

#[test]
fn preserves_every_character() {
    let code = "const Button = ({ label }) => {\n  return <b>'hi'</b>;\n};";
    let out = highlight_code(code, &colors());
    let back: String = out.iter().map(|h| h.ch).collect();
    assert_eq!(back, code);
}

#[test]
fn keyword_needs_trailing_boundary() {
    let c = colors();
    assert!(colors_of("const x").iter().take(5).all(|&k| k == c.keyword));
    assert!(colors_of("constant").iter().all(|&k| k == c.default));
    assert!(colors_of("return").iter().all(|&k| k == c.keyword));
}

#[test]
fn framework_words_match_anywhere() {
    let c = colors();
    let out = colors_of("xuseState");
    assert_eq!(out[0], c.default);
    assert!(out[1..].iter().all(|&k| k == c.react));
}

#[test]
fn strings_brackets_jsx_and_arrows() {
    let c = colors();
    assert_eq!(colors_of("'a b'"), vec![c.string; 5]);
    assert_eq!(colors_of("(){}[]"), vec![c.bracket; 6]);
    assert_eq!(colors_of("<>"), vec![c.jsx; 2]);
    assert_eq!(colors_of("=>"), vec![c.arrow; 2]);
    assert_eq!(colors_of("= "), vec![c.default; 2]);
}

#[test]
fn unterminated_string_runs_to_end() {
    let c = colors();
    assert_eq!(colors_of("'abc"), vec![c.string; 4]);
}
