use pretty_assertions::assert_eq;

use chordshift::note::PitchClass;
use chordshift::token::{tokens, Token};
use chordshift::{is_chord, transpose_chord, transpose_text, transpose_text_with, Markup, Transposition};

const SHEET: &str = "\
[Verse 1]
Am          F
  I've been walking all alone,
C                 G/B    G
  (yeah) the road was long.

Dm7   Bbmaj7, Esus4 E
Eu vi a Lua, A noite caiu.\r\n\t";

/// Remove the chord spans, keeping whatever was inside them.
fn strip_spans(html: &str) -> String {
    html.replace("<span class=\"chord\">", "").replace("</span>", "")
}

#[test]
fn end_to_end_example() {
    assert_eq!(
        transpose_text("Am F\nG  C", 2),
        "<span class=\"chord\">Bm</span> <span class=\"chord\">G</span>\n\
         <span class=\"chord\">A</span>  <span class=\"chord\">D</span>"
    );
}

#[test]
fn layout_survives_transposition() {
    for &n in &[-14, -3, 0, 1, 7, 24] {
        let out = strip_spans(&transpose_text(SHEET, n));

        let before: Vec<_> = tokens(SHEET).collect();
        let after: Vec<_> = tokens(&out).collect();
        assert_eq!(before.len(), after.len());

        for (a, b) in before.iter().zip(after.iter()) {
            match (*a, *b) {
                (Token::Whitespace(x), Token::Whitespace(y)) => assert_eq!(x, y),
                (Token::Word(x), Token::Word(y)) if !is_chord(x) => assert_eq!(x, y),
                (Token::Word(_), Token::Word(_)) => {}
                _ => panic!("token kinds differ: {:?} vs {:?}", a, b),
            }
        }
    }
}

#[test]
fn zero_shift_only_respells() {
    let out = transpose_text_with(SHEET, 0, Markup::Plain);
    let expected = SHEET.replace("Bbmaj7", "A#maj7");
    assert_eq!(out, expected);
}

#[test]
fn sheet_transposed_up_a_tone() {
    let out = transpose_text_with(SHEET, 2, Markup::Plain);
    let expected = "\
[Verse 1]
Bm          G
  I've been walking all alone,
D                 G/B    A
  (yeah) the road was long.

Em7   Cmaj7, F#sus4 F#
Eu vi a Lua, B noite caiu.\r\n\t";

    assert_eq!(out, expected);
}

#[test]
fn round_trip_every_root() {
    let roots = PitchClass::ALL.iter().map(|p| p.name()).chain(vec!["Db", "Eb", "Gb", "Ab", "Bb"]);

    for root in roots {
        let normalized = transpose_chord(root, 0);
        for n in -30..=30 {
            let there = transpose_chord(&format!("{}m7", root), n);
            assert_eq!(transpose_chord(&there, -n), format!("{}m7", normalized));
        }
    }
}

#[test]
fn twelve_periodic() {
    for chord in &["C", "C#dim", "Ebaug", "F#m7", "Bbsus4", "G13", "Hz", "[Am]"] {
        for n in -40..40 {
            assert_eq!(transpose_chord(chord, n), transpose_chord(chord, n + 12));
        }
    }
}

#[test]
fn flat_normalization() {
    assert_eq!(transpose_chord("Db", 0), "C#");
    assert_eq!(transpose_chord("Bbm7", 0), "A#m7");
}

#[test]
fn unknown_roots_fail_soft() {
    assert_eq!(transpose_chord("Hz", 3), "Hz");
    assert_eq!(transpose_chord("Fb", -7), "Fb");
}

#[test]
fn classification_boundaries() {
    assert!(is_chord("Am"));
    assert!(is_chord("F#m"));
    assert!(is_chord("Csus4"));
    assert!(!is_chord("C/G"));
    assert!(!is_chord("I"));
    assert!(is_chord("[Am]"));
}

#[test]
fn capo_compensation() {
    let t = Transposition::new(0).with_capo(2);
    assert_eq!(strip_spans(&t.apply("G D Em C")), "F C Dm A#");

    let t = Transposition::new(2).with_capo(2);
    assert_eq!(strip_spans(&t.apply("G D Em C")), "G D Em C");
}
