//! Rendering of recognized chords in the transposed output.

/// The class attribute placed on every chord span in HTML output.
pub const CHORD_CLASS: &str = "chord";

/// How a recognized chord is written into the output text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Markup {
    /// `<span class="chord">C#m</span>`
    #[default]
    Html,

    /// The chord text alone.
    Plain
}

impl Markup {
    /// Append `chord` to `out`, marked up in this style.
    ///
    /// Only the chord is written; neither the chord nor anything else in the
    /// document is escaped.
    pub fn write_chord(&self, out: &mut String, chord: &str) {
        match *self {
            Markup::Html => {
                out.push_str("<span class=\"");
                out.push_str(CHORD_CLASS);
                out.push_str("\">");
                out.push_str(chord);
                out.push_str("</span>");
            }

            Markup::Plain => out.push_str(chord),
        }
    }
}
