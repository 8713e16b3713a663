//! Diagnostic rendering for syntax errors.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::{SyntaxError, SyntaxErrorKind};

impl SyntaxError {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        // Offsets count characters, which is ariadne's default index type.
        let start = self.start.offset as usize;
        let at = self.position.offset as usize;
        let culprit = at..at + 1;
        let construct = start..(at + 1).max(start + 1);

        match &self.kind {
            SyntaxErrorKind::InvalidTag => Report::build(ReportKind::Error, (filename, culprit.clone()))
                .with_message("invalid tag")
                .with_label(
                    Label::new((filename, culprit))
                        .with_message("unexpected character")
                        .with_color(Color::Red),
                )
                .with_help("tag names are ASCII letters; write `&lt;` for a literal '<'"),

            SyntaxErrorKind::InvalidEscape => Report::build(ReportKind::Error, (filename, culprit.clone()))
                .with_message("invalid escape sequence")
                .with_label(
                    Label::new((filename, construct))
                        .with_message("escape started here")
                        .with_color(Color::Blue),
                )
                .with_label(
                    Label::new((filename, culprit))
                        .with_message("unexpected character")
                        .with_color(Color::Red),
                )
                .with_help("entities look like `&name;` or `&#hex;`; write `&amp;` for a literal '&'"),

            SyntaxErrorKind::UnknownEntity(name) => Report::build(ReportKind::Error, (filename, construct.clone()))
                .with_message(format!("unknown entity `&{name};`"))
                .with_label(
                    Label::new((filename, construct))
                        .with_message("not in the entity table")
                        .with_color(Color::Red),
                ),

            SyntaxErrorKind::InvalidCodePoint(hex) => Report::build(ReportKind::Error, (filename, construct.clone()))
                .with_message(format!("invalid character reference `&#{hex};`"))
                .with_label(
                    Label::new((filename, construct))
                        .with_message("not a Unicode scalar value")
                        .with_color(Color::Red),
                )
                .with_help("code points go up to 10FFFF and exclude surrogates"),

            SyntaxErrorKind::UnclosedComment => Report::build(ReportKind::Error, (filename, construct.clone()))
                .with_message("unclosed comment")
                .with_label(
                    Label::new((filename, start..start + 4))
                        .with_message("comment opened here")
                        .with_color(Color::Red),
                )
                .with_help("add a closing '-->'"),

            SyntaxErrorKind::UnexpectedEof => Report::build(ReportKind::Error, (filename, at..at))
                .with_message("unexpected end of input")
                .with_label(
                    Label::new((filename, start..at))
                        .with_message("unfinished markup")
                        .with_color(Color::Red),
                ),
        }
    }
}
