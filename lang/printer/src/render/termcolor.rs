use std::io;

use pretty::termcolor::{Color, ColorSpec};

use crate::WriteColor;
use crate::types::*;

/// Renders annotated documents to a color capable stream.
///
/// Nested annotations restore the color of the enclosing one when they end.
pub struct RenderTermcolor<W> {
    colors: Vec<ColorSpec>,
    out: W,
}

impl<W> RenderTermcolor<W> {
    pub fn new(out: W) -> RenderTermcolor<W> {
        RenderTermcolor { colors: Vec::new(), out }
    }
}

impl<W: io::Write> pretty::Render for RenderTermcolor<W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write(s.as_bytes())
    }

    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    fn fail_doc(&self) -> Self::Error {
        io::Error::other("Document failed to render")
    }
}

impl<W: WriteColor> pretty::RenderAnnotated<'_, Anno> for RenderTermcolor<W> {
    fn push_annotation(&mut self, anno: &Anno) -> io::Result<()> {
        let spec = anno.color_spec();
        self.out.set_color(&spec)?;
        self.colors.push(spec);
        Ok(())
    }

    fn pop_annotation(&mut self) -> io::Result<()> {
        self.colors.pop();
        match self.colors.last() {
            Some(outer) => self.out.set_color(outer),
            None => self.out.reset(),
        }
    }
}

impl Anno {
    fn color_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Anno::Keyword => spec.set_fg(Some(Color::Magenta)).set_bold(true),
            Anno::Builtin => spec.set_fg(Some(Color::Blue)),
            Anno::Literal => spec.set_fg(Some(Color::Yellow)),
            Anno::Tag => spec.set_fg(Some(Color::Green)),
        };
        spec
    }
}

#[cfg(test)]
mod tests {
    use pretty::DocAllocator;

    use super::*;
    use crate::termcolor::Buffer;

    #[test]
    fn nested_annotations_restore_outer_color() {
        let alloc = Alloc::new();
        let doc = alloc
            .text("a")
            .append(alloc.text("b").annotate(Anno::Literal))
            .annotate(Anno::Keyword)
            .append(alloc.text("c"));
        let mut buf = Buffer::ansi();
        doc.1.render_raw(80, &mut RenderTermcolor::new(&mut buf)).unwrap();
        let out = String::from_utf8_lossy(buf.as_slice()).into_owned();
        assert!(out.contains("\u{1b}[33mb"));
        assert!(out.ends_with("\u{1b}[0mc"));
    }

    #[test]
    fn no_color_buffer_prints_plain_text() {
        let alloc = Alloc::new();
        let doc = alloc.text("fn").annotate(Anno::Keyword);
        let mut buf = Buffer::no_color();
        doc.1.render_raw(80, &mut RenderTermcolor::new(&mut buf)).unwrap();
        assert_eq!(buf.as_slice(), b"fn");
    }
}
