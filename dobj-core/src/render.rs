// Human-readable renderer
//
// Writes one line per data object:
//
//   String:     "Hello"  (utf-8)
//   Integer:    16  (32 bits)
//   Float:      3.14  (ieee-754)

use std::fmt;
use std::io::{self, Write};

use crate::config::{RendererConfig, MAX_FLOAT_PRECISION, MAX_LABEL_WIDTH};
use crate::container::ObjectContainer;
use crate::data::{FloatObject, IntegerObject, StringObject};
use crate::error::RenderError;
use crate::visitor::DataObjectVisitor;

/// A visitor that renders every known object type as a line of text.
///
/// Visiting cannot report failure, so the first write error is kept and
/// every later visit does nothing. [`Renderer::finish`] surfaces it.
pub struct Renderer<W: Write> {
    writer: W,
    config: RendererConfig,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, RendererConfig::default())
    }

    pub fn with_config(writer: W, config: RendererConfig) -> Self {
        Self {
            writer,
            config,
            lines: 0,
            error: None,
        }
    }

    /// Number of lines successfully written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush and hand back the writer, or the first error encountered.
    pub fn finish(mut self) -> Result<W, RenderError> {
        if let Some(e) = self.error.take() {
            return Err(RenderError::Io(e));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line(&mut self, label: &str, body: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let width = self.config.label_width.min(MAX_LABEL_WIDTH);
        match writeln!(self.writer, "{:<width$}{}", label, body, width = width) {
            Ok(()) => self.lines += 1,
            Err(e) => self.error = Some(e),
        }
    }

    fn format_float(&self, value: f64) -> String {
        match self.config.float_precision {
            Some(precision) => {
                format!("{:.*}", precision.min(MAX_FLOAT_PRECISION), value)
            }
            None => value.to_string(),
        }
    }
}

impl<W: Write> DataObjectVisitor for Renderer<W> {
    fn visit_string(&mut self, object: &StringObject) {
        self.write_line(
            "String:",
            format_args!("\"{}\"  ({})", object.text(), object.encoding()),
        );
    }

    fn visit_integer(&mut self, object: &IntegerObject) {
        self.write_line(
            "Integer:",
            format_args!("{}  ({} bits)", object.value(), object.width_bits()),
        );
    }

    fn visit_float(&mut self, object: &FloatObject) {
        let value = self.format_float(object.value());
        self.write_line("Float:", format_args!("{}  ({})", value, object.format()));
    }
}

/// Render a whole container into `writer`.
pub fn render_all<W: Write>(
    objects: &ObjectContainer,
    writer: W,
    config: RendererConfig,
) -> Result<W, RenderError> {
    let mut renderer = Renderer::with_config(writer, config);
    objects.accept_all(&mut renderer);
    renderer.finish()
}
