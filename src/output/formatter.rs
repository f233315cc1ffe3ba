//! Colorized tree formatter
//!
//! `TreeFormatter` writes each node as soon as the renderer produces it. It is
//! generic over `WriteColor` so the same code drives a terminal
//! (`StandardStream`) or an in-memory buffer.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeOutput;

use super::config::OutputConfig;
use super::utils::{PERMISSION_DENIED, connector};

pub struct TreeFormatter<W> {
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `prefix` and `connector` plain, then `text` in `spec`.
    fn write_line(
        &mut self,
        prefix: &str,
        connector: &str,
        text: &str,
        spec: Option<&ColorSpec>,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector)?;
        if let Some(spec) = spec {
            self.out.set_color(spec)?;
            write!(self.out, "{}", text)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", text)?;
        }
        writeln!(self.out)
    }
}

fn root_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    spec
}

fn dir_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

fn error_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn root(&mut self, name: &str) -> io::Result<()> {
        self.write_line("", "", &format!("{}/", name), Some(&root_style()))
    }

    fn directory(&mut self, name: &str, prefix: &str, is_last: bool) -> io::Result<()> {
        self.write_line(
            prefix,
            connector(is_last),
            &format!("{}/", name),
            Some(&dir_style()),
        )
    }

    fn file(&mut self, name: &str, prefix: &str, is_last: bool) -> io::Result<()> {
        self.write_line(prefix, connector(is_last), name, None)
    }

    fn permission_denied(&mut self, prefix: &str) -> io::Result<()> {
        self.write_line(prefix, connector(true), PERMISSION_DENIED, Some(&error_style()))
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
