//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are rewritten. Encoding goes into a byte buffer first so a frame reaches
//! the terminal in one write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            out: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller can overwrite, so two
    /// buffers cycle without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.prev.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.out)?;
                std::mem::swap(&mut prev, fb);
                self.prev = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.out)?;
                let mut spare = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                spare.resize(fb.width(), fb.height());
                std::mem::swap(&mut spare, fb);
                self.prev = Some(spare);
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the style last emitted so unchanged styles are not re-sent.
#[derive(Default)]
struct StyleWriter {
    current: Option<CellStyle>,
}

impl StyleWriter {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(to_color(style.fg)))?
            .queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut styles = StyleWriter::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_cells(fb, 0, y, fb.width(), &mut styles, out)?;
    }
    finish(out)
}

/// Encode only the cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut styles = StyleWriter::default();
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        write_cells(next, run.x, run.y, run.len, &mut styles, out)?;
    }
    finish(out)
}

fn write_cells(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    styles: &mut StyleWriter,
    out: &mut Vec<u8>,
) -> Result<()> {
    for cx in x..x + len {
        let cell = fb.get(cx, y).unwrap_or_default();
        styles.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal span of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Changed runs in row-major order. Adjacent changed cells merge into one run.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some(Run {
                x: start,
                y,
                len: x - start,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(5, 1, Cell { ch: 'Y', style });

        let runs: Vec<Run> = changed_runs(&a, &b).collect();
        assert_eq!(
            runs,
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!out.contains(&b' '));
        assert_eq!(changed_runs(&a, &a).count(), 0);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_str(0, 0, "WA", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('W'));
        assert!(text.contains('A'));
    }
}
