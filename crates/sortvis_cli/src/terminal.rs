//! Terminal renderers
//!
//! [`BarRenderer`] draws items as vertical bars and needs a real terminal.
//! [`PlainRenderer`] prints one line per rendered state and works with any
//! writer.

use sortvis_core::{CoreError, ItemId, Result, SortableItem};
use sortvis_recorder::{Renderer, Transition};
use std::io::{self, IsTerminal, Stdout, Write};
use std::time::Duration;

const BAR: char = '█';
const COMPARED: char = '▓';
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Default bar height in rows
pub const DEFAULT_HEIGHT: usize = 16;

/// Draws the items as a bar chart, marking compared items
pub struct BarRenderer<W> {
    out: W,
    height: usize,
    state: Vec<SortableItem>,
    compared: Option<(ItemId, ItemId)>,
}

impl BarRenderer<Stdout> {
    /// Attach to standard output.
    ///
    /// Fails with [`CoreError::InvalidHostElement`] unless stdout is a
    /// terminal.
    pub fn attach(height: usize) -> Result<Self> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(CoreError::InvalidHostElement(
                "standard output is not a terminal".to_string(),
            ));
        }
        Ok(Self::new(stdout, height))
    }
}

impl<W: Write> BarRenderer<W> {
    pub fn new(out: W, height: usize) -> Self {
        Self {
            out,
            height: height.max(1),
            state: Vec::new(),
            compared: None,
        }
    }

    fn is_compared(&self, item: &SortableItem) -> bool {
        self.compared
            .is_some_and(|(a, b)| item.id == a || item.id == b)
    }

    /// Build the chart for the current state, top row first.
    fn frame(&self) -> String {
        let max = self
            .state
            .iter()
            .map(|item| item.value)
            .max()
            .unwrap_or(0)
            .max(1) as usize;

        let mut frame = String::new();
        for row in (1..=self.height).rev() {
            for item in &self.state {
                let bar = (item.value as usize * self.height).div_ceil(max);
                frame.push(if bar < row {
                    ' '
                } else if self.is_compared(item) {
                    COMPARED
                } else {
                    BAR
                });
            }
            frame.push('\n');
        }
        frame
    }

    fn draw(&mut self) {
        let frame = self.frame();
        let result = write!(self.out, "{CLEAR_SCREEN}{frame}").and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::warn!("Failed to draw frame: {}", err);
        }
    }
}

impl<W: Write + Send + 'static> Renderer for BarRenderer<W> {
    fn render(&mut self, state: &[SortableItem]) {
        self.state = state.to_vec();
        self.draw();
    }

    fn highlight_comparison(&mut self, a: &SortableItem, b: &SortableItem, _fill: Duration) {
        self.compared = Some((a.id, b.id));
        self.draw();
    }

    fn clear_comparison(&mut self) {
        if self.compared.take().is_some() {
            self.draw();
        }
    }
}

/// Prints item values, one line per rendered state
pub struct PlainRenderer<W> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to print: {}", err);
        }
    }
}

impl<W: Write + Send + 'static> Renderer for PlainRenderer<W> {
    fn render(&mut self, state: &[SortableItem]) {
        let values: Vec<String> = state.iter().map(|item| item.value.to_string()).collect();
        self.line(format_args!("{}", values.join(" ")));
    }

    fn begin_transition(&mut self, transition: &Transition) {
        self.line(format_args!(
            "  moving {} item(s) over {:?}",
            transition.moved,
            transition.total()
        ));
    }

    fn highlight_comparison(&mut self, a: &SortableItem, b: &SortableItem, _fill: Duration) {
        self.line(format_args!("  compare {} {}", a.value, b.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[u32]) -> Vec<SortableItem> {
        values.iter().copied().map(SortableItem::new).collect()
    }

    #[test]
    fn test_bar_frame() {
        let mut renderer = BarRenderer::new(Vec::new(), 3);
        renderer.render(&items(&[3, 1, 2]));

        assert_eq!(renderer.frame(), "█  \n█ █\n███\n");

        let output = String::from_utf8(renderer.out.clone()).unwrap();
        assert!(output.starts_with(CLEAR_SCREEN));
        assert!(output.ends_with("███\n"));
    }

    #[test]
    fn test_bar_marks_compared_items() {
        let state = items(&[2, 1]);
        let mut renderer = BarRenderer::new(Vec::new(), 2);
        renderer.render(&state);

        renderer.highlight_comparison(&state[0], &state[1], Duration::ZERO);
        assert_eq!(renderer.frame(), "▓ \n▓▓\n");

        renderer.clear_comparison();
        assert_eq!(renderer.frame(), "█ \n██\n");
    }

    #[test]
    fn test_bar_empty_state() {
        let mut renderer = BarRenderer::new(Vec::new(), 0);
        renderer.render(&[]);
        assert_eq!(renderer.frame(), "\n");
    }

    #[test]
    fn test_plain_output() {
        let state = items(&[3, 1, 2]);
        let mut renderer = PlainRenderer::new(Vec::new());

        renderer.render(&state);
        renderer.highlight_comparison(&state[1], &state[0], Duration::ZERO);
        renderer.clear_comparison();

        let output = String::from_utf8(renderer.out).unwrap();
        assert_eq!(output, "3 1 2\n  compare 1 3\n");
    }
}
