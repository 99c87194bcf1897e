//! Fixed-width layout of a labelled percentage bar.
//!
//! A rendered row always spans exactly the terminal width:
//!
//! ```text
//! Building [============            ]  50%
//! └label──┘└bar──────────────────────────┘
//! ```
//!
//! The label region ends in a separator space. Whatever does not fit in
//! `columns - min_bar_width` is cut off. The bar is `[`, the interior fill,
//! `]` and a five column percentage field.
//!
//! # Examples
//!
//! ```rust
//! use ttybar::layout::{compose_line, MIN_BAR_WIDTH};
//!
//! let line = compose_line(Some("Building"), 50, 40, MIN_BAR_WIDTH).unwrap();
//! assert_eq!(line, b"Building [============            ]  50%");
//! ```

/// Narrowest terminal a bar is drawn on.
pub const MIN_BAR_WIDTH: u16 = 10;

/// Smallest `min_bar_width` that still leaves room for the braces and the
/// percentage field.
pub const MIN_SUPPORTED_BAR_WIDTH: u16 = (BRACES_WIDTH + PERCENT_WIDTH) as u16;

const BRACES_WIDTH: usize = 2;
const PERCENT_WIDTH: usize = 5;

const EQUALS: &[u8] = b"====================";
const SPACES: &[u8] = b"                    ";

/// Column budget of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Total width of the row.
    pub columns: usize,
    /// Width of the label region, separator space included.
    pub label_width: usize,
    /// Number of label characters shown.
    pub label_chars: usize,
    /// Width between the braces.
    pub interior_width: usize,
    /// Number of filled cells in the interior.
    pub filled: usize,
    /// Trailing spaces after the percentage field.
    pub padding: usize,
}

impl BarLayout {
    /// Lay out a row for a label of `text_chars` characters.
    ///
    /// Returns `None` when `columns` is narrower than `min_bar_width`.
    /// `min_bar_width` is raised to [`MIN_SUPPORTED_BAR_WIDTH`] if smaller.
    /// `percentage` is expected in `0..=100`; larger values draw a full bar.
    pub fn compute(
        columns: u16,
        text_chars: usize,
        percentage: u32,
        min_bar_width: u16,
    ) -> Option<Self> {
        let min_bar_width = min_bar_width.max(MIN_SUPPORTED_BAR_WIDTH);
        if columns < min_bar_width {
            return None;
        }

        let columns = usize::from(columns);
        let label_budget = columns - usize::from(min_bar_width);
        let label_width = if text_chars == 0 {
            0
        } else {
            (text_chars + 1).min(label_budget)
        };
        let label_chars = label_width.saturating_sub(1);

        let bar_width = columns - label_width;
        let interior_width = bar_width.saturating_sub(BRACES_WIDTH + PERCENT_WIDTH);
        let filled = interior_width * percentage.min(100) as usize / 100;
        let padding =
            columns.saturating_sub(label_width + BRACES_WIDTH + interior_width + PERCENT_WIDTH);

        Some(Self {
            columns,
            label_width,
            label_chars,
            interior_width,
            filled,
            padding,
        })
    }

    /// Width of the bar region: braces, interior and percentage field.
    pub fn bar_width(&self) -> usize {
        BRACES_WIDTH + self.interior_width + PERCENT_WIDTH
    }

    /// Number of empty cells in the interior.
    pub fn empty(&self) -> usize {
        self.interior_width - self.filled
    }
}

/// Append `n` bytes of `padbuf`'s repeating content to `out`, whole copies of
/// the buffer first, then the remainder.
pub fn write_pad(out: &mut Vec<u8>, padbuf: &[u8], n: usize) {
    if padbuf.is_empty() {
        return;
    }
    let (whole, rest) = (n / padbuf.len(), n % padbuf.len());
    for _ in 0..whole {
        out.extend_from_slice(padbuf);
    }
    out.extend_from_slice(&padbuf[..rest]);
}

/// Render the full row for `text` at `percentage` on a `columns` wide terminal.
///
/// Empty text is the same as no text. The returned bytes cover the row edge
/// to edge and carry no cursor control. `None` on terminals narrower than
/// `min_bar_width`.
pub fn compose_line(
    text: Option<&str>,
    percentage: u32,
    columns: u16,
    min_bar_width: u16,
) -> Option<Vec<u8>> {
    let text = text.unwrap_or_default();
    let layout = BarLayout::compute(columns, text.chars().count(), percentage, min_bar_width)?;

    let mut line = Vec::with_capacity(layout.columns);
    if layout.label_width > 0 {
        line.extend_from_slice(char_prefix(text, layout.label_chars).as_bytes());
        line.push(b' ');
    }

    line.push(b'[');
    write_pad(&mut line, EQUALS, layout.filled);
    write_pad(&mut line, SPACES, layout.empty());
    line.push(b']');
    line.extend_from_slice(format!(" {:>3}%", percentage.min(100)).as_bytes());

    write_pad(&mut line, SPACES, layout.padding);
    Some(line)
}

/// The first `n` characters of `text`, cut on a character boundary.
fn char_prefix(text: &str, n: usize) -> &str {
    let end = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    &text[..end]
}
