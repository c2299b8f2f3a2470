//! Rectangular character grids with an entry row and an exit row.
//!
//! A [`TextBlock`] is the text-mode counterpart of a laid-out node: a list of
//! lines of equal character width, plus the index of the line the rail enters
//! on and the index of the line it leaves on. Blocks are immutable; every
//! operation returns a new block.

use super::glyphs::Glyphs;

/// Selects which block supplies the entry and exit rows after
/// [`TextBlock::append_below`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ports {
    /// Keep the entry and exit rows of the upper block.
    Upper,
    /// Take the entry and exit rows of the appended lower block.
    Lower,
}

/// Box style drawn around a label or block by [`TextBlock::framed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Rect,
    RoundRect,
    AngleRect,
}

/// Content placed inside a frame.
#[derive(Debug, Clone)]
pub enum Framed<'a> {
    /// A single line of text, drawn with plain sides.
    Text(&'a str),
    /// A composed block; its rails cross the frame on the entry and exit rows.
    Block(TextBlock),
}

/// A rectangular grid of characters with rail attachment rows.
///
/// # Examples
///
/// ```
/// # use railroad_core::draw::TextBlock;
/// let left = TextBlock::line("ab");
/// let right = TextBlock::line("cd");
/// let joined = left.append_right(&right, "-");
/// assert_eq!(joined.lines(), ["ab-cd"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    entry: usize,
    exit: usize,
    width: usize,
    lines: Vec<String>,
}

impl TextBlock {
    /// Creates a block from rows of equal character width.
    pub fn new(entry: usize, exit: usize, lines: Vec<String>) -> Self {
        let width = lines.first().map_or(0, |line| line.chars().count());
        debug_assert!(
            lines.iter().all(|line| line.chars().count() == width),
            "text block rows must have equal width: {lines:?}"
        );
        Self {
            entry,
            exit,
            width,
            lines,
        }
    }

    /// Creates a block without rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a one-row block entered and left on that row.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new(0, 0, vec![text.into()])
    }

    /// Returns the row the rail enters on.
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Returns the row the rail leaves on.
    pub fn exit(&self) -> usize {
        self.exit
    }

    /// Returns the width in character cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Returns the rows of the block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the block, returning its rows.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the same grid with new entry and exit rows.
    pub fn with_ports(mut self, entry: usize, exit: usize) -> Self {
        self.entry = entry;
        self.exit = exit;
        self
    }

    /// Stacks `between` rows and then `item` below this block.
    ///
    /// Both blocks are centered within the wider of the two.
    pub fn append_below(&self, item: &TextBlock, between: &[String], ports: Ports) -> Self {
        let new_width = between
            .iter()
            .map(|line| line.chars().count())
            .fold(self.width.max(item.width), usize::max);

        let mut lines = self.center(new_width).lines;
        lines.extend(between.iter().map(|line| pad_right(line, new_width, ' ')));
        lines.extend(item.center(new_width).lines);

        let (entry, exit) = match ports {
            Ports::Upper => (self.entry, self.exit),
            Ports::Lower => {
                let offset = self.height() + between.len();
                (offset + item.entry, offset + item.exit)
            }
        };
        Self::new(entry, exit, lines)
    }

    /// Places `item` to the right, joining this block's exit row to the
    /// item's entry row with `between`.
    ///
    /// The shorter side is padded with blank rows so the two rows line up.
    pub fn append_right(&self, item: &TextBlock, between: &str) -> Self {
        let join_line = self.exit.max(item.entry);
        let below =
            (self.height().saturating_sub(self.exit)).max(item.height().saturating_sub(item.entry));
        let new_height = below + join_line;

        let left_top = join_line - self.exit;
        let left_bottom = new_height.saturating_sub(self.height() + left_top);
        let right_top = join_line - item.entry;
        let right_bottom = new_height.saturating_sub(item.height() + right_top);
        let left = self.pad_rows(left_top, left_bottom);
        let right = item.pad_rows(right_top, right_bottom);

        let blank = " ".repeat(between.chars().count());
        let lines = left
            .lines
            .iter()
            .zip(&right.lines)
            .enumerate()
            .map(|(i, (l, r))| {
                let sep = if i == join_line { between } else { &blank };
                format!("{l}{sep}{r}")
            })
            .collect();
        Self::new(self.entry + left_top, item.exit + right_top, lines)
    }

    /// Centers the block within `width` cells, padding with spaces.
    ///
    /// Odd padding puts the extra cell on the right. Widths smaller than the
    /// block leave it unchanged.
    pub fn center(&self, width: usize) -> Self {
        if width <= self.width {
            return self.clone();
        }
        let total = width - self.width;
        let left = " ".repeat(total / 2);
        let right = " ".repeat(total - total / 2);
        let lines = self
            .lines
            .iter()
            .map(|line| format!("{left}{line}{right}"))
            .collect();
        Self::new(self.entry, self.exit, lines)
    }

    /// Grows the block on each side.
    ///
    /// Horizontal growth extends the entry row on the left and the exit row on
    /// the right with `line`; every other new cell is blank.
    pub fn expand(&self, left: usize, right: usize, top: usize, bottom: usize, line: char) -> Self {
        if left + right + top + bottom == 0 {
            return self.clone();
        }
        let new_width = self.width + left + right;
        let blank_row = " ".repeat(new_width);

        let mut lines = Vec::with_capacity(self.height() + top + bottom);
        lines.extend(std::iter::repeat_n(blank_row.clone(), top));
        for (i, row) in self.lines.iter().enumerate() {
            let left_fill = if i == self.entry { line } else { ' ' };
            let right_fill = if i == self.exit { line } else { ' ' };
            lines.push(format!(
                "{}{row}{}",
                fill(left_fill, left),
                fill(right_fill, right)
            ));
        }
        lines.extend(std::iter::repeat_n(blank_row, bottom));
        Self::new(self.entry + top, self.exit + top, lines)
    }

    /// Draws a box around `content`.
    ///
    /// The box is two rows taller than the content. Rails enter on the
    /// content's entry row and leave on its exit row, extended by one `line`
    /// cell outside the frame.
    pub fn framed(content: Framed<'_>, kind: FrameKind, dashed: bool, glyphs: &Glyphs) -> Self {
        let frame = match kind {
            FrameKind::Rect => glyphs.rect,
            FrameKind::RoundRect => glyphs.round_rect,
            FrameKind::AngleRect => glyphs.angle_rect,
        };
        let (top, bot, side_left, side_right) = if dashed {
            (
                frame.top_dashed,
                frame.bot_dashed,
                frame.left_dashed,
                frame.right_dashed,
            )
        } else {
            (frame.top, frame.bot, frame.left, frame.right)
        };

        let (top_left, ctr_left, bot_left, top_right, ctr_right, bot_right) =
            if kind == FrameKind::AngleRect {
                (
                    format!(" {}", frame.top_left),
                    format!("{side_left} "),
                    format!(" {}", frame.bot_left),
                    format!("{} ", frame.top_right),
                    format!(" {side_right}"),
                    format!("{} ", frame.bot_right),
                )
            } else {
                (
                    frame.top_left.to_string(),
                    side_left.to_string(),
                    frame.bot_left.to_string(),
                    frame.top_right.to_string(),
                    side_right.to_string(),
                    frame.bot_right.to_string(),
                )
            };

        let (inner, formatted) = match content {
            Framed::Text(text) => (TextBlock::line(text), false),
            Framed::Block(block) => (block, true),
        };

        let mut lines = Vec::with_capacity(inner.height() + 2);
        lines.push(fill(top, inner.width + 2));
        if formatted {
            lines.extend(inner.expand(1, 1, 0, 0, glyphs.line).lines);
        } else {
            lines.extend(inner.lines.iter().map(|line| format!(" {line} ")));
        }
        lines.push(fill(bot, inner.width + 2));
        let entry = inner.entry + 1;
        let exit = inner.exit + 1;
        let last = lines.len() - 1;

        let left_width = max_chars(&[&top_left, &ctr_left, &bot_left]);
        let mut lefts = vec![pad_right(&ctr_left, left_width, ' '); lines.len()];
        lefts[0] = pad_right(&top_left, left_width, top);
        lefts[last] = pad_right(&bot_left, left_width, bot);

        let right_width = max_chars(&[&top_right, &ctr_right, &bot_right]);
        let mut rights = vec![pad_left(&ctr_right, right_width, ' '); lines.len()];
        rights[0] = pad_left(&top_right, right_width, top);
        rights[last] = pad_left(&bot_right, right_width, bot);

        if formatted {
            lefts[entry] = pad_right(&glyphs.cross.to_string(), left_width, ' ');
            rights[exit] = pad_left(&glyphs.cross.to_string(), right_width, ' ');
        }

        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let outer_left = if i == entry { glyphs.line } else { ' ' };
                let outer_right = if i == exit { glyphs.line } else { ' ' };
                format!("{outer_left}{}{line}{}{outer_right}", lefts[i], rights[i])
            })
            .collect();
        Self::new(entry, exit, lines)
    }

    /// Adds blank rows above and below without touching the columns.
    fn pad_rows(&self, top: usize, bottom: usize) -> Self {
        if top + bottom == 0 {
            return self.clone();
        }
        let blank_row = " ".repeat(self.width);
        let mut lines = Vec::with_capacity(self.height() + top + bottom);
        lines.extend(std::iter::repeat_n(blank_row.clone(), top));
        lines.extend(self.lines.iter().cloned());
        lines.extend(std::iter::repeat_n(blank_row, bottom));
        Self::new(self.entry + top, self.exit + top, lines)
    }
}

/// Returns `count` copies of `c`.
pub(crate) fn fill(c: char, count: usize) -> String {
    std::iter::repeat_n(c, count).collect()
}

fn pad_right(text: &str, width: usize, pad: char) -> String {
    let len = text.chars().count();
    format!("{text}{}", fill(pad, width.saturating_sub(len)))
}

fn pad_left(text: &str, width: usize, pad: char) -> String {
    let len = text.chars().count();
    format!("{}{text}", fill(pad, width.saturating_sub(len)))
}

fn max_chars(parts: &[&str]) -> usize {
    parts
        .iter()
        .map(|part| part.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(block: &TextBlock) -> Vec<&str> {
        block.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_append_right_aligns_exit_with_entry() {
        let left = TextBlock::new(0, 1, vec!["a ".into(), "bb".into()]);
        let right = TextBlock::new(0, 0, vec!["c".into()]);

        let joined = left.append_right(&right, "-");
        assert_eq!(rows(&joined), ["a   ", "bb-c"]);
        assert_eq!(joined.entry(), 0);
        assert_eq!(joined.exit(), 1);
    }

    #[test]
    fn test_append_right_pads_shorter_side() {
        let left = TextBlock::line("x");
        let right = TextBlock::new(1, 1, vec!["top".into(), "mid".into(), "bot".into()]);

        let joined = left.append_right(&right, "");
        assert_eq!(rows(&joined), [" top", "xmid", " bot"]);
        assert_eq!(joined.entry(), 1);
        assert_eq!(joined.exit(), 1);
    }

    #[test]
    fn test_append_below_ports() {
        let upper = TextBlock::line("ab");
        let lower = TextBlock::line("wxyz");

        let kept = upper.append_below(&lower, &["--".to_string()], Ports::Upper);
        assert_eq!(rows(&kept), [" ab ", "--  ", "wxyz"]);
        assert_eq!(kept.entry(), 0);

        let moved = upper.append_below(&lower, &[], Ports::Lower);
        assert_eq!(moved.entry(), 1);
        assert_eq!(moved.exit(), 1);
    }

    #[test]
    fn test_center_puts_odd_cell_right() {
        let block = TextBlock::line("ab").center(5);
        assert_eq!(rows(&block), [" ab  "]);
        assert_eq!(TextBlock::line("abc").center(2), TextBlock::line("abc"));
    }

    #[test]
    fn test_expand_extends_rails() {
        let block = TextBlock::new(0, 1, vec!["a".into(), "b".into()]);
        let expanded = block.expand(2, 1, 1, 0, '-');
        assert_eq!(rows(&expanded), ["    ", "--a ", "  b-"]);
        assert_eq!(expanded.entry(), 1);
        assert_eq!(expanded.exit(), 2);
    }

    #[test]
    fn test_framed_text_round_rect() {
        let block = TextBlock::framed(
            Framed::Text("foo"),
            FrameKind::RoundRect,
            false,
            &Glyphs::UNICODE,
        );
        assert_eq!(rows(&block), [" ╭─────╮ ", "─│ foo │─", " ╰─────╯ "]);
        assert_eq!(block.entry(), 1);
        assert_eq!(block.exit(), 1);
    }

    #[test]
    fn test_framed_text_angle_rect_ascii() {
        let block = TextBlock::framed(
            Framed::Text("e"),
            FrameKind::AngleRect,
            false,
            &Glyphs::ASCII,
        );
        assert_eq!(rows(&block), ["  /---\\  ", "-<  e  >-", "  \\---/  "]);
        assert_eq!(block.width(), 9);
    }

    #[test]
    fn test_framed_block_crosses_frame() {
        let inner = TextBlock::line("x");
        let block = TextBlock::framed(
            Framed::Block(inner),
            FrameKind::Rect,
            true,
            &Glyphs::UNICODE,
        );
        assert_eq!(rows(&block), [" ┌┄┄┄┐ ", "─┼─x─┼─", " └┄┄┄┘ "]);
    }
}
