//! Text blocks for loops and groups.

use railroad_core::draw::{FrameKind, Framed, Ports, TextBlock};

use super::{glyphs, render_node, rows};
use crate::layout::Layout;

/// Places the separator under the item and draws the return loop around
/// both.
pub(super) fn one_or_more(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let [item, separator] = layout.children() else {
        return TextBlock::empty();
    };
    let (item, separator) = (render_node(item), render_node(separator));

    let width = item.width().max(separator.width());
    let item = item.expand(0, width - item.width(), 0, 0, glyphs.line);
    let separator = separator.expand(0, width - separator.width(), 0, 0, glyphs.line);
    let body = item.append_below(&separator, &[], Ports::Upper);

    let mut left_lines = vec![format!("{}{}", glyphs.repeat_top_left, glyphs.line)];
    left_lines.extend(rows(
        &format!("{} ", glyphs.repeat_left),
        (item.height() - item.entry() + separator.entry()).saturating_sub(1),
    ));
    left_lines.push(format!("{}{}", glyphs.repeat_bot_left, glyphs.line));

    let mut right_lines = vec![format!("{}{}", glyphs.line, glyphs.repeat_top_right)];
    right_lines.extend(rows(
        &format!(" {}", glyphs.repeat_right),
        (item.height() - item.exit() + separator.exit()).saturating_sub(1),
    ));
    right_lines.push(format!("{}{}", glyphs.line, glyphs.repeat_bot_right));

    TextBlock::new(0, 0, left_lines)
        .append_right(&body, "")
        .append_right(&TextBlock::new(0, 0, right_lines), "")
}

/// Draws a dashed rounded frame around the item, with the label above it.
pub(super) fn group(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let children = layout.children();
    let Some(item) = children.first() else {
        return TextBlock::empty();
    };
    let framed = TextBlock::framed(
        Framed::Block(render_node(item)),
        FrameKind::RoundRect,
        true,
        glyphs,
    );
    match children.get(1) {
        Some(label) => render_node(label)
            .append_below(&framed, &[], Ports::Lower)
            .expand(0, 0, 1, 0, glyphs.line),
        None => framed,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Node, config::Parameters, export::text::render_node, layout::layout};

    fn render(node: &Node) -> railroad_core::draw::TextBlock {
        render_node(&layout(node, &Parameters::default()))
    }

    #[test]
    fn test_one_or_more_loops_under_item() {
        let block = render(&Node::one_or_more(Node::terminal("a"), None));
        assert_eq!(
            block.lines(),
            [
                "   ╭───╮   ",
                "╭──│ a │──╮",
                "│  ╰───╯  │",
                "╰─────────╯",
            ]
        );
        assert_eq!(block.entry(), 1);
        assert_eq!(block.exit(), 1);
    }

    #[test]
    fn test_one_or_more_with_separator() {
        let block = render(&Node::one_or_more(
            Node::terminal("a"),
            Some(Node::terminal(",")),
        ));
        assert_eq!(block.height(), 6);
        assert_eq!(block.lines()[4], "╰──│ , │──╯");
    }

    #[test]
    fn test_group_frame() {
        let block = render(&Node::group(Node::terminal("a"), None));
        assert_eq!(block.lines()[0], " ╭┄┄┄┄┄┄┄┄┄╮ ");
        assert_eq!(block.lines()[2], "─┼──│ a │──┼─");
        assert_eq!(block.lines()[4], " ╰┄┄┄┄┄┄┄┄┄╯ ");
        assert_eq!(block.entry(), 2);
    }

    #[test]
    fn test_group_label_above_frame() {
        let block = render(&Node::labeled_group(Node::terminal("a"), "g"));
        assert_eq!(block.height(), 7);
        assert_eq!(block.lines()[0].trim(), "");
        assert_eq!(block.lines()[1], "      g      ");
        assert_eq!(block.entry(), 4);
        assert_eq!(block.exit(), 4);
    }
}
