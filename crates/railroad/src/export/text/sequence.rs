//! Text blocks for the sequential containers.

use railroad_core::{
    draw::{Ports, TextBlock},
    geometry::Alignment,
};

use super::{glyphs, render_node, row, rows, spaced};
use crate::layout::Layout;

pub(super) fn sequence(layout: &Layout<'_>) -> TextBlock {
    let separator = glyphs(layout).separator.to_string();
    layout
        .children()
        .iter()
        .fold(TextBlock::line(""), |diagram, item| {
            diagram.append_right(&spaced(item), &separator)
        })
}

/// Stacks the rows and joins each row's exit to the next row's entry with a
/// line running back to the left edge.
pub(super) fn stack(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let line = glyphs.line.to_string();
    let vertical = glyphs.line_vertical;
    let alignment = layout.params().internal_alignment();

    let items: Vec<TextBlock> = layout.children().iter().map(render_node).collect();
    let max_width = items.iter().map(TextBlock::width).max().unwrap_or(0);
    let separator = TextBlock::line(row(&line, max_width));
    let last = items.len().saturating_sub(1);

    let mut left_lines = Vec::new();
    let mut right_lines = Vec::new();
    let mut diagram: Option<TextBlock> = None;
    for (i, item) in items.iter().enumerate() {
        let below_entry = item.height().saturating_sub(item.entry() + 1);
        if i == 0 {
            left_lines.push(row(&line, 2));
        } else {
            left_lines.push(format!("{}{line}", glyphs.corner_top_left));
            left_lines.extend(rows(&format!("{vertical} "), item.entry()));
            left_lines.push(format!("{}{line}", glyphs.corner_bot_left));
            right_lines.extend(rows("  ", item.exit()));
        }
        left_lines.extend(rows("  ", below_entry));

        if i < last {
            right_lines.push(format!("{line}{}", glyphs.corner_top_right));
            right_lines.extend(rows(
                &format!(" {vertical}"),
                item.height().saturating_sub(item.exit() + 1),
            ));
            right_lines.push(format!("{line}{}", glyphs.corner_bot_right));
        } else {
            right_lines.push(row(&line, 2));
        }

        let (left_pad, right_pad) = alignment.cell_gaps(max_width, item.width());
        let item = item.expand(left_pad, right_pad, 0, 0, glyphs.line);
        diagram = Some(match diagram {
            None => item,
            Some(diagram) => diagram
                .append_below(&separator, &[], Ports::Upper)
                .append_below(&item, &[], Ports::Upper),
        });
    }

    let diagram = diagram.unwrap_or_default();
    let right_exit = right_lines.len().saturating_sub(1);
    TextBlock::new(0, 0, left_lines)
        .append_right(&diagram, "")
        .append_right(&TextBlock::new(0, right_exit, right_lines), "")
}

/// Draws the items in a row with a skip-over line above all but the last
/// and a skip-under line below all but the first.
pub(super) fn optional_sequence(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let line = glyphs.line.to_string();
    let vertical = glyphs.line_vertical;

    let items: Vec<TextBlock> = layout.children().iter().map(render_node).collect();
    let last = items.len().saturating_sub(1);
    let diagram_entry = items.iter().map(TextBlock::entry).max().unwrap_or(0);
    let skip_over_height = items[..last]
        .iter()
        .map(TextBlock::entry)
        .max()
        .unwrap_or(0);
    let top_to_skip_over = diagram_entry - skip_over_height;

    let mut lines = rows("  ", top_to_skip_over);
    lines.push(format!("{}{line}", glyphs.round_corner_top_left));
    lines.extend(rows(&format!("{vertical} "), skip_over_height));
    lines.push(format!("{}{line}", glyphs.round_corner_bot_right));
    let start = lines.len() - 1;
    let mut diagram = TextBlock::new(start, start, lines);

    for (i, item) in items.iter().enumerate() {
        let below_entry = item.height().saturating_sub(item.entry() + 1);
        if i > 0 {
            let exit = diagram.exit();
            let mut lines = rows("  ", top_to_skip_over);
            lines.push(row(&line, 2));
            lines.extend(rows("  ", exit.saturating_sub(top_to_skip_over + 1)));
            lines.push(format!("{line}{}", glyphs.round_corner_top_right));
            lines.extend(rows(&format!(" {vertical}"), below_entry));
            lines.push(format!(" {}", glyphs.round_corner_bot_left));
            diagram = diagram.append_right(&TextBlock::new(exit, exit, lines), "");

            let exit = diagram.exit();
            let onward = if i < last { glyphs.line } else { ' ' };
            let mut lines = rows("   ", top_to_skip_over);
            lines.push(format!("{line}{}{onward}", glyphs.round_corner_top_right));
            lines.extend(rows(
                &format!(" {vertical} "),
                exit.saturating_sub(top_to_skip_over + 1),
            ));
            lines.push(format!("{line}{}{line}", glyphs.round_corner_bot_left));
            lines.extend(rows("   ", below_entry));
            lines.push(row(&line, 3));
            diagram = diagram.append_right(&TextBlock::new(exit, exit, lines), "");
        }

        let mut part = TextBlock::empty();
        if i < last {
            let mut lines = vec![row(&line, item.width())];
            lines.extend(rows(
                &" ".repeat(item.width()),
                skip_over_height - item.entry(),
            ));
            part = part.append_below(&TextBlock::new(0, 0, lines), &[], Ports::Upper);
        }
        part = part.append_below(item, &[], Ports::Lower);
        if i > 0 {
            let skip_under = TextBlock::line(row(&line, item.width()));
            part = part.append_below(&skip_under, &[], Ports::Upper);
        }
        diagram = diagram.append_right(&part, "");

        if i > 0 {
            let exit = diagram.exit();
            let over = if i < last { line.as_str() } else { " " };
            let mut lines = rows("  ", top_to_skip_over);
            lines.push(row(over, 2));
            lines.extend(rows("  ", exit.saturating_sub(top_to_skip_over + 1)));
            lines.push(format!("{line}{}", glyphs.round_corner_top_left));
            lines.extend(rows(
                &format!(" {vertical}"),
                part.height().saturating_sub(part.exit() + 2),
            ));
            lines.push(format!("{line}{}", glyphs.round_corner_bot_right));
            diagram = diagram.append_right(&TextBlock::new(exit, exit, lines), "");
        }
    }
    diagram
}

/// Stacks the two items around a diagonal crossover, each looping back into
/// the other.
pub(super) fn alternating_sequence(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let line = glyphs.line.to_string();
    let vertical = glyphs.line_vertical;
    let alignment = layout.params().internal_alignment();
    let [first, second] = layout.children() else {
        return TextBlock::empty();
    };
    let (first, second) = (render_node(first), render_node(second));

    let max_width = first.width().max(second.width());
    let (left_width, right_width) = alignment.cell_gaps(max_width, 0);
    let centered = |item: &TextBlock| {
        let (mut left, mut right) = alignment.cell_gaps(item.width(), 0);
        match alignment {
            Alignment::Left => right = right.saturating_sub(1),
            Alignment::Right => left = left.saturating_sub(2),
            Alignment::Center => {}
        }
        item.expand(
            left_width - left,
            right_width - right,
            0,
            0,
            glyphs.line,
        )
    };

    let top = centered(&first);
    let mut left_lines = rows("  ", top.entry());
    left_lines.push(format!("{}{line}", glyphs.round_corner_top_left));
    let below_entry = top.height().saturating_sub(top.entry() + 1);
    left_lines.extend(rows(&format!("{vertical} "), below_entry));
    left_lines.push(format!("{}{line}", glyphs.round_corner_bot_left));
    let mut right_lines = rows("  ", top.entry());
    right_lines.push(format!("{line}{}", glyphs.round_corner_top_right));
    right_lines.extend(rows(&format!(" {vertical}"), below_entry));
    right_lines.push(format!("{line}{}", glyphs.round_corner_bot_right));

    let outer_left = left_width.saturating_sub(1);
    let outer_right = right_width.saturating_sub(2);
    let crossover = [
        format!(
            "{}{} {}{}",
            row(&line, outer_left),
            glyphs.round_corner_top_right,
            glyphs.round_corner_top_left,
            row(&line, outer_right)
        ),
        format!(
            "{} {} {}",
            " ".repeat(outer_left),
            glyphs.cross_diag,
            " ".repeat(outer_right)
        ),
        format!(
            "{}{} {}{}",
            row(&line, outer_left),
            glyphs.round_corner_bot_right,
            glyphs.round_corner_bot_left,
            row(&line, outer_right)
        ),
    ];
    left_lines.push("  ".to_string());
    right_lines.push("  ".to_string());

    let bottom = centered(&second);
    left_lines.push(format!("{}{line}", glyphs.round_corner_top_left));
    left_lines.extend(rows(&format!("{vertical} "), bottom.entry()));
    left_lines.push(format!("{}{line}", glyphs.round_corner_bot_left));
    right_lines.push(format!("{line}{}", glyphs.round_corner_top_right));
    right_lines.extend(rows(&format!(" {vertical}"), bottom.entry()));
    right_lines.push(format!("{line}{}", glyphs.round_corner_bot_right));

    let middle = first.height() + crossover.len() / 2;
    let diagram = top
        .append_below(&bottom, &crossover, Ports::Lower)
        .with_ports(middle, middle);
    let diagram = TextBlock::new(middle, middle, left_lines)
        .append_right(&diagram, "")
        .append_right(&TextBlock::new(middle, middle, right_lines), "");

    let entry_cap = TextBlock::new(
        1,
        1,
        vec![
            glyphs.round_corner_top_left.to_string(),
            glyphs.tee_left.to_string(),
            glyphs.round_corner_bot_left.to_string(),
        ],
    );
    let exit_cap = TextBlock::new(
        1,
        1,
        vec![
            glyphs.round_corner_top_right.to_string(),
            glyphs.tee_right.to_string(),
            glyphs.round_corner_bot_right.to_string(),
        ],
    );
    entry_cap.append_right(&diagram, "").append_right(&exit_cap, "")
}

#[cfg(test)]
mod tests {
    use crate::{Node, config::Parameters, export::text::render_node, layout::layout};

    fn render(node: &Node) -> railroad_core::draw::TextBlock {
        render_node(&layout(node, &Parameters::default()))
    }

    #[test]
    fn test_sequence_joins_with_rail() {
        let node = Node::sequence(vec![Node::terminal("a"), Node::terminal("b")]).unwrap();
        let block = render(&node);
        assert_eq!(block.lines()[1], "───│ a │─────│ b │──");
        assert_eq!(block.entry(), 1);
        assert_eq!(block.exit(), 1);
    }

    #[test]
    fn test_stack_snakes_between_rows() {
        let node = Node::stack(vec![Node::terminal("a"), Node::terminal("b")]).unwrap();
        let block = render(&node);
        let lines = block.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "───│ a │──┐");
        assert_eq!(lines[3], "┌────────┘");
        assert_eq!(lines[5], "└──│ b │───");
        assert_eq!(block.entry(), 1);
        assert_eq!(block.exit(), 5);
    }

    #[test]
    fn test_optional_sequence_has_skip_lines() {
        let node =
            Node::optional_sequence(vec![Node::terminal("a"), Node::terminal("b")]).unwrap();
        let block = render(&node);
        let text = block.lines().join("\n");
        assert!(text.contains("│ a │"));
        assert!(text.contains("│ b │"));
        assert!(text.contains('╭'));
        assert!(block.lines().iter().all(|line| line.chars().count() == block.width()));
    }

    #[test]
    fn test_alternating_sequence_crosses() {
        let node =
            Node::alternating_sequence(vec![Node::terminal("a"), Node::terminal("b")]).unwrap();
        let block = render(&node);
        assert_eq!(block.height(), 9);
        assert_eq!(block.entry(), 4);
        assert_eq!(block.exit(), 4);
        assert!(block.lines()[4].contains('╳'));
    }
}
