//! Text blocks for the branching containers.

use railroad_core::draw::{FrameKind, Framed, Ports, TextBlock};

use super::{glyphs, render_node, row, rows};
use crate::{layout::Layout, node::ChoiceMode};

/// Stacks the branches with the default one on the through line and joins
/// them with vertical rails on both sides.
pub(super) fn choice(layout: &Layout<'_>, default: usize) -> TextBlock {
    let glyphs = glyphs(layout);
    let alignment = layout.params().internal_alignment();
    let items: Vec<TextBlock> = layout
        .children()
        .iter()
        .map(|item| render_node(item).expand(1, 1, 0, 0, glyphs.line))
        .collect();
    let max_width = items.iter().map(TextBlock::width).max().unwrap_or(0);
    let last = items.len().saturating_sub(1);

    let mut diagram = TextBlock::empty();
    for (i, item) in items.iter().enumerate() {
        let (left_pad, right_pad) = alignment.cell_gaps(max_width, item.width());
        let item = item.expand(left_pad, right_pad, 0, 0, glyphs.line);
        let (entry, exit) = (item.entry(), item.exit());
        let mut left = vec![glyphs.line_vertical; item.height()];
        let mut right = vec![glyphs.line_vertical; item.height()];
        let mut has_separator = true;

        if i <= default {
            left[entry] = glyphs.round_corner_top_left;
            right[exit] = glyphs.round_corner_top_right;
            if i == 0 {
                has_separator = false;
                left[..entry].fill(' ');
                right[..exit].fill(' ');
            }
        }
        if i >= default {
            left[entry] = glyphs.round_corner_bot_left;
            right[exit] = glyphs.round_corner_bot_right;
            if i == 0 {
                has_separator = false;
            }
            if i == last {
                left[entry + 1..].fill(' ');
                right[exit + 1..].fill(' ');
            }
        }
        let ports = if i == default {
            let (entry_joint, exit_joint) = match (i == 0, i == last) {
                (true, true) => (glyphs.line, glyphs.line),
                (true, false) => (glyphs.round_corner_top_right, glyphs.round_corner_top_left),
                (false, true) => (glyphs.round_corner_bot_right, glyphs.round_corner_bot_left),
                (false, false) => (glyphs.cross, glyphs.cross),
            };
            left[entry] = entry_joint;
            right[exit] = exit_joint;
            Ports::Lower
        } else {
            Ports::Upper
        };

        let item = joint(entry, left)
            .append_right(&item, "")
            .append_right(&joint(exit, right), "");
        let separator = if has_separator {
            let inner = diagram.width().max(item.width()).saturating_sub(2);
            vec![format!(
                "{0}{1}{0}",
                glyphs.line_vertical,
                " ".repeat(inner)
            )]
        } else {
            Vec::new()
        };
        diagram = diagram.append_below(&item, &separator, ports);
    }
    diagram
}

/// Builds a one column block from `cells`, attached on row `port`.
fn joint(port: usize, cells: Vec<char>) -> TextBlock {
    let lines = cells.into_iter().map(String::from).collect();
    TextBlock::new(port, port, lines)
}

/// Draws a choice between a boxed mode label and a boxed repeat marker.
pub(super) fn multiple_choice(layout: &Layout<'_>, default: usize, mode: ChoiceMode) -> TextBlock {
    let glyphs = glyphs(layout);
    let label = match mode {
        ChoiceMode::Any => "1+",
        ChoiceMode::All => "all",
    };
    let repeat = glyphs.multi_repeat.to_string();
    TextBlock::framed(Framed::Text(label), FrameKind::Rect, false, glyphs)
        .append_right(&choice(layout, default), "")
        .append_right(
            &TextBlock::framed(Framed::Text(&repeat), FrameKind::Rect, false, glyphs),
            "",
        )
}

/// Draws the items left to right, with a skip-over line above all but the
/// last and a skip-under line below all but the first.
pub(super) fn horizontal_choice(layout: &Layout<'_>) -> TextBlock {
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
    let skip_under_depth = items
        .get(1..)
        .unwrap_or(&[])
        .iter()
        .map(|item| item.height() - item.entry().min(item.exit()))
        .max()
        .unwrap_or(1)
        .saturating_sub(1);

    let mut lines = rows("  ", top_to_skip_over);
    lines.push(format!("{}{line}", glyphs.round_corner_top_left));
    lines.extend(rows(&format!("{vertical} "), skip_over_height));
    lines.push(format!("{}{line}", glyphs.round_corner_bot_right));
    let start = lines.len() - 1;
    let mut diagram = TextBlock::new(start, start, lines);

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            let onward = if i == last { " " } else { line.as_str() };
            let mut lines = rows("  ", top_to_skip_over);
            lines.push(format!("{}{onward}", glyphs.round_corner_top_right));
            lines.extend(rows(&format!("{vertical} "), skip_over_height));
            lines.push(format!("{}{line}", glyphs.round_corner_bot_left));
            lines.extend(rows("  ", skip_under_depth));
            lines.push(row(&line, 2));
            let exit = diagram.exit();
            diagram = diagram.append_right(&TextBlock::new(exit, exit, lines), "");
        }

        let blank = " ".repeat(item.width());
        let mut part = TextBlock::empty();
        if i < last {
            let mut lines = vec![row(&line, item.width())];
            lines.extend(rows(&blank, skip_over_height - item.entry()));
            part = part.append_below(&TextBlock::new(0, 0, lines), &[], Ports::Upper);
        }
        part = part.append_below(item, &[], Ports::Lower);
        if i > 0 {
            let padding = (skip_under_depth + 1).saturating_sub(item.height() - item.entry());
            let mut lines = rows(&blank, padding);
            lines.push(row(&line, item.width()));
            part = part.append_below(&TextBlock::new(0, 0, lines), &[], Ports::Upper);
        }
        diagram = diagram.append_right(&part, "");

        let (entry, exit) = (diagram.entry(), diagram.exit());
        let drop = exit.saturating_sub(entry);
        if i < last {
            let from_previous = if i > 0 { line.as_str() } else { " " };
            let mut lines = rows("  ", top_to_skip_over);
            lines.push(row(&line, 2));
            lines.extend(rows("  ", exit.saturating_sub(top_to_skip_over + 1)));
            lines.push(format!("{line}{}", glyphs.round_corner_top_right));
            lines.extend(rows(
                &format!(" {vertical}"),
                skip_under_depth.saturating_sub(drop),
            ));
            lines.push(format!("{from_previous}{}", glyphs.round_corner_bot_left));
            let exit_block = TextBlock::new(diagram_entry + 1 + drop, diagram_entry + 1, lines);
            diagram = diagram.append_right(&exit_block, "");
        } else {
            let from_exit = if exit == entry { line.as_str() } else { " " };
            let mut lines = vec![format!("{from_exit}{}", glyphs.round_corner_top_left)];
            lines.extend(rows(&format!(" {vertical}"), drop.saturating_sub(1)));
            if exit != entry {
                lines.push(format!("{line}{}", glyphs.round_corner_bot_right));
            }
            lines.extend(rows(
                &format!(" {vertical}"),
                skip_under_depth.saturating_sub(drop),
            ));
            lines.push(format!("{line}{}", glyphs.round_corner_bot_right));
            diagram = diagram.append_right(&TextBlock::new(drop, 0, lines), "");
        }
    }
    diagram
}
