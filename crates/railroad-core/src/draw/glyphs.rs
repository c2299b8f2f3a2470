//! Character tables for text diagrams.

/// Characters of one family of framed boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bot_left: char,
    pub bot_right: char,
    pub top: char,
    pub top_dashed: char,
    pub bot: char,
    pub bot_dashed: char,
    pub left: char,
    pub left_dashed: char,
    pub right: char,
    pub right_dashed: char,
}

/// Every character a text diagram is drawn with.
///
/// Two complete tables are provided: [`Glyphs::UNICODE`] uses box-drawing
/// characters, [`Glyphs::ASCII`] restricts itself to printable ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub line: char,
    pub line_vertical: char,
    pub separator: char,
    pub cross: char,
    pub cross_diag: char,
    pub tee_left: char,
    pub tee_right: char,
    pub arrow_left: char,
    pub arrow_right: char,
    pub ball: char,
    pub multi_repeat: char,
    pub corner_top_left: char,
    pub corner_top_right: char,
    pub corner_bot_left: char,
    pub corner_bot_right: char,
    pub round_corner_top_left: char,
    pub round_corner_top_right: char,
    pub round_corner_bot_left: char,
    pub round_corner_bot_right: char,
    pub repeat_top_left: char,
    pub repeat_top_right: char,
    pub repeat_bot_left: char,
    pub repeat_bot_right: char,
    pub repeat_left: char,
    pub repeat_right: char,
    pub rect: FrameGlyphs,
    pub round_rect: FrameGlyphs,
    pub angle_rect: FrameGlyphs,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        line: '─',
        line_vertical: '│',
        separator: '─',
        cross: '┼',
        cross_diag: '╳',
        tee_left: '┤',
        tee_right: '├',
        arrow_left: '◄',
        arrow_right: '►',
        ball: '●',
        multi_repeat: '↺',
        corner_top_left: '┌',
        corner_top_right: '┐',
        corner_bot_left: '└',
        corner_bot_right: '┘',
        round_corner_top_left: '╭',
        round_corner_top_right: '╮',
        round_corner_bot_left: '╰',
        round_corner_bot_right: '╯',
        repeat_top_left: '╭',
        repeat_top_right: '╮',
        repeat_bot_left: '╰',
        repeat_bot_right: '╯',
        repeat_left: '│',
        repeat_right: '│',
        rect: FrameGlyphs {
            top_left: '┌',
            top_right: '┐',
            bot_left: '└',
            bot_right: '┘',
            top: '─',
            top_dashed: '┄',
            bot: '─',
            bot_dashed: '┄',
            left: '│',
            left_dashed: '┆',
            right: '│',
            right_dashed: '┆',
        },
        round_rect: FrameGlyphs {
            top_left: '╭',
            top_right: '╮',
            bot_left: '╰',
            bot_right: '╯',
            top: '─',
            top_dashed: '┄',
            bot: '─',
            bot_dashed: '┄',
            left: '│',
            left_dashed: '┆',
            right: '│',
            right_dashed: '┆',
        },
        angle_rect: FrameGlyphs {
            top_left: '◞',
            top_right: '◟',
            bot_left: '◝',
            bot_right: '◜',
            top: '─',
            top_dashed: '┄',
            bot: '─',
            bot_dashed: '┄',
            left: '⟨',
            left_dashed: '⟨',
            right: '⟩',
            right_dashed: '⟩',
        },
    };

    pub const ASCII: Glyphs = Glyphs {
        line: '-',
        line_vertical: '|',
        separator: '-',
        cross: '+',
        cross_diag: 'X',
        tee_left: '|',
        tee_right: '|',
        arrow_left: '<',
        arrow_right: '>',
        ball: 'o',
        multi_repeat: '&',
        corner_top_left: '/',
        corner_top_right: '\\',
        corner_bot_left: '\\',
        corner_bot_right: '/',
        round_corner_top_left: '/',
        round_corner_top_right: '\\',
        round_corner_bot_left: '\\',
        round_corner_bot_right: '/',
        repeat_top_left: '/',
        repeat_top_right: '\\',
        repeat_bot_left: '\\',
        repeat_bot_right: '/',
        repeat_left: '|',
        repeat_right: '|',
        rect: FrameGlyphs {
            top_left: '+',
            top_right: '+',
            bot_left: '+',
            bot_right: '+',
            top: '-',
            top_dashed: '-',
            bot: '-',
            bot_dashed: '-',
            left: '|',
            left_dashed: '|',
            right: '|',
            right_dashed: '|',
        },
        round_rect: FrameGlyphs {
            top_left: '/',
            top_right: '\\',
            bot_left: '\\',
            bot_right: '/',
            top: '-',
            top_dashed: '-',
            bot: '-',
            bot_dashed: '-',
            left: '|',
            left_dashed: '|',
            right: '|',
            right_dashed: '|',
        },
        angle_rect: FrameGlyphs {
            top_left: '/',
            top_right: '\\',
            bot_left: '\\',
            bot_right: '/',
            top: '-',
            top_dashed: '-',
            bot: '-',
            bot_dashed: '-',
            left: '<',
            left_dashed: '|',
            right: '>',
            right_dashed: '|',
        },
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}
