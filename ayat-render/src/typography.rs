//! Text wrapping and line layout
//!
//! Lines are wrapped on a character budget rather than measured pixel width,
//! then measured with the active rasterizer for centring. Long words are split
//! on grapheme boundaries so a base letter never loses its marks.

use crate::config::RenderConfig;
use crate::fonts::TextRasterizer;
use unicode_segmentation::UnicodeSegmentation;

/// Text tokens for greedy line filling.
#[derive(Debug, Clone, PartialEq)]
pub enum TextToken {
    Word(String),
    /// A run of whitespace, stored as its length in characters
    Space(usize),
}

/// Split text into words and whitespace runs. Every whitespace character
/// counts as a single space.
pub fn tokenize_text(text: &str) -> Vec<TextToken> {
    let mut tokens = Vec::new();
    let mut current_word = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current_word.is_empty() {
                tokens.push(TextToken::Word(std::mem::take(&mut current_word)));
            }
            match tokens.last_mut() {
                Some(TextToken::Space(n)) => *n += 1,
                _ => tokens.push(TextToken::Space(1)),
            }
        } else {
            current_word.push(ch);
        }
    }

    if !current_word.is_empty() {
        tokens.push(TextToken::Word(current_word));
    }
    tokens
}

/// Greedy word wrap where no line exceeds `width` characters.
///
/// Whitespace at line edges is dropped. Blank input gives no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    let mut pending_space = 0usize;

    for token in tokenize_text(text) {
        let word = match token {
            TextToken::Space(n) => {
                if line_len > 0 {
                    pending_space += n;
                }
                continue;
            }
            TextToken::Word(word) => word,
        };

        let word_len = word.chars().count();
        if line_len + pending_space + word_len <= width {
            push_spaced(&mut line, &mut line_len, pending_space, &word, word_len);
            pending_space = 0;
            continue;
        }

        if word_len <= width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(&word);
            line_len = word_len;
            pending_space = 0;
            continue;
        }

        // Word longer than a full line: top up the current line, then chunk the rest
        let mut rest = word.as_str();
        let room = width.saturating_sub(line_len + pending_space);
        if line_len > 0 && room > 0 {
            let (head, tail) = split_graphemes(rest, room);
            if !head.is_empty() {
                let head_len = head.chars().count();
                push_spaced(&mut line, &mut line_len, pending_space, head, head_len);
                rest = tail;
            }
        }
        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        pending_space = 0;

        while !rest.is_empty() {
            let (head, tail) = split_graphemes(rest, width);
            if tail.is_empty() {
                line.push_str(head);
                line_len = head.chars().count();
            } else {
                lines.push(head.to_string());
            }
            rest = tail;
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

fn push_spaced(line: &mut String, line_len: &mut usize, spaces: usize, word: &str, word_len: usize) {
    if *line_len > 0 {
        line.extend(std::iter::repeat(' ').take(spaces));
        *line_len += spaces;
    }
    line.push_str(word);
    *line_len += word_len;
}

/// Longest grapheme-aligned prefix of at most `limit` characters. Always
/// takes at least one grapheme so callers make progress.
fn split_graphemes(text: &str, limit: usize) -> (&str, &str) {
    let mut taken = 0usize;
    let mut end = 0usize;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let len = grapheme.chars().count();
        if taken + len > limit && end > 0 {
            break;
        }
        taken += len;
        end = offset + grapheme.len();
        if taken >= limit {
            break;
        }
    }
    text.split_at(end)
}

/// Order in which wrapped lines are placed top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrder {
    Forward,
    /// Last wrapped line first. Used for visually reordered RTL paragraphs,
    /// whose wrap order runs bottom-up once reversed.
    Reverse,
}

/// One positioned line ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A wrapped block of lines and the space it consumed
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedParagraph {
    pub lines: Vec<FormattedLine>,
    pub y: f32,
    /// Total vertical advance including padding after each line.
    pub height: f32,
}

impl FormattedParagraph {
    /// Where the next block starts.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Wraps, orders, measures and centres paragraphs on the canvas
pub struct TextLayoutEngine<'a, R: TextRasterizer + ?Sized> {
    rasterizer: &'a mut R,
    config: &'a RenderConfig,
}

impl<'a, R: TextRasterizer + ?Sized> TextLayoutEngine<'a, R> {
    pub fn new(rasterizer: &'a mut R, config: &'a RenderConfig) -> Self {
        Self { rasterizer, config }
    }

    /// Lay out `text` starting at vertical position `y`.
    pub fn layout_paragraph(&mut self, text: &str, y: f32, order: LineOrder) -> FormattedParagraph {
        let mut wrapped = wrap_text(text, self.config.wrap_width);
        if order == LineOrder::Reverse {
            wrapped.reverse();
        }

        let canvas_width = self.config.width as f32;
        let mut cursor = y;
        let mut lines = Vec::with_capacity(wrapped.len());

        for line in wrapped {
            let extent = self.rasterizer.measure(&line, self.config.font_size);
            lines.push(FormattedLine {
                x: (canvas_width - extent.width) / 2.0,
                y: cursor,
                width: extent.width,
                height: extent.height,
                text: line,
            });
            cursor += extent.height + self.config.line_padding;
        }

        FormattedParagraph {
            lines,
            y,
            height: cursor - y,
        }
    }
}
