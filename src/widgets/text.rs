use crate::element::Widget;
use crate::math::{Rect, Size};
use crate::proposal::SizeProposal;

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    char_width: f32,
    line_height: f32,
    line_limit: Option<usize>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Text {
        Text {
            content: content.into(),
            char_width: 8.0,
            line_height: 16.0,
            line_limit: None
        }
    }

    pub fn with_metrics(self, char_width: f32, line_height: f32) -> Text {
        Text {
            char_width: char_width.max(f32::MIN_POSITIVE),
            line_height: line_height.max(0.0),
            ..self
        }
    }

    pub fn with_line_limit(self, line_limit: usize) -> Text {
        Text { line_limit: Some(line_limit.max(1)), ..self }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn wrap(&self, columns: usize) -> Vec<usize> {
        let mut lines = Vec::new();
        for paragraph in self.content.split('\n') {
            let mut line = 0usize;
            for word in paragraph.split_whitespace() {
                let mut word_len = word.chars().count();
                if line > 0 && line + 1 + word_len <= columns {
                    line += 1 + word_len;
                    continue;
                }
                if line > 0 {
                    lines.push(line);
                }
                while word_len > columns {
                    lines.push(columns);
                    word_len -= columns;
                }
                line = word_len;
            }
            lines.push(line);
        }
        lines
    }

    pub fn line_count(&self, proposal: SizeProposal) -> usize {
        let lines = self.wrap(self.columns(proposal)).len();
        self.line_limit.map_or(lines, |limit| lines.min(limit))
    }

    fn columns(&self, proposal: SizeProposal) -> usize {
        match proposal.width.finite() {
            Some(width) => ((width / self.char_width).floor() as usize).max(1),
            None => usize::MAX
        }
    }
}

impl Widget for Text {
    fn measure(&self, proposal: SizeProposal) -> Size {
        if self.content.is_empty() {
            return Size::ZERO;
        }
        let mut lines = self.wrap(self.columns(proposal));
        if let Some(limit) = self.line_limit {
            lines.truncate(limit);
        }
        let longest = lines.iter().copied().max().unwrap_or(0);
        Size::new(longest as f32 * self.char_width, lines.len() as f32 * self.line_height)
    }

    fn place(&mut self, _bounds: Rect, _proposal: SizeProposal) {}
}
