use text_size::TextSize;

/// Maps offsets to 1-based line and column numbers.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<TextSize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| TextSize::of(&text[..=offset])),
        );
        LineIndex { text, line_starts }
    }

    pub fn line_col(&self, offset: TextSize) -> (u32, u32) {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset).min(self.text.len());
        let col = self.text.get(start..end).map_or(0, |s| s.chars().count());
        (line as u32 + 1, col as u32 + 1)
    }
}
