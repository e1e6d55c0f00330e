use std::{borrow::Cow, fmt::Write};

const CELL_PADDING: usize = 1;

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders a bordered monospace table. Cells past the header count are
    /// dropped; missing cells render empty.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in col_widths.iter_mut().zip(row.as_ref()) {
                *width = (*width).max(text_width(cell));
            }
        }

        let separator = separator_line(&col_widths);
        let mut table = String::with_capacity(separator.len() * (self.rows.len() + 4));
        table.push_str(&separator);
        self.write_line(&mut table, self.headers, &col_widths);
        table.push_str(&separator);
        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }
        if !self.rows.is_empty() {
            table.push_str(&separator);
        }

        table
    }

    fn write_line(&self, table: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        table.push('|');
        for (i, width) in col_widths.iter().copied().enumerate() {
            let cell = cells.get(i).map_or("", |cell| &**cell);
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            let (left, right) = pad(width - text_width(cell), alignment);
            let _ = write!(
                table,
                "{:pad_left$}{cell}{:pad_right$}|",
                "",
                "",
                pad_left = left + CELL_PADDING,
                pad_right = right + CELL_PADDING,
            );
        }
        table.push('\n');
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn separator_line(col_widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in col_widths {
        line.push_str(&"-".repeat(width + CELL_PADDING * 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn pad(slack: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Left => (0, slack),
        Alignment::Center => (slack / 2, slack - slack / 2),
        Alignment::Right => (slack, 0),
    }
}
