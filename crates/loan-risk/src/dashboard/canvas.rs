use std::fmt;

use serde::Serialize;

/// Output unit produced by a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
    },
    Text {
        text: String,
    },
    Metric {
        label: String,
        value: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Sink that pages draw into. The front-end decides how blocks are shown;
/// the CLI prints the [`Display`](fmt::Display) form and the HTTP adapter
/// returns the blocks as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Canvas {
    blocks: Vec<Block>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Title { text: text.into() });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Text { text: text.into() });
    }

    pub fn metric(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.blocks.push(Block::Metric {
            label: label.into(),
            value: value.to_string(),
        });
    }

    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.blocks.push(Block::Table { headers, rows });
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Title { text } => writeln!(f, "# {text}")?,
                Block::Text { text } => writeln!(f, "{text}")?,
                Block::Metric { label, value } => writeln!(f, "{label}: {value}")?,
                Block::Table { headers, rows } => {
                    writeln!(f, "{}", headers.join(" | "))?;
                    for row in rows {
                        writeln!(f, "{}", row.join(" | "))?;
                    }
                }
            }
        }
        Ok(())
    }
}
