//! In-memory page model produced by the layout and consumed by the PDF writer.

use crate::style::Rgb;

/// Standard Helvetica faces used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Italic];

    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Italic => "Helvetica-Oblique",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Italic => "F3",
        }
    }
}

/// One drawing instruction. Coordinates are millimetres from the top-left
/// corner of the page; text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
}

/// What part of the report an instruction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Timestamp,
    Footer,
    Heading,
    SummaryLine,
    ColumnHeader { column: usize },
    Cell { row: usize, column: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub role: Role,
    pub op: DrawOp,
}

impl DrawItem {
    pub fn text(&self) -> Option<&str> {
        match &self.op {
            DrawOp::Text { text, .. } => Some(text),
            DrawOp::Rect { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub items: Vec<DrawItem>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, op: DrawOp) {
        self.items.push(DrawItem { role, op });
    }

    /// Text of every item with a role matching `predicate`, in draw order.
    pub fn texts(&self, predicate: impl Fn(Role) -> bool) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| predicate(item.role))
            .filter_map(DrawItem::text)
            .collect()
    }
}

/// A laid-out report: page size plus an ordered list of pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Stroke width for cell borders, in millimetres.
    pub line_width: f32,
    pub pages: Vec<Page>,
}

impl Report {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Data row indices that appear in the excerpt, in first-drawn order.
    pub fn excerpt_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = Vec::new();
        for item in self.pages.iter().flat_map(|page| &page.items) {
            if let Role::Cell { row, .. } = item.role
                && rows.last() != Some(&row)
            {
                rows.push(row);
            }
        }
        rows
    }

    /// Text of every item with a role matching `predicate`, across all pages.
    pub fn texts(&self, predicate: impl Fn(Role) -> bool + Copy) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.texts(predicate))
            .collect()
    }
}
