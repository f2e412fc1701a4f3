//! Page layout with vertical auto-pagination.
//!
//! [`PageWriter`] keeps a cursor on the current page. Every line or row asks
//! for vertical space first; when it would cross the style's break line a new
//! page is opened with the header and footer already drawn. Content taller
//! than an empty page is placed anyway so layout always terminates.

use report_model::{SummaryMetrics, Table};

use crate::document::{DrawOp, Font, Page, Report, Role};
use crate::fonts::{PT_PER_MM, text_width};
use crate::format::{summary_lines, truncate_cell};
use crate::style::{ReportStyle, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
}

/// Text attributes for one cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Rgb,
    pub align: Align,
}

/// Frame of one cell: position, size and optional fill/border.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellBox {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Rgb>,
    pub border: Option<Rgb>,
}

pub(crate) struct PageWriter<'a> {
    style: &'a ReportStyle,
    stamp: String,
    pages: Vec<Page>,
    y: f32,
    body_top: f32,
}

impl<'a> PageWriter<'a> {
    pub fn new(style: &'a ReportStyle, stamp: String) -> Self {
        Self {
            style,
            stamp,
            pages: Vec::new(),
            y: style.margin_top,
            body_top: style.margin_top,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Open a new page and draw its header and footer.
    pub fn add_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number));
        let style = self.style;
        let full = CellBox {
            x: style.margin_left,
            width: style.content_width(),
            height: style.heading_height,
            fill: None,
            border: None,
        };

        self.y = style.margin_top;
        self.draw_cell(
            full,
            &style.title,
            TextStyle {
                font: Font::Bold,
                size: style.title_font_size,
                color: style.accent_color,
                align: Align::Center,
            },
            Role::Title,
        );
        self.y += style.heading_height;

        let stamp = self.stamp.clone();
        self.draw_cell(
            CellBox {
                height: style.line_height,
                ..full
            },
            &stamp,
            TextStyle {
                font: Font::Regular,
                size: style.timestamp_font_size,
                color: style.muted_color,
                align: Align::Center,
            },
            Role::Timestamp,
        );
        self.y += style.line_height + style.header_gap;
        self.body_top = self.y;

        let body_y = self.y;
        self.y = style.page_height - style.footer_offset;
        self.draw_cell(
            CellBox {
                height: style.heading_height,
                ..full
            },
            &format!("Page {number}"),
            TextStyle {
                font: Font::Italic,
                size: style.footer_font_size,
                color: style.body_text_color,
                align: Align::Center,
            },
            Role::Footer,
        );
        self.y = body_y;
    }

    /// Make room for `height`; returns true when a new page was started.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.pages.is_empty() {
            self.add_page();
            return true;
        }
        let at_top = self.y <= self.body_top;
        if self.y + height > self.style.break_line() && !at_top {
            self.add_page();
            return true;
        }
        false
    }

    /// Full-width text line that advances the cursor.
    pub fn line(&mut self, text: &str, height: f32, text_style: TextStyle, role: Role) {
        self.ensure_space(height);
        let cell = CellBox {
            x: self.style.margin_left,
            width: self.style.content_width(),
            height,
            fill: None,
            border: None,
        };
        self.draw_cell(cell, text, text_style, role);
        self.y += height;
    }

    /// Draw one cell at the cursor without moving it.
    pub fn draw_cell(&mut self, cell: CellBox, text: &str, text_style: TextStyle, role: Role) {
        let y = self.y;
        let Some(page) = self.pages.last_mut() else {
            return;
        };
        if cell.fill.is_some() || cell.border.is_some() {
            page.push(
                role,
                DrawOp::Rect {
                    x: cell.x,
                    y,
                    width: cell.width,
                    height: cell.height,
                    fill: cell.fill,
                    stroke: cell.border,
                },
            );
        }
        if text.is_empty() {
            return;
        }
        let x = match text_style.align {
            Align::Left => cell.x + self.style.cell_padding,
            Align::Center => {
                cell.x + (cell.width - text_width(text, text_style.font, text_style.size)) / 2.0
            }
        };
        // Vertically centred: half the cell plus 30% of the font size.
        let baseline = y + cell.height / 2.0 + 0.3 * text_style.size / PT_PER_MM;
        page.push(
            role,
            DrawOp::Text {
                x,
                y: baseline,
                font: text_style.font,
                size: text_style.size,
                color: text_style.color,
                text: text.to_string(),
            },
        );
    }

    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    pub fn finish(self) -> Report {
        Report {
            title: self.style.title.clone(),
            width: self.style.page_width,
            height: self.style.page_height,
            line_width: self.style.line_width,
            pages: self.pages,
        }
    }
}

/// Page 1 body: heading plus one line per metric.
pub(crate) fn executive_summary(writer: &mut PageWriter<'_>, metrics: &SummaryMetrics) {
    let style = writer.style;
    writer.line(
        &style.summary_heading,
        style.heading_height,
        TextStyle {
            font: Font::Bold,
            size: style.heading_font_size,
            color: style.body_text_color,
            align: Align::Left,
        },
        Role::Heading,
    );
    let body = TextStyle {
        font: Font::Regular,
        size: style.body_font_size,
        color: style.body_text_color,
        align: Align::Left,
    };
    for line in summary_lines(metrics, &style.currency_symbol) {
        writer.line(&line, style.line_height, body, Role::SummaryLine);
    }
}

/// Excerpt section: heading, column header band, then the leading data rows.
///
/// Columns share the content width equally. When a row would cross the break
/// line the table continues on a new page and the header band is repeated.
pub(crate) fn excerpt(writer: &mut PageWriter<'_>, table: &Table) {
    let style = writer.style;
    writer.line(
        &style.excerpt_heading(),
        style.heading_height,
        TextStyle {
            font: Font::Bold,
            size: style.section_font_size,
            color: style.accent_color,
            align: Align::Left,
        },
        Role::Heading,
    );
    let column_count = table.column_count();
    if column_count == 0 {
        return;
    }
    let width = style.content_width() / column_count as f32;
    let rows = style
        .excerpt_row_cap
        .map_or(table.row_count(), |cap| cap.min(table.row_count()));

    // The header band never sits alone at the bottom of a page.
    let band_rows = if rows > 0 { 2.0 } else { 1.0 };
    writer.ensure_space(band_rows * style.row_height);
    header_band(writer, table, width);
    let text_style = TextStyle {
        font: Font::Regular,
        size: style.table_font_size,
        color: style.body_text_color,
        align: Align::Center,
    };
    for row in 0..rows {
        // A fresh page always takes the band plus this row.
        if writer.ensure_space(style.row_height) {
            header_band(writer, table, width);
        }
        for (column, value) in table.row(row).enumerate() {
            let text = truncate_cell(
                &value.to_string(),
                style.cell_char_limit,
                style.truncation_marker.as_deref(),
            );
            let cell = CellBox {
                x: style.margin_left + width * column as f32,
                width,
                height: style.row_height,
                fill: None,
                border: Some(style.border_color),
            };
            writer.draw_cell(cell, &text, text_style, Role::Cell { row, column });
        }
        writer.advance(style.row_height);
    }
}

fn header_band(writer: &mut PageWriter<'_>, table: &Table, width: f32) {
    let style = writer.style;
    let text_style = TextStyle {
        font: Font::Bold,
        size: style.table_header_font_size,
        color: style.header_text_color,
        align: Align::Center,
    };
    for (column, name) in table.column_names().enumerate() {
        let cell = CellBox {
            x: style.margin_left + width * column as f32,
            width,
            height: style.row_height,
            fill: Some(style.accent_color),
            border: Some(style.border_color),
        };
        writer.draw_cell(cell, name, text_style, Role::ColumnHeader { column });
    }
    writer.advance(style.row_height);
}
