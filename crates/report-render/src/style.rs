//! Report style configuration.
//!
//! Every visual constant used by the layout lives here so it can be
//! overridden from a TOML file without code changes. Lengths are millimetres,
//! font sizes are points.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// An sRGB color with 8-bit channels, written as `[r, g, b]` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Channels scaled to the 0.0..=1.0 range PDF color operators expect.
    pub fn unit(self) -> [f32; 3] {
        self.0.map(|channel| f32::from(channel) / 255.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportStyle {
    pub title: String,
    pub summary_heading: String,
    pub currency_symbol: String,

    pub accent_color: Rgb,
    pub muted_color: Rgb,
    pub header_text_color: Rgb,
    pub body_text_color: Rgb,
    pub border_color: Rgb,

    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    /// Distance from the bottom edge at which body content breaks to a new page.
    pub margin_bottom: f32,
    /// Distance from the bottom edge to the top of the footer line.
    pub footer_offset: f32,

    pub title_font_size: f32,
    pub timestamp_font_size: f32,
    pub heading_font_size: f32,
    pub section_font_size: f32,
    pub body_font_size: f32,
    pub table_header_font_size: f32,
    pub table_font_size: f32,
    pub footer_font_size: f32,

    pub heading_height: f32,
    pub line_height: f32,
    pub header_gap: f32,
    pub row_height: f32,
    pub line_width: f32,
    /// Horizontal padding for left-aligned text inside a cell.
    pub cell_padding: f32,

    /// Maximum number of data rows in the excerpt; `None` renders every row.
    pub excerpt_row_cap: Option<usize>,
    /// Maximum characters shown per excerpt cell.
    pub cell_char_limit: usize,
    /// Appended to truncated cell text, counted within `cell_char_limit`.
    pub truncation_marker: Option<String>,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            title: "Data Analysis Report".to_string(),
            summary_heading: "Executive Summary".to_string(),
            currency_symbol: "$".to_string(),

            accent_color: Rgb::new(25, 85, 130),
            muted_color: Rgb::new(100, 100, 100),
            header_text_color: Rgb::WHITE,
            body_text_color: Rgb::BLACK,
            border_color: Rgb::BLACK,

            page_width: 210.0,
            page_height: 297.0,
            margin_left: 10.0,
            margin_right: 10.0,
            margin_top: 10.0,
            margin_bottom: 20.0,
            footer_offset: 15.0,

            title_font_size: 18.0,
            timestamp_font_size: 10.0,
            heading_font_size: 14.0,
            section_font_size: 12.0,
            body_font_size: 11.0,
            table_header_font_size: 9.0,
            table_font_size: 8.0,
            footer_font_size: 8.0,

            heading_height: 10.0,
            line_height: 8.0,
            header_gap: 10.0,
            row_height: 8.0,
            line_width: 0.2,
            cell_padding: 1.0,

            excerpt_row_cap: Some(10),
            cell_char_limit: 15,
            truncation_marker: None,
        }
    }
}

impl ReportStyle {
    /// Parse a partial style; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let style: Self = toml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    /// Width available to body content between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Y coordinate (from the top edge) past which body content may not extend.
    pub fn break_line(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// Heading for the excerpt section, reflecting the configured cap.
    pub fn excerpt_heading(&self) -> String {
        match self.excerpt_row_cap {
            Some(cap) => format!("Sample Data (First {cap} Records)"),
            None => "Sample Data (All Records)".to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(RenderError::InvalidStyle {
                reason: reason.to_string(),
            })
        };
        let lengths = [
            self.page_width,
            self.page_height,
            self.title_font_size,
            self.timestamp_font_size,
            self.heading_font_size,
            self.section_font_size,
            self.body_font_size,
            self.table_header_font_size,
            self.table_font_size,
            self.footer_font_size,
            self.heading_height,
            self.line_height,
            self.row_height,
        ];
        if lengths.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return invalid("page size, font sizes and line heights must be positive");
        }
        let margins = [
            self.margin_left,
            self.margin_right,
            self.margin_top,
            self.margin_bottom,
            self.footer_offset,
            self.header_gap,
            self.line_width,
            self.cell_padding,
        ];
        if margins.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return invalid("margins, gaps and line width must not be negative");
        }
        if self.content_width() <= 0.0 {
            return invalid("side margins leave no room for content");
        }
        if self.break_line() <= self.margin_top {
            return invalid("top and bottom margins leave no room for content");
        }
        if self.cell_char_limit == 0 {
            return invalid("cell_char_limit must be at least 1");
        }
        if self.excerpt_row_cap == Some(0) {
            return invalid("excerpt_row_cap must be at least 1; omit it to show every row");
        }
        Ok(())
    }
}
