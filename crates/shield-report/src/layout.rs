//! Report composition and pagination, independent of the PDF backend.
//!
//! [`compose`] turns a scan into an ordered list of styled blocks;
//! [`paginate`] wraps them to the page width and assigns each line a page and
//! a baseline position. The renderer only draws what this module places.

use chrono::{DateTime, Utc};
use shield_core::entities::Scan;
use shield_core::enums::RiskLevel;

use crate::text::{sanitize, wrap};

pub const TITLE: &str = "JobShield AI - Forensic Report";

/// A4 portrait, in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;

const PT_TO_MM: f32 = 0.352_8;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const LINE_SPACING: f32 = 1.35;
const INDENT_STEP_MM: f32 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Meta,
    Banner(RiskLevel),
    Heading,
    Body,
    /// Bold body text, used for quoted phrases.
    Emphasis,
    Detail,
}

impl TextStyle {
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Title => 22.0,
            Self::Banner(_) => 16.0,
            Self::Heading => 14.0,
            Self::Body | Self::Emphasis => 11.0,
            Self::Meta | Self::Detail => 10.0,
        }
    }

    #[must_use]
    pub const fn is_bold(self) -> bool {
        matches!(
            self,
            Self::Title | Self::Banner(_) | Self::Heading | Self::Emphasis
        )
    }

    #[must_use]
    pub const fn is_centered(self) -> bool {
        matches!(self, Self::Title | Self::Banner(_))
    }

    /// Fill colour as RGB in `0.0..=1.0`.
    #[must_use]
    pub const fn color(self) -> (f32, f32, f32) {
        match self {
            Self::Banner(RiskLevel::Critical) => (0.80, 0.10, 0.10),
            Self::Banner(RiskLevel::High) => (0.90, 0.45, 0.05),
            Self::Banner(RiskLevel::Moderate) => (0.75, 0.60, 0.00),
            Self::Banner(RiskLevel::Low) => (0.10, 0.55, 0.20),
            Self::Meta | Self::Detail => (0.35, 0.35, 0.35),
            Self::Title | Self::Heading | Self::Body | Self::Emphasis => (0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn line_height_mm(self) -> f32 {
        self.font_size() * PT_TO_MM * LINE_SPACING
    }

    /// Estimated rendered width of `chars` characters.
    #[must_use]
    pub fn text_width_mm(self, chars: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let chars = chars as f32;
        chars * self.font_size() * PT_TO_MM * AVG_GLYPH_EM
    }

    /// How many characters fit in `width_mm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn chars_per_line(self, width_mm: f32) -> usize {
        (width_mm / (self.font_size() * PT_TO_MM * AVG_GLYPH_EM)).floor().max(1.0) as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text {
        text: String,
        style: TextStyle,
        /// Indentation level; each level is a fixed step.
        indent: u8,
    },
    Spacer(f32),
}

impl Block {
    fn text(style: TextStyle, text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style,
            indent: 0,
        }
    }

    fn indented(style: TextStyle, indent: u8, text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style,
            indent,
        }
    }
}

/// Ordered report content for one scan.
#[must_use]
pub fn compose(scan: &Scan, generated_at: DateTime<Utc>) -> Vec<Block> {
    let analysis = &scan.analysis_result;
    let mut blocks = vec![
        Block::text(TextStyle::Title, TITLE),
        Block::Spacer(4.0),
        Block::text(TextStyle::Meta, format!("Report ID: {}", scan.id)),
        Block::text(
            TextStyle::Meta,
            format!("Date: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        ),
        Block::text(
            TextStyle::Meta,
            format!(
                "Scanned: {} ({})",
                scan.created_at.format("%Y-%m-%d %H:%M UTC"),
                scan.input_type
            ),
        ),
        Block::Spacer(6.0),
        Block::text(
            TextStyle::Banner(scan.risk_level),
            format!(
                "Risk Level: {} (Score: {}/100)",
                scan.risk_level.as_str().to_uppercase(),
                scan.risk_score
            ),
        ),
        Block::Spacer(6.0),
        Block::text(TextStyle::Heading, "Executive Summary"),
        Block::text(TextStyle::Body, analysis.summary_or_default()),
        Block::Spacer(4.0),
        Block::text(TextStyle::Heading, "Red Flags Detected"),
    ];

    if analysis.flags.is_empty() {
        blocks.push(Block::text(TextStyle::Detail, "No red flags detected."));
    } else {
        blocks.extend(
            analysis
                .flags
                .iter()
                .map(|flag| Block::indented(TextStyle::Body, 1, format!("- {flag}"))),
        );
    }
    blocks.push(Block::Spacer(4.0));

    let company = &analysis.company_verification;
    blocks.push(Block::text(TextStyle::Heading, "Company Verification"));
    if let Some(name) = &company.name {
        blocks.push(Block::text(TextStyle::Body, format!("Company: {name}")));
    }
    blocks.push(Block::text(
        TextStyle::Body,
        format!(
            "Status: {}",
            if company.found { "Verified" } else { "Not Verified" }
        ),
    ));
    if let Some(trust) = company.trust_score {
        blocks.push(Block::text(TextStyle::Body, format!("Trust Score: {trust}/100")));
    }
    if let Some(details) = &company.details {
        blocks.push(Block::text(TextStyle::Detail, format!("Details: {details}")));
    }
    blocks.push(Block::Spacer(4.0));

    if !analysis.suspicious_phrases.is_empty() {
        blocks.push(Block::text(
            TextStyle::Heading,
            "Detected Anomalies & Suspicious Content",
        ));
        for (i, phrase) in analysis.suspicious_phrases.iter().enumerate() {
            blocks.push(Block::indented(
                TextStyle::Emphasis,
                1,
                format!("{}. \"{}\"", i + 1, phrase.text),
            ));
            if !phrase.reason.is_empty() {
                blocks.push(Block::indented(
                    TextStyle::Detail,
                    2,
                    format!("Reason: {}", phrase.reason),
                ));
            }
            if !phrase.category.is_empty() {
                blocks.push(Block::indented(
                    TextStyle::Detail,
                    2,
                    format!("Category: {}", phrase.category),
                ));
            }
            blocks.push(Block::Spacer(2.0));
        }
        blocks.push(Block::Spacer(2.0));
    }

    let salary = &analysis.salary_analysis;
    blocks.push(Block::text(TextStyle::Heading, "Compensation Analysis"));
    blocks.push(Block::text(
        TextStyle::Body,
        format!(
            "Result: {}",
            if salary.plausible {
                "Market Aligned"
            } else {
                "Potential Anomaly"
            }
        ),
    ));
    if let Some(deviation) = &salary.deviation {
        blocks.push(Block::text(TextStyle::Body, format!("Deviation: {deviation}")));
    }
    if let Some(reason) = &salary.reason {
        blocks.push(Block::text(TextStyle::Detail, format!("Finding: {reason}")));
    }

    blocks
}

/// One line of text at its final position. `y_mm` is the baseline, measured
/// from the bottom edge as PDF coordinates are.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: TextStyle,
    pub x_mm: f32,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Wrap blocks to the content width and flow them onto pages.
///
/// A new page starts when the next line would cross the bottom margin. A
/// heading is moved to the next page rather than left as the last line. The
/// result always has at least one page.
#[must_use]
pub fn paginate(blocks: &[Block]) -> Vec<Page> {
    let content_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let top = PAGE_HEIGHT_MM - MARGIN_MM;
    let bottom = MARGIN_MM;

    let mut pages = vec![Page::default()];
    let mut cursor = top;

    for block in blocks {
        match block {
            Block::Spacer(mm) => {
                if cursor < top {
                    cursor -= mm;
                }
            }
            Block::Text {
                text,
                style,
                indent,
            } => {
                let indent_mm = f32::from(*indent) * INDENT_STEP_MM;
                let max_chars = style.chars_per_line(content_width - indent_mm);
                let height = style.line_height_mm();
                let lines = wrap(&sanitize(text), max_chars);

                if *style == TextStyle::Heading && cursor < top {
                    let keep_with_next = height + TextStyle::Body.line_height_mm();
                    if cursor - keep_with_next < bottom {
                        pages.push(Page::default());
                        cursor = top;
                    }
                }

                for line in lines {
                    if cursor - height < bottom {
                        pages.push(Page::default());
                        cursor = top;
                    }
                    cursor -= height;

                    let x_mm = if style.is_centered() {
                        let width = style.text_width_mm(line.chars().count());
                        MARGIN_MM + ((content_width - width) / 2.0).max(0.0)
                    } else {
                        MARGIN_MM + indent_mm
                    };
                    if let Some(page) = pages.last_mut() {
                        page.lines.push(PlacedLine {
                            text: line,
                            style: *style,
                            x_mm,
                            y_mm: cursor,
                        });
                    }
                }
            }
        }
    }

    pages
}
