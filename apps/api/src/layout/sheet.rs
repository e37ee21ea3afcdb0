//! Physical page and card dimensions, in millimetres.
//!
//! The grid is a plain floor division of the page by the card footprint: no
//! margins, no gutters. A card larger than the page yields a zero-sized grid,
//! which callers must reject rather than clamp. The cell count saturates.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Dimensions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

/// Separator card footprint. `tab_height` is the label tab sticking out above the card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardDimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub tab_height: f64,
}

impl Default for CardDimensions {
    fn default() -> Self {
        Self {
            width: 65.0,
            height: 95.0,
            tab_height: 10.0,
        }
    }
}

/// Named paper sizes understood by the print configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    /// Caller supplies the dimensions; A4 is assumed when they don't.
    Custom,
}

impl PageSize {
    pub fn dimensions(self) -> PageDimensions {
        let (width, height) = match self {
            PageSize::A4 | PageSize::Custom => (210.0, 297.0),
            PageSize::Letter => (216.0, 279.0),
            PageSize::Legal => (216.0, 356.0),
        };
        PageDimensions { width, height }
    }

    /// Resolves the effective page dimensions, honouring `custom` only for `PageSize::Custom`.
    pub fn resolve(self, custom: Option<PageDimensions>) -> PageDimensions {
        match (self, custom) {
            (PageSize::Custom, Some(dims)) => dims,
            _ => self.dimensions(),
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "custom" => Ok(PageSize::Custom),
            other => Err(format!("unknown page size '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Grid
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cells_per_row: usize,
    pub rows_per_page: usize,
    pub cells_per_page: usize,
}

pub fn calculate_cards_per_page(page: &PageDimensions, card: &CardDimensions) -> GridLayout {
    let cells_per_row = fit_count(page.width, card.width);
    let rows_per_page = fit_count(page.height, card.height);
    GridLayout {
        cells_per_row,
        rows_per_page,
        cells_per_page: cells_per_row.saturating_mul(rows_per_page),
    }
}

/// How many whole `item` lengths fit in `span`. Non-positive or non-finite input fits none.
fn fit_count(span: f64, item: f64) -> usize {
    if !(span.is_finite() && item.is_finite()) || span <= 0.0 || item <= 0.0 {
        return 0;
    }
    (span / item).floor() as usize
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
