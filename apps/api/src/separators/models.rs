//! Wire and in-memory types for separator layouts.
//!
//! Cards are shared as `Arc<Card>` so every pair and page cell points at the
//! caller's record rather than a copy. The collection boundary is a value of
//! its own (`Face::Boundary`), not an absent cell.

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// Display name of the boundary face.
pub const BOUNDARY_NAME: &str = "Collection Boundary";

/// Placeholder id used for both `id` and `card_set_id` of the boundary face.
pub const BOUNDARY_ID: &str = "---";

// ────────────────────────────────────────────────────────────────────────────
// Card
// ────────────────────────────────────────────────────────────────────────────

/// A catalog card as handed over by the card listing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub card_set_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    /// Image reference, resolved later by the image proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Card {
    /// The record the renderer receives for a boundary cell.
    pub fn boundary() -> Self {
        Self {
            id: BOUNDARY_ID.to_string(),
            card_set_id: BOUNDARY_ID.to_string(),
            name: BOUNDARY_NAME.to_string(),
            cost: Some(String::new()),
            power: Some(String::new()),
            image: Some(String::new()),
            color: None,
            card_type: None,
            rarity: None,
            attribute: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Faces and pairs
// ────────────────────────────────────────────────────────────────────────────

/// One printed side of a separator tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Face {
    Card(Arc<Card>),
    /// Outward-facing side of the first and last tab.
    Boundary,
}

impl Face {
    pub fn name(&self) -> &str {
        match self {
            Face::Card(card) => &card.name,
            Face::Boundary => BOUNDARY_NAME,
        }
    }

    pub fn card(&self) -> Option<&Arc<Card>> {
        match self {
            Face::Card(card) => Some(card),
            Face::Boundary => None,
        }
    }

    /// True when this face points at exactly `card` (same allocation).
    pub fn is_same_card(&self, card: &Arc<Card>) -> bool {
        self.card().is_some_and(|c| Arc::ptr_eq(c, card))
    }
}

impl Serialize for Face {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Face::Card(card) => Card::serialize(card, serializer),
            Face::Boundary => Card::boundary().serialize(serializer),
        }
    }
}

/// A single tab: `front` introduces partition `position`, `back` closes the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeparatorPair {
    pub position: usize,
    pub front: Face,
    pub back: Face,
}

// ────────────────────────────────────────────────────────────────────────────
// Print settings and pages
// ────────────────────────────────────────────────────────────────────────────

/// Axis along which a duplex sheet is turned over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipEdge {
    /// Book-style flip along the vertical edge.
    #[default]
    Long,
    /// Calendar-style flip.
    Short,
}

impl std::str::FromStr for FlipEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(FlipEdge::Long),
            "short" => Ok(FlipEdge::Short),
            other => Err(format!("unknown flip edge '{other}' (expected 'long' or 'short')")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Front,
    Back,
}

/// One printable sheet side. `cards` is in row-major raster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintPage {
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub cards: Vec<Face>,
}

/// Everything the composer needs besides the pairs themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSettings {
    pub page_capacity: usize,
    pub cells_per_row: usize,
    pub flip_edge: FlipEdge,
    pub double_sided: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
