use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::{calculate_cards_per_page, CardDimensions, PageDimensions, PageSize};
use crate::separators::error::positive_dimension;
use crate::separators::{layout_separators, Card, FlipEdge, PageKind, PrintPage, PrintSettings};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    /// Cards in collection order, as returned by the set listing.
    pub cards: Vec<Card>,
    #[serde(default)]
    pub double_sided: bool,
    pub flip_edge: Option<FlipEdge>,
    /// Overrides the grid-derived capacity. Signed so that negatives reach validation.
    pub page_capacity: Option<i64>,
    pub cells_per_row: Option<i64>,
    pub page_size: Option<PageSize>,
    pub custom_page_size: Option<PageDimensions>,
    pub card_dimensions: Option<CardDimensions>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub separator_count: usize,
    /// Physical sheets, i.e. front pages.
    pub sheet_count: usize,
    pub cells_per_row: usize,
    pub page_capacity: usize,
    pub pages: Vec<PrintPage>,
}

/// Works out the effective print settings for a request.
///
/// Explicit `page_capacity` / `cells_per_row` win; anything missing comes from
/// the sheet grid for the requested (or configured) paper and card size.
pub fn resolve_settings(req: &LayoutRequest, config: &Config) -> Result<PrintSettings, AppError> {
    let page = req
        .page_size
        .unwrap_or(config.default_page_size)
        .resolve(req.custom_page_size);
    let card = req.card_dimensions.unwrap_or_default();
    let grid = calculate_cards_per_page(&page, &card);
    let card_does_not_fit = || {
        AppError::Validation(format!(
            "Card of {}x{} mm does not fit on a {}x{} mm page",
            card.width, card.height, page.width, page.height
        ))
    };

    let page_capacity = match req.page_capacity {
        Some(v) => positive_dimension("page_capacity", v)?,
        None if grid.cells_per_page == 0 => return Err(card_does_not_fit()),
        None => grid.cells_per_page,
    };
    let cells_per_row = match req.cells_per_row {
        Some(v) => positive_dimension("cells_per_row", v)?,
        None if grid.cells_per_row == 0 => return Err(card_does_not_fit()),
        None => grid.cells_per_row,
    };

    Ok(PrintSettings {
        page_capacity,
        cells_per_row,
        flip_edge: req.flip_edge.unwrap_or(config.default_flip_edge),
        double_sided: req.double_sided,
    })
}

/// POST /api/v1/separators/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    let max_cards = state.config.max_cards_per_layout;
    if req.cards.len() > max_cards {
        return Err(AppError::Validation(format!(
            "Too many cards: {} (limit {max_cards})",
            req.cards.len()
        )));
    }

    let settings = resolve_settings(&req, &state.config)?;
    let cards: Vec<Arc<Card>> = req.cards.into_iter().map(Arc::new).collect();
    let (separators, pages) = layout_separators(&cards, &settings)?;

    let sheet_count = pages.iter().filter(|p| p.kind == PageKind::Front).count();
    info!(
        "Laid out {} separators on {} sheets ({} per page, {} per row, double_sided={})",
        separators.len(),
        sheet_count,
        settings.page_capacity,
        settings.cells_per_row,
        settings.double_sided
    );

    Ok(Json(LayoutResponse {
        separator_count: separators.len(),
        sheet_count,
        cells_per_row: settings.cells_per_row,
        page_capacity: settings.page_capacity,
        pages,
    }))
}
