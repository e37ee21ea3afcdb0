//! Page composition — turns separator pairs into the ordered list of print pages.
//!
//! For every chunk of `page_capacity` pairs a front page is emitted with the
//! chunk's front faces in order. When printing double-sided, the matching back
//! page follows immediately, its faces run through the flip transformation so
//! each back lands behind its front once the sheet is turned.

use std::sync::Arc;

use tracing::debug;

use crate::separators::chunking::chunk_into_pages;
use crate::separators::error::{require_nonzero, LayoutError};
use crate::separators::flip::apply_flip_transformation;
use crate::separators::models::{Card, Face, PageKind, PrintPage, PrintSettings, SeparatorPair};
use crate::separators::pairing::generate_separator_pairs;

/// Lays out `separators` onto print pages.
///
/// Both grid dimensions are validated up front, so an invalid setting fails
/// even when there is nothing to print.
pub fn generate_print_pages(
    separators: &[SeparatorPair],
    settings: &PrintSettings,
) -> Result<Vec<PrintPage>, LayoutError> {
    require_nonzero("page_capacity", settings.page_capacity)?;
    require_nonzero("cells_per_row", settings.cells_per_row)?;

    let chunks = chunk_into_pages(separators, settings.page_capacity)?;
    let sides = if settings.double_sided { 2 } else { 1 };
    let mut pages = Vec::with_capacity(chunks.len() * sides);

    for chunk in chunks {
        let fronts: Vec<Face> = chunk.iter().map(|sep| sep.front.clone()).collect();
        pages.push(PrintPage {
            kind: PageKind::Front,
            cards: fronts,
        });

        if settings.double_sided {
            let backs: Vec<Face> = chunk.iter().map(|sep| sep.back.clone()).collect();
            let flipped =
                apply_flip_transformation(&backs, settings.flip_edge, settings.cells_per_row)?;
            pages.push(PrintPage {
                kind: PageKind::Back,
                cards: flipped,
            });
        }
    }

    debug!(
        "Composed {} pages from {} separators ({:?} flip, double_sided={})",
        pages.len(),
        separators.len(),
        settings.flip_edge,
        settings.double_sided
    );

    Ok(pages)
}

/// Full pipeline: cards → separator pairs → print pages.
pub fn layout_separators(
    cards: &[Arc<Card>],
    settings: &PrintSettings,
) -> Result<(Vec<SeparatorPair>, Vec<PrintPage>), LayoutError> {
    let separators = generate_separator_pairs(cards);
    let pages = generate_print_pages(&separators, settings)?;
    Ok((separators, pages))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::separators::models::{FlipEdge, BOUNDARY_NAME};

    fn make_cards(count: usize) -> Vec<Arc<Card>> {
        (1..=count)
            .map(|n| {
                Arc::new(Card {
                    id: format!("OP01-{n:03}"),
                    card_set_id: format!("OP01-{n:03}"),
                    name: format!("Card {n}"),
                    cost: Some("1".to_string()),
                    power: Some("1000".to_string()),
                    image: Some(format!("https://example.com/OP01-{n:03}.jpg")),
                    color: None,
                    card_type: None,
                    rarity: None,
                    attribute: None,
                })
            })
            .collect()
    }

    fn settings(capacity: usize, per_row: usize, edge: FlipEdge, double: bool) -> PrintSettings {
        PrintSettings {
            page_capacity: capacity,
            cells_per_row: per_row,
            flip_edge: edge,
            double_sided: double,
        }
    }

    fn page_names(page: &PrintPage) -> Vec<&str> {
        page.cards.iter().map(|f| f.name()).collect()
    }

    fn kinds(pages: &[PrintPage]) -> Vec<PageKind> {
        pages.iter().map(|p| p.kind).collect()
    }

    // ── single vs double sided ──────────────────────────────────────────────

    #[test]
    fn test_single_sided_has_only_front_pages() {
        let separators = generate_separator_pairs(&make_cards(2)); // 3 separators
        let pages =
            generate_print_pages(&separators, &settings(2, 2, FlipEdge::Long, false)).unwrap();
        assert_eq!(kinds(&pages), vec![PageKind::Front, PageKind::Front]);
    }

    #[test]
    fn test_double_sided_alternates_front_and_back() {
        let separators = generate_separator_pairs(&make_cards(2));
        let pages =
            generate_print_pages(&separators, &settings(2, 2, FlipEdge::Long, true)).unwrap();
        assert_eq!(
            kinds(&pages),
            vec![PageKind::Front, PageKind::Back, PageKind::Front, PageKind::Back]
        );
    }

    #[test]
    fn test_front_faces_are_unflipped() {
        let separators = generate_separator_pairs(&make_cards(2));
        let pages =
            generate_print_pages(&separators, &settings(3, 3, FlipEdge::Long, true)).unwrap();
        assert_eq!(page_names(&pages[0]), vec!["Card 1", "Card 2", BOUNDARY_NAME]);
    }

    #[test]
    fn test_short_edge_back_page_is_reversed() {
        let separators = generate_separator_pairs(&make_cards(2));
        let pages =
            generate_print_pages(&separators, &settings(3, 3, FlipEdge::Short, true)).unwrap();
        // Backs before flipping: boundary, Card 1, Card 2.
        assert_eq!(page_names(&pages[1]), vec!["Card 2", "Card 1", BOUNDARY_NAME]);
    }

    #[test]
    fn test_long_edge_back_page_two_per_row() {
        let separators = generate_separator_pairs(&make_cards(6)); // 7 separators
        let pages =
            generate_print_pages(&separators, &settings(6, 2, FlipEdge::Long, true)).unwrap();
        assert_eq!(
            page_names(&pages[0]),
            vec!["Card 1", "Card 2", "Card 3", "Card 4", "Card 5", "Card 6"]
        );
        assert_eq!(
            page_names(&pages[1]),
            vec!["Card 1", BOUNDARY_NAME, "Card 3", "Card 2", "Card 5", "Card 4"]
        );
    }

    // ── pagination ──────────────────────────────────────────────────────────

    #[test]
    fn test_multiple_pages_with_short_last_sheet() {
        let separators = generate_separator_pairs(&make_cards(10)); // 11 separators
        let pages =
            generate_print_pages(&separators, &settings(4, 2, FlipEdge::Long, true)).unwrap();
        assert_eq!(pages.len(), 6);
        let lengths: Vec<usize> = pages.iter().map(|p| p.cards.len()).collect();
        assert_eq!(lengths, vec![4, 4, 4, 4, 3, 3]);
        for (i, page) in pages.iter().enumerate() {
            let expected = if i % 2 == 0 { PageKind::Front } else { PageKind::Back };
            assert_eq!(page.kind, expected);
        }
    }

    #[test]
    fn test_page_counts_match_chunk_count() {
        for n in 1..=20 {
            let separators = generate_separator_pairs(&make_cards(n));
            let chunk_count = separators.len().div_ceil(4);

            let single =
                generate_print_pages(&separators, &settings(4, 2, FlipEdge::Long, false)).unwrap();
            assert_eq!(single.len(), chunk_count);
            assert!(single.iter().all(|p| p.kind == PageKind::Front));

            let double =
                generate_print_pages(&separators, &settings(4, 2, FlipEdge::Short, true)).unwrap();
            assert_eq!(double.len(), 2 * chunk_count);
        }
    }

    #[test]
    fn test_back_page_keeps_card_identity() {
        let cards = make_cards(3);
        let (_, pages) = layout_separators(&cards, &settings(4, 2, FlipEdge::Long, true)).unwrap();
        // Backs: boundary, C1, C2, C3 → long flip (2 per row): C1, boundary, C3, C2.
        assert!(pages[1].cards[0].is_same_card(&cards[0]));
        assert_eq!(pages[1].cards[1], Face::Boundary);
        assert!(pages[1].cards[2].is_same_card(&cards[2]));
        assert!(pages[1].cards[3].is_same_card(&cards[1]));
    }

    // ── edge cases ──────────────────────────────────────────────────────────

    #[test]
    fn test_no_separators_no_pages() {
        let pages = generate_print_pages(&[], &settings(6, 3, FlipEdge::Long, true)).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected_before_output() {
        let separators = generate_separator_pairs(&make_cards(3));
        let err = generate_print_pages(&separators, &settings(0, 3, FlipEdge::Long, true))
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidPageCapacity {
                field: "page_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_cells_per_row_rejected_even_single_sided() {
        let separators = generate_separator_pairs(&make_cards(3));
        let err = generate_print_pages(&separators, &settings(4, 0, FlipEdge::Long, false))
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidPageCapacity {
                field: "cells_per_row",
                ..
            }
        ));
        assert!(generate_print_pages(&[], &settings(4, 0, FlipEdge::Long, false)).is_err());
    }

    // ── complete workflow ───────────────────────────────────────────────────

    #[test]
    fn test_five_cards_on_one_three_by_two_sheet() {
        let (separators, pages) =
            layout_separators(&make_cards(5), &settings(6, 3, FlipEdge::Long, true)).unwrap();
        assert_eq!(separators.len(), 6);
        assert_eq!(pages.len(), 2);

        // [C1 C2 C3]
        // [C4 C5 --]
        assert_eq!(
            page_names(&pages[0]),
            vec!["Card 1", "Card 2", "Card 3", "Card 4", "Card 5", BOUNDARY_NAME]
        );
        // Backs before flip: [-- C1 C2] [C3 C4 C5]
        assert_eq!(
            page_names(&pages[1]),
            vec!["Card 2", "Card 1", BOUNDARY_NAME, "Card 5", "Card 4", "Card 3"]
        );
    }
}
