// Sheet geometry: how many separator cells fit on one physical print page.
// Pure arithmetic, no I/O; safe to call inline from request handlers.

pub mod sheet;

pub use sheet::{calculate_cards_per_page, CardDimensions, PageDimensions, PageSize};
