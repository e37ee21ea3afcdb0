// Separator tab layout: pairing, pagination, and duplex flip handling.
// Everything except `handlers` is pure and synchronous; the handler calls it inline.

pub mod chunking;
pub mod composer;
pub mod error;
pub mod flip;
pub mod handlers;
pub mod models;
pub mod pairing;

pub use composer::layout_separators;
pub use error::LayoutError;
pub use models::{Card, FlipEdge, PageKind, PrintPage, PrintSettings};
