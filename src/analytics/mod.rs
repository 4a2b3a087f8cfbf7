//! Visit counting
//!
//! The only analytics this service keeps is a per-slug counter. Increments
//! are dispatched off the request path by [`VisitCounter`] and applied by a
//! [`VisitSink`] as an atomic add in the store.

pub mod sink;
pub mod visit_counter;

pub use sink::VisitSink;
pub use visit_counter::VisitCounter;
