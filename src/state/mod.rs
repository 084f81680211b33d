//! DOM-free application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every decision the page makes lives here as plain Rust so it can be tested
//! natively; `bindings` only samples the browser and paints results.

pub mod analytics;
pub mod lazy_images;
pub mod nav;
pub mod schedule;
pub mod scroll;
pub mod theme;
