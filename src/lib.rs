//! udoc-trace: conditional debug tracing for the udoc documentation generator.
//!
//! udoc scans header files for ctags-like symbol records and emits API
//! documentation; this crate is its diagnostic channel. A process-wide flag
//! (read from `UDOC_DEBUG` at load, or set programmatically) gates every
//! trace point, and an injectable [`Tracer`] makes each trace point testable
//! without shared process state.

pub mod debug;

mod record;
pub use record::{SymbolEvent, TagRecord, TagValue};

mod render;
pub use render::ctag_line;

mod tracer;
pub use tracer::Tracer;
