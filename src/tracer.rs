//! Trace points consumed by the udoc pipeline.

use std::io::{self, Write};

use crate::debug;
use crate::record::{SymbolEvent, TagRecord};
use crate::render;

/// Conditional trace writer for the documentation pipeline.
///
/// Owns its output sink and its own enabled/verbose state, so each trace
/// point is testable in isolation without touching the process-wide flag.
/// [`Tracer::stdout`] builds the production instance from the global flag.
pub struct Tracer<W: Write> {
    out: W,
    enabled: bool,
    verbose: bool,
}

impl Tracer<io::Stdout> {
    /// Production tracer: writes to stdout, gated by [`debug::is_enabled`].
    pub fn stdout() -> Self {
        Tracer::new(io::stdout(), debug::is_enabled())
    }
}

impl<W: Write> Tracer<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Tracer {
            out,
            enabled,
            verbose: false,
        }
    }

    /// Also dump full header lists from [`Tracer::header_discovery`].
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable this tracer. Affects only subsequent calls.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one line of trace output. All trace points route through here.
    ///
    /// Best-effort by contract: a failed write is discarded, never surfaced
    /// to the host pipeline.
    pub fn emit(&mut self, text: &str) {
        if self.enabled {
            let _ = writeln!(self.out, "{}", text);
        }
    }

    /// Report how many header files the scanner found in `dir`.
    ///
    /// In verbose mode, also dumps the full header list on a second line.
    pub fn header_discovery(&mut self, headers: &[String], dir: &str) {
        if !self.enabled {
            return;
        }
        self.emit(&format!(
            "{} header files found in '{}'",
            headers.len(),
            dir
        ));
        if self.verbose {
            self.emit(&format!("\tsource_headers={:?}", headers));
        }
    }

    /// Dump one parsed symbol as a labeled multi-line block.
    pub fn symbol_parse(&mut self, event: &SymbolEvent) {
        if !self.enabled {
            return;
        }
        self.emit(&format!(
            "\n[ENTITY]: {header}::{symbol}\
             \n\tfilename={header}\n\tsymbol={symbol}\n\trole={role}\n\tline_n={line_n}\
             \n\tprototype={prototype}\n\tis_virtual={is_virtual}\n\tis_override={is_override}",
            header = event.filename,
            symbol = event.symbol,
            role = event.role,
            line_n = event.line_n,
            prototype = event.prototype,
            is_virtual = event.is_virtual,
            is_override = event.is_override,
        ));
    }

    /// Dump a raw tag record, keeping only its text-valued fields.
    pub fn ctag_load(&mut self, ctag: &TagRecord) {
        if !self.enabled {
            return;
        }
        self.emit(&render::ctag_line(ctag.text_fields()));
    }
}
