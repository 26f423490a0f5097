//! Operator dispatch
//!
//! Maps each operator to its lookup table and hands the resolved directive
//! to the applier. A failing directive is logged and never stops the rest of
//! the name from being processed.

use crate::assets::{palette, FlagLibrary, Lookup};
use crate::config::AssetConfig;
use crate::customizer::CustomizationError;
use crate::scene::{applier, MaterialSink, SceneQuery, ShipId};

use super::{Directive, DirectiveParser, Operator};

/// What happened while processing one name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Recognized operators seen
    pub directives: usize,
    /// Directives written to the host without error
    pub applied: usize,
    /// Characters in operator position that are not operators
    pub unknown_operators: usize,
    /// Values missing from their operator's table
    pub unresolved_values: usize,
    /// Directives whose application failed on the host
    pub failed_operators: usize,
    /// Material slots written
    pub materials_written: usize,
}

/// Resolves operators through the lookup tables and applies the result
pub struct OperatorDispatcher {
    flags: FlagLibrary,
}

impl OperatorDispatcher {
    /// Create a dispatcher reading flags from the configured asset directory
    pub fn new(assets: &AssetConfig) -> Self {
        Self {
            flags: FlagLibrary::new(assets),
        }
    }

    /// Flag texture table
    pub const fn flags(&self) -> &FlagLibrary {
        &self.flags
    }

    /// Mutable flag texture table
    pub fn flags_mut(&mut self) -> &mut FlagLibrary {
        &mut self.flags
    }

    /// Resolve an operator's value to a directive
    pub fn resolve(&mut self, operator: Operator, value: Option<char>) -> Lookup<Directive> {
        let category = operator.category();
        if operator.is_texture() {
            self.flags
                .resolve(value)
                .map(|texture| Directive::Texture { category, texture })
        } else {
            palette::resolve(value).map(|color| Directive::Color { category, color })
        }
    }

    /// Handle one operator character and its value
    ///
    /// Returns whether the value character was consumed, which is the case
    /// for every recognized operator even when the value is unknown. Unknown
    /// colors are skipped; unknown flags apply the white default texture.
    pub fn dispatch<H>(
        &mut self,
        host: &mut H,
        ship: ShipId,
        ship_name: &str,
        operator: char,
        value: Option<char>,
        report: &mut ParseReport,
    ) -> bool
    where
        H: SceneQuery + MaterialSink + ?Sized,
    {
        let Some(op) = Operator::from_char(operator) else {
            log::warn!("Unknown operator '{}' in {}", operator, ship_name);
            report.unknown_operators += 1;
            return false;
        };
        report.directives += 1;

        let directive = match self.resolve(op, value) {
            Lookup::Found(directive) => directive,
            Lookup::Fallback(directive) => {
                report.unresolved_values += 1;
                if !op.is_texture() {
                    return true;
                }
                directive
            }
        };

        match applier::apply(host, ship, ship_name, &directive) {
            Ok(written) => {
                report.applied += 1;
                report.materials_written += written;
            }
            Err(source) => {
                let err = CustomizationError::Operator { operator, ship, source };
                log::error!("{}", err);
                report.failed_operators += 1;
            }
        }
        true
    }

    /// Run every directive in `name` against a ship
    pub fn process_name<H>(&mut self, host: &mut H, ship: ShipId, name: &str) -> ParseReport
    where
        H: SceneQuery + MaterialSink + ?Sized,
    {
        let mut report = ParseReport::default();
        let mut parser = DirectiveParser::new(name);

        while let Some(raw) = parser.next() {
            log::debug!("Processing {}...", name);
            if self.dispatch(host, ship, name, raw.operator, raw.value, &mut report) {
                parser.consume_value();
            }
        }

        report
    }
}
