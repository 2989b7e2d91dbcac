//! Unitarity bounds saturated by the HQET-predicted BGL coefficients.

use hqet_core::sector::{NON_STRANGE_PREFIX, STRANGE_PREFIX};
use hqet_core::{hqet_key, HqetConstants, HqetError, Options, Parameters, Sector};
use tracing::{debug, info};

use crate::bgl::BglCoefficients;
use crate::channel::{saturation, z_order_bound, Channel};
use crate::report::{BoundEntry, BoundKind, BoundReport};

/// HQET-side bounds of the six channels.
///
/// Each channel sums the squared coefficients of its member form factors
/// over both spectator sectors, weighted by the number of light flavours
/// `n_f` (u, d) and `n_s` (s).
#[derive(Debug, Clone, PartialEq)]
pub struct HqetUnitarityBounds {
    table: BglCoefficients,
    n_f: f64,
    n_s: f64,
    order: usize,
}

impl HqetUnitarityBounds {
    /// Binds the bounds to `params` and `options`.
    pub fn new(params: &Parameters, options: &Options) -> Result<Self, HqetError> {
        Self::with_constants(params, options, &HqetConstants::default())
    }

    /// Binds the bounds with explicit HQET inputs.
    pub fn with_constants(
        params: &Parameters,
        options: &Options,
        constants: &HqetConstants,
    ) -> Result<Self, HqetError> {
        let order = z_order_bound(options)?;
        let table = BglCoefficients::with_constants(params, options, constants)?;
        let n_f = params.get(&hqet_key(NON_STRANGE_PREFIX, "n_f"))?;
        let n_s = params.get(&hqet_key(STRANGE_PREFIX, "n_s"))?;
        debug!(n_f, n_s, z_order = order, "bound HQET unitarity sums");
        Ok(Self::from_table(table, n_f, n_s, order))
    }

    /// Builds the bounds from an existing table.
    pub fn from_table(table: BglCoefficients, n_f: f64, n_s: f64, order: usize) -> Self {
        Self {
            table,
            n_f,
            n_s,
            order,
        }
    }

    /// The underlying coefficient table.
    pub fn table(&self) -> &BglCoefficients {
        &self.table
    }

    /// Highest z power summed.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Multiplicity of `sector`.
    pub fn multiplicity(&self, sector: Sector) -> f64 {
        match sector {
            Sector::NonStrange => self.n_f,
            Sector::Strange => self.n_s,
        }
    }

    /// Bound of `channel`.
    pub fn bound(&self, channel: Channel) -> f64 {
        let rows: Vec<([f64; 3], f64)> = Sector::ALL
            .into_iter()
            .flat_map(|sector| {
                channel.members().iter().map(move |&ff| {
                    (self.table.coefficients(sector, ff), self.multiplicity(sector))
                })
            })
            .collect();
        let value = saturation(rows.iter().map(|(a, n)| (a, *n)), self.order);
        debug!(%channel, z_order = self.order, value, "HQET bound");
        value
    }

    /// All six channels.
    pub fn report(&self) -> BoundReport {
        let entries: Vec<BoundEntry> = Channel::ALL
            .into_iter()
            .map(|channel| BoundEntry {
                channel,
                value: self.bound(channel),
            })
            .collect();
        info!(z_order = self.order, channels = entries.len(), "HQET bounds evaluated");
        BoundReport {
            kind: BoundKind::Hqet,
            z_order: Some(self.order),
            entries,
        }
    }
}
