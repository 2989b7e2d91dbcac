//! Unitarity bounds saturated by fitted BGL coefficients.

use hqet_core::parameters::bgl1997_key;
use hqet_core::{HqetError, Options, Parameters};
use tracing::{debug, info};

use crate::channel::{z_order_bound, Channel};
use crate::report::{BoundEntry, BoundKind, BoundReport};

const B_TO_DSTAR: &str = "B->D^*";
const B_TO_D: &str = "B->D";
const N_F_KEY: &str = "B(*)->D(*)::n_f@BGL1997";

/// Bounds of the four current channels from the `@BGL1997` coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct BglParametrisationBounds {
    g: [f64; 4],
    f: [f64; 4],
    f1: [f64; 4],
    f2: [f64; 4],
    f_plus: [f64; 4],
    f_zero: [f64; 4],
    n_f: f64,
    order: usize,
}

fn read(params: &Parameters, process: &str, label: &str) -> Result<[f64; 4], HqetError> {
    let mut a = [0.0; 4];
    for (index, slot) in a.iter_mut().enumerate() {
        *slot = params.get(&bgl1997_key(process, label, index))?;
    }
    Ok(a)
}

fn squares(order: usize, series: &[&[f64; 4]]) -> f64 {
    series
        .iter()
        .map(|a| a.iter().take(order + 1).map(|x| x * x).sum::<f64>())
        .sum()
}

impl BglParametrisationBounds {
    /// Reads the coefficients from `params`.
    pub fn new(params: &Parameters, options: &Options) -> Result<Self, HqetError> {
        let order = z_order_bound(options)?;
        let n_f = params.get(N_F_KEY)?;
        debug!(n_f, z_order = order, "bound BGL-parametrisation sums");
        Ok(Self {
            g: read(params, B_TO_DSTAR, "g")?,
            f: read(params, B_TO_DSTAR, "f")?,
            f1: read(params, B_TO_DSTAR, "F1")?,
            f2: read(params, B_TO_DSTAR, "F2")?,
            f_plus: read(params, B_TO_D, "f+")?,
            f_zero: read(params, B_TO_D, "f0")?,
            n_f,
            order,
        })
    }

    /// Bound of `channel`; the tensor channels are not covered.
    pub fn bound(&self, channel: Channel) -> Option<f64> {
        let series: &[&[f64; 4]] = match channel {
            Channel::ZeroPlus => &[&self.f_zero],
            Channel::ZeroMinus => &[&self.f2],
            Channel::OnePlus => &[&self.f, &self.f1],
            Channel::OneMinus => &[&self.f_plus, &self.g],
            Channel::OneMinusTensor | Channel::OnePlusTensor => return None,
        };
        Some(squares(self.order, series) * self.n_f)
    }

    /// The four current channels.
    pub fn report(&self) -> BoundReport {
        let entries: Vec<BoundEntry> = Channel::CURRENTS
            .into_iter()
            .filter_map(|channel| {
                self.bound(channel)
                    .map(|value| BoundEntry { channel, value })
            })
            .collect();
        info!(z_order = self.order, "BGL-parametrisation bounds evaluated");
        BoundReport {
            kind: BoundKind::Bgl,
            z_order: Some(self.order),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Parameters {
        Parameters::defaults()
            .with_overrides([
                ("B->D^*::a^g_0@BGL1997", 0.1),
                ("B->D^*::a^g_2@BGL1997", 0.2),
                ("B->D^*::a^f_1@BGL1997", 0.3),
                ("B->D^*::a^F1_0@BGL1997", 0.4),
                ("B->D^*::a^F2_3@BGL1997", 5.0),
                ("B->D::a^f+_0@BGL1997", 0.5),
                ("B->D::a^f0_1@BGL1997", 0.6),
                ("B->D::a^fT_0@BGL1997", 7.0),
            ])
            .unwrap()
    }

    #[test]
    fn channels_sum_their_own_series() {
        let bounds = BglParametrisationBounds::new(&params(), &Options::new()).unwrap();
        let close = |a: f64, b: f64| (a - b).abs() < 1e-15;
        assert!(close(bounds.bound(Channel::ZeroPlus).unwrap(), 2.0 * 0.36));
        assert_eq!(bounds.bound(Channel::ZeroMinus), Some(0.0));
        assert!(close(bounds.bound(Channel::OnePlus).unwrap(), 2.0 * (0.09 + 0.16)));
        assert!(close(bounds.bound(Channel::OneMinus).unwrap(), 2.0 * (0.25 + 0.01 + 0.04)));
        assert_eq!(bounds.bound(Channel::OnePlusTensor), None);
    }

    #[test]
    fn first_order_drops_quadratic_terms() {
        let options = Options::new().with("z-order-bound", "1");
        let bounds = BglParametrisationBounds::new(&params(), &options).unwrap();
        let one_minus = bounds.bound(Channel::OneMinus).unwrap();
        assert!((one_minus - 2.0 * (0.25 + 0.01)).abs() < 1e-15);
        assert_eq!(bounds.report().entries.len(), 4);
    }
}
