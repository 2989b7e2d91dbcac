//! Unitarity channels and the truncation order of the bound sums.

use std::fmt;

use hqet_core::{ErrorInfo, HqetError, Options};
use serde::{Deserialize, Serialize};

use crate::bgl::BglFormFactor;

/// `J^P` channel of the `b -> c` current two-point function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Scalar current, `0^+`.
    #[serde(rename = "0+")]
    ZeroPlus,
    /// Pseudoscalar current, `0^-`.
    #[serde(rename = "0-")]
    ZeroMinus,
    /// Vector current, `1^+`.
    #[serde(rename = "1+")]
    OnePlus,
    /// Axial current, `1^-`.
    #[serde(rename = "1-")]
    OneMinus,
    /// Tensor current, `1^-`.
    #[serde(rename = "1-_T")]
    OneMinusTensor,
    /// Tensor current, `1^+`.
    #[serde(rename = "1+_T")]
    OnePlusTensor,
}

impl Channel {
    /// All channels bounded on the HQET side.
    pub const ALL: [Channel; 6] = [
        Channel::ZeroPlus,
        Channel::ZeroMinus,
        Channel::OnePlus,
        Channel::OneMinus,
        Channel::OneMinusTensor,
        Channel::OnePlusTensor,
    ];

    /// Channels of the vector and axial currents, which have OPE and BGL
    /// counterparts.
    pub const CURRENTS: [Channel; 4] = [
        Channel::ZeroPlus,
        Channel::ZeroMinus,
        Channel::OnePlus,
        Channel::OneMinus,
    ];

    /// Short label such as `1-_T`.
    pub fn label(self) -> &'static str {
        match self {
            Channel::ZeroPlus => "0+",
            Channel::ZeroMinus => "0-",
            Channel::OnePlus => "1+",
            Channel::OneMinus => "1-",
            Channel::OneMinusTensor => "1-_T",
            Channel::OnePlusTensor => "1+_T",
        }
    }

    /// Looks up a channel by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.label() == label)
    }

    /// Form factors saturating the channel.
    pub fn members(self) -> &'static [BglFormFactor] {
        use BglFormFactor::*;
        match self {
            Channel::ZeroPlus => &[S1, S2, S3],
            Channel::ZeroMinus => &[P1, P2, P3],
            Channel::OnePlus => &[V1, V2, V3, V4, V5, V6, V7],
            Channel::OneMinus => &[A1, A2, A3, A4, A5, A6, A7],
            Channel::OneMinusTensor => &[FT, T1, T1Bar, T7, T8, T9, T10],
            Channel::OnePlusTensor => &[T2, T2Bar, T23, T23Bar, T4, T5, T6],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highest z power summed into a bound, read from `z-order-bound`.
///
/// Only orders 1 and 2 are supported; anything else is rejected instead of
/// falling back to the default.
pub fn z_order_bound(options: &Options) -> Result<usize, HqetError> {
    match options.get("z-order-bound").unwrap_or("2") {
        "1" => Ok(1),
        "2" => Ok(2),
        other => Err(HqetError::Config(
            ErrorInfo::new(
                "zorder-bound-unsupported",
                "only z-orders 1 and 2 are supported for the unitarity bounds",
            )
            .with_context("option", "z-order-bound")
            .with_context("value", other)
            .with_hint("set z-order-bound to 1 or 2"),
        )),
    }
}

/// `sum_i sum_{k <= order} a_{i,k}^2 * multiplicity_i`.
pub fn saturation<'a, I>(terms: I, order: usize) -> f64
where
    I: IntoIterator<Item = (&'a [f64; 3], f64)>,
{
    terms
        .into_iter()
        .map(|(coefficients, multiplicity)| {
            coefficients
                .iter()
                .take(order + 1)
                .map(|a| a * a * multiplicity)
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_factor_saturates_exactly_one_channel() {
        for ff in BglFormFactor::ALL {
            let owners = Channel::ALL
                .into_iter()
                .filter(|channel| channel.members().contains(&ff))
                .count();
            assert_eq!(owners, 1, "{ff}");
        }
    }

    #[test]
    fn order_switch_is_strict() {
        assert_eq!(z_order_bound(&Options::new()).unwrap(), 2);
        assert_eq!(z_order_bound(&Options::new().with("z-order-bound", "1")).unwrap(), 1);
        for value in ["0", "3", "two"] {
            let err = z_order_bound(&Options::new().with("z-order-bound", value)).unwrap_err();
            assert_eq!(err.info().code, "zorder-bound-unsupported");
            assert_eq!(err.info().context["value"], value);
        }
    }

    #[test]
    fn labels_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_label(channel.label()), Some(channel));
        }
        assert_eq!(Channel::from_label("2+"), None);
    }
}
