//! Isgur-Wise functions as truncated series in `z(w) - z(1)`.
//!
//! Every function is expanded in powers of `(w - 1)` around zero recoil and
//! each power of `(w - 1)` is re-expanded in the conformal variable. The
//! switches in [`ZOrders`] decide which powers of `z - z(1)` survive; the same
//! mask is applied to every use of a given function.

use hqet_core::options::{MODEL_LP, SU3F_LIMIT_SSLP, Z_ORDER_LP, Z_ORDER_SLP, Z_ORDER_SSLP};
use hqet_core::parameters::XI_SYMBOLS;
use hqet_core::sector::{hqet_key, NON_STRANGE_PREFIX};
use hqet_core::{HqetError, Options, Parameters, ZMap};
use serde::{Deserialize, Serialize};

/// Ansatz of the leading-power function `xi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LpModel {
    /// Direct power series in `(w - 1)`.
    PowerSeries,
    /// Exponential of the two leading terms, re-expanded in the same basis.
    Exponential,
}

impl LpModel {
    /// Resolves the `model-lp` option.
    pub fn from_options(options: &Options) -> Result<Self, HqetError> {
        Ok(match options.resolve(&MODEL_LP)? {
            "exponential" => LpModel::Exponential,
            _ => LpModel::PowerSeries,
        })
    }
}

/// Highest retained power of `z - z(1)` per expansion tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrders {
    /// Leading power, 2..=5.
    pub lp: u32,
    /// Subleading power, 1..=2.
    pub slp: u32,
    /// Subsubleading power, 0..=2.
    pub sslp: u32,
}

impl Default for ZOrders {
    fn default() -> Self {
        Self {
            lp: 3,
            slp: 2,
            sslp: 1,
        }
    }
}

impl ZOrders {
    /// Resolves the three `z-order-*` options.
    pub fn from_options(options: &Options) -> Result<Self, HqetError> {
        Ok(Self {
            lp: options.resolve_order(&Z_ORDER_LP)?,
            slp: options.resolve_order(&Z_ORDER_SLP)?,
            sslp: options.resolve_order(&Z_ORDER_SSLP)?,
        })
    }

    /// Switch value (0 or 1) for the leading-power `z^order` terms.
    pub fn lp_switch(&self, order: u32) -> f64 {
        switch(self.lp >= order)
    }

    /// Switch value (0 or 1) for the subleading-power `z^order` terms.
    pub fn slp_switch(&self, order: u32) -> f64 {
        switch(self.slp >= order)
    }

    /// Switch value (0 or 1) for the subsubleading-power `z^order` terms.
    pub fn sslp_switch(&self, order: u32) -> f64 {
        switch(self.sslp >= order)
    }
}

fn switch(enabled: bool) -> f64 {
    if enabled {
        1.0
    } else {
        0.0
    }
}

/// Value and first two derivatives of a function at zero recoil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroRecoil {
    /// `f(1)`.
    pub value: f64,
    /// `f'(1)`.
    pub first: f64,
    /// `f''(1)`.
    pub second: f64,
}

impl ZeroRecoil {
    fn read(params: &Parameters, prefix: &str, symbol: &str) -> Result<Self, HqetError> {
        Ok(Self {
            value: params.get(&hqet_key(prefix, &format!("{symbol}(1)")))?,
            first: params.get(&hqet_key(prefix, &format!("{symbol}'(1)")))?,
            second: params.get(&hqet_key(prefix, &format!("{symbol}''(1)")))?,
        })
    }
}

/// Zero-recoil inputs of every Isgur-Wise function of one sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IwInputs {
    /// `xi^(n)(1)` for n = 1..=5.
    pub xi: [f64; 5],
    /// `chi_2` at zero recoil.
    pub chi2: ZeroRecoil,
    /// `chi_3` at zero recoil; its value vanishes by definition.
    pub chi3: ZeroRecoil,
    /// `eta` at zero recoil.
    pub eta: ZeroRecoil,
    /// Subsubleading `l_1..l_6` at zero recoil.
    pub l: [ZeroRecoil; 6],
}

impl IwInputs {
    /// Reads the inputs of `prefix`. The subsubleading functions come from
    /// `sslp_prefix`, which differs only in the SU(3)-flavour limit.
    pub fn from_parameters(
        params: &Parameters,
        prefix: &str,
        sslp_prefix: &str,
    ) -> Result<Self, HqetError> {
        let mut xi = [0.0; 5];
        for (slot, symbol) in xi.iter_mut().zip(XI_SYMBOLS) {
            *slot = params.get(&hqet_key(prefix, symbol))?;
        }
        let chi3 = ZeroRecoil {
            value: 0.0,
            first: params.get(&hqet_key(prefix, "chi_3'(1)"))?,
            second: params.get(&hqet_key(prefix, "chi_3''(1)"))?,
        };
        let mut l = [ZeroRecoil::default(); 6];
        for (k, slot) in l.iter_mut().enumerate() {
            *slot = ZeroRecoil::read(params, sslp_prefix, &format!("l_{}", k + 1))?;
        }
        Ok(Self {
            xi,
            chi2: ZeroRecoil::read(params, prefix, "chi_2")?,
            chi3,
            eta: ZeroRecoil::read(params, prefix, "eta")?,
            l,
        })
    }
}

/// Prefix of the subsubleading parameters for a transition with `prefix`.
pub fn sslp_prefix<'a>(prefix: &'a str, options: &Options) -> Result<&'a str, HqetError> {
    if prefix == NON_STRANGE_PREFIX {
        return Ok(prefix);
    }
    if options.resolve(&SU3F_LIMIT_SSLP)? == "1" {
        Ok(NON_STRANGE_PREFIX)
    } else {
        Ok(prefix)
    }
}

/// Re-expansions of `(w - 1)^n`, n = 1..=5, in powers of `dz = z - z(1)`.
///
/// `z3`, `z4` and `z5` carry the leading-power switches.
fn lp_powers(a: f64, dz: f64, orders: &ZOrders) -> [f64; 5] {
    let (a2, a3) = (a * a, a * a * a);
    let (a4, a5) = (a2 * a2, a3 * a2);
    let b = 1.0 + a;

    let z = dz;
    let z2 = z * z;
    let z3 = z2 * z * orders.lp_switch(3);
    let z4 = z2 * z2 * orders.lp_switch(4);
    let z5 = z3 * z2 * orders.lp_switch(5);

    let wm1 = 2.0 * b.powi(2) / a * z
        + (3.0 + a) * b.powi(3) / (2.0 * a2) * z2
        + (2.0 + a) * b.powi(4) / (2.0 * a3) * z3
        + (5.0 + 3.0 * a) * b.powi(5) / (8.0 * a4) * z4
        + (3.0 + 2.0 * a) * b.powi(6) / (8.0 * a5) * z5;

    let wm2 = 4.0 * b.powi(4) / a2 * z2
        + (6.0 + 2.0 * a) * b.powi(5) / a3 * z3
        + (25.0 + 14.0 * a + a2) * b.powi(6) / (4.0 * a4) * z4
        + (11.0 + 8.0 * a + a2) * b.powi(7) / (2.0 * a5) * z5;

    let wm3 = 8.0 * b.powi(6) / a3 * z3
        + (18.0 + 6.0 * a) * b.powi(7) / a4 * z4
        + (51.0 + 30.0 * a + a2) * b.powi(8) / (2.0 * a5) * z5;

    let wm4 = 16.0 * b.powi(8) / a4 * z4 + (48.0 + 16.0 * a) * b.powi(9) / a5 * z5;

    let wm5 = 32.0 * b.powi(10) / a5 * z5;

    [wm1, wm2, wm3, wm4, wm5]
}

/// Second-order re-expansions of `(w - 1)` and `(w - 1)^2`.
fn quadratic_powers(a: f64, z: f64, z2: f64) -> [f64; 2] {
    let b = 1.0 + a;
    let wm1 = 2.0 * b.powi(2) / a * z + (3.0 + a) * b.powi(3) / (2.0 * a * a) * z2;
    let wm2 = 4.0 * b.powi(4) / (a * a) * z2;
    [wm1, wm2]
}

fn quadratic(f: &ZeroRecoil, powers: [f64; 2]) -> f64 {
    f.value + f.first * powers[0] + f.second / 2.0 * powers[1]
}

/// The Isgur-Wise functions of one sector, truncated per [`ZOrders`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsgurWiseBank {
    map: ZMap,
    model: LpModel,
    orders: ZOrders,
    inputs: IwInputs,
}

impl IsgurWiseBank {
    /// Assembles a bank from explicit inputs.
    pub fn new(map: ZMap, model: LpModel, orders: ZOrders, inputs: IwInputs) -> Self {
        Self {
            map,
            model,
            orders,
            inputs,
        }
    }

    /// Reads the bank of the sector owning `prefix`.
    pub fn from_parameters(
        params: &Parameters,
        options: &Options,
        prefix: &str,
    ) -> Result<Self, HqetError> {
        let map = ZMap::new(params.get(&hqet_key(prefix, "a"))?)?;
        let inputs = IwInputs::from_parameters(params, prefix, sslp_prefix(prefix, options)?)?;
        Ok(Self::new(
            map,
            LpModel::from_options(options)?,
            ZOrders::from_options(options)?,
            inputs,
        ))
    }

    /// The conformal map.
    pub fn map(&self) -> &ZMap {
        &self.map
    }

    /// The leading-power ansatz.
    pub fn model(&self) -> LpModel {
        self.model
    }

    /// The truncation switches.
    pub fn orders(&self) -> &ZOrders {
        &self.orders
    }

    /// The zero-recoil inputs.
    pub fn inputs(&self) -> &IwInputs {
        &self.inputs
    }

    /// Leading-power function `xi(w)`.
    pub fn xi(&self, w: f64) -> f64 {
        let wm = lp_powers(self.map.a(), self.map.dz(w), &self.orders);
        let x = &self.inputs.xi;
        match self.model {
            LpModel::PowerSeries => {
                1.0 + x[0] * wm[0]
                    + x[1] / 2.0 * wm[1]
                    + x[2] / 6.0 * wm[2]
                    + x[3] / 24.0 * wm[3]
                    + x[4] / 120.0 * wm[4]
            }
            LpModel::Exponential => {
                (1.0 + x[0] * wm[0] - x[0] * wm[1] + x[0] * 2.0 / 3.0 * wm[2]
                    - x[0] / 3.0 * wm[3]
                    + x[0] * 2.0 / 15.0 * wm[4])
                    * (1.0 + x[1] * wm[0])
            }
        }
    }

    fn slp_powers(&self, w: f64) -> [f64; 2] {
        let z = self.map.dz(w);
        let z2 = z * z * self.orders.slp_switch(2);
        quadratic_powers(self.map.a(), z, z2)
    }

    /// Subleading function `chi_2(w)`.
    pub fn chi2(&self, w: f64) -> f64 {
        quadratic(&self.inputs.chi2, self.slp_powers(w))
    }

    /// Subleading function `chi_3(w)`.
    pub fn chi3(&self, w: f64) -> f64 {
        quadratic(&self.inputs.chi3, self.slp_powers(w))
    }

    /// Subleading function `eta(w)`.
    pub fn eta(&self, w: f64) -> f64 {
        quadratic(&self.inputs.eta, self.slp_powers(w))
    }

    /// All six subsubleading functions `l_1(w)..l_6(w)`.
    pub fn l(&self, w: f64) -> [f64; 6] {
        let z = self.map.dz(w) * self.orders.sslp_switch(1);
        let z2 = z * z * self.orders.sslp_switch(2);
        let powers = quadratic_powers(self.map.a(), z, z2);
        self.inputs.l.map(|f| quadratic(&f, powers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(orders: ZOrders) -> IsgurWiseBank {
        let mut inputs = IwInputs {
            xi: [-1.5, 3.0, 6.0, -9.0, 0.0],
            ..IwInputs::default()
        };
        inputs.chi2 = ZeroRecoil {
            value: 0.5,
            first: -1.0,
            second: 2.0,
        };
        inputs.l[0] = ZeroRecoil {
            value: 0.5,
            first: 1.0,
            second: 4.0,
        };
        IsgurWiseBank::new(ZMap::new(1.0).unwrap(), LpModel::PowerSeries, orders, inputs)
    }

    #[test]
    fn every_function_equals_its_zero_recoil_value_at_w_one() {
        let bank = bank(ZOrders::default());
        assert_eq!(bank.xi(1.0), 1.0);
        assert_eq!(bank.chi2(1.0), 0.5);
        assert_eq!(bank.chi3(1.0), 0.0);
        assert_eq!(bank.l(1.0)[0], 0.5);
    }

    #[test]
    fn disabling_sslp_freezes_l_at_zero_recoil() {
        let frozen = bank(ZOrders {
            sslp: 0,
            ..ZOrders::default()
        });
        assert_eq!(frozen.l(1.4)[0], 0.5);
        let moving = bank(ZOrders::default());
        assert_ne!(moving.l(1.4)[0], 0.5);
    }

    #[test]
    fn higher_lp_switches_only_add_higher_powers() {
        let low = bank(ZOrders {
            lp: 2,
            ..ZOrders::default()
        });
        let high = bank(ZOrders {
            lp: 3,
            ..ZOrders::default()
        });
        let w = 1.3;
        let dz = low.map().dz(w);
        let diff = high.xi(w) - low.xi(w);
        // the difference is O(dz^3)
        assert!(diff.abs() < 200.0 * dz.abs().powi(3));
    }
}
