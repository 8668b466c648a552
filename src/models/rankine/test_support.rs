//! Analytic two-phase test fluid for exercising component models.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    exergy::{DeadState, Environment},
    thermo::{
        PropertyError, Quality, Saturation, State,
        capability::{HasEnthalpy, HasEntropy, HasPressure, HasQuality, StateFrom, ThermoModel},
        fluid::Water,
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Normal boiling point, K.
const T_B: f64 = 373.15;
/// Pressure at the normal boiling point, Pa.
const P_B: f64 = 101_325.0;
/// Latent heat, J/kg.
const L: f64 = 2.257e6;
/// Vapor gas constant, J/kg·K.
const R: f64 = 461.5;
const CP_LIQUID: f64 = 4184.0;
const CP_VAPOR: f64 = 2000.0;
/// Liquid density at zero pressure, kg/m³.
const RHO_LIQUID: f64 = 1000.0;
/// Liquid bulk modulus, Pa.
const BULK_MODULUS: f64 = 2.2e9;
/// Zero of liquid enthalpy and entropy, K.
const T_REF: f64 = 273.15;

/// Water-like fluid with closed-form properties.
///
/// - Saturation line from Clausius-Clapeyron with constant latent heat.
/// - Liquid with constant `cp` and a linear bulk modulus.
/// - Vapor as an ideal gas with constant `cp` above saturation.
///
/// Every query, including `(p, h)` and `(p, s)`, inverts exactly, so results
/// are deterministic and close to steam tables at low pressure.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ToyWater {
    entropy_bias: Option<(f64, f64)>,
}

/// Phase of a `(T, ρ)` state.
enum Phase {
    Liquid { p: f64 },
    Vapor { p: f64 },
    Mixture { x: f64 },
}

impl ToyWater {
    /// Lowers reported entropy by `bias` at pressures above `threshold`.
    ///
    /// State inversion from `(p, s)` ignores the bias, so entropy read back
    /// from a state disagrees with the entropy used to find it.
    pub(crate) fn with_entropy_bias(threshold: Pressure, bias: SpecificEntropy) -> Self {
        Self {
            entropy_bias: Some((
                threshold.get::<pascal>(),
                bias.get::<joule_per_kilogram_kelvin>(),
            )),
        }
    }

    pub(crate) fn saturation_temperature(pressure: Pressure) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t_sat(pressure.get::<pascal>()))
    }

    fn phase(state: &State<Water>) -> Result<Phase, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let rho = state.density.get::<kilogram_per_cubic_meter>();
        if !(t > 0.0 && rho > 0.0) {
            return Err(PropertyError::InvalidState {
                context: format!("T={t} K, rho={rho} kg/m3"),
            });
        }

        let rho_f = rho_liquid(p_sat(t));
        let rho_g = p_sat(t) / (R * t);
        Ok(if rho >= rho_f {
            Phase::Liquid {
                p: BULK_MODULUS * (rho / RHO_LIQUID - 1.0),
            }
        } else if rho <= rho_g {
            Phase::Vapor { p: rho * R * t }
        } else {
            let x = (1.0 / rho - 1.0 / rho_f) / (1.0 / rho_g - 1.0 / rho_f);
            Phase::Mixture {
                x: x.clamp(0.0, 1.0),
            }
        })
    }

    fn entropy_si(&self, t: f64, phase: &Phase) -> f64 {
        let (s, p) = match *phase {
            Phase::Liquid { p } => (s_liquid(t), p),
            Phase::Vapor { p } => (s_vapor(t, p), p),
            Phase::Mixture { x } => (s_liquid(t) + x * L / t, p_sat(t)),
        };
        match self.entropy_bias {
            Some((threshold, bias)) if p > threshold => s - bias,
            _ => s,
        }
    }
}

fn t_sat(p: f64) -> f64 {
    1.0 / (1.0 / T_B - (R / L) * (p / P_B).ln())
}

fn p_sat(t: f64) -> f64 {
    P_B * ((L / R) * (1.0 / T_B - 1.0 / t)).exp()
}

fn rho_liquid(p: f64) -> f64 {
    RHO_LIQUID * (1.0 + p / BULK_MODULUS)
}

fn h_liquid(t: f64, p: f64) -> f64 {
    CP_LIQUID * (t - T_REF) + p / RHO_LIQUID
}

fn s_liquid(t: f64) -> f64 {
    CP_LIQUID * (t / T_REF).ln()
}

fn h_sat_liquid(t: f64) -> f64 {
    h_liquid(t, p_sat(t))
}

fn h_vapor(t: f64, p: f64) -> f64 {
    let ts = t_sat(p);
    h_sat_liquid(ts) + L + CP_VAPOR * (t - ts)
}

fn s_vapor(t: f64, p: f64) -> f64 {
    let ts = t_sat(p);
    s_liquid(ts) + L / ts + CP_VAPOR * (t / ts).ln()
}

/// Mixture density at saturation temperature `t` and quality `x`.
fn rho_mixture(t: f64, x: f64) -> f64 {
    let rho_f = rho_liquid(p_sat(t));
    let rho_g = p_sat(t) / (R * t);
    1.0 / ((1.0 - x) / rho_f + x / rho_g)
}

fn state(t: f64, rho: f64) -> State<Water> {
    State::new(
        ThermodynamicTemperature::new::<kelvin>(t),
        MassDensity::new::<kilogram_per_cubic_meter>(rho),
        Water,
    )
}

fn positive_pressure(pressure: Pressure) -> Result<f64, PropertyError> {
    let p = pressure.get::<pascal>();
    if p > 0.0 {
        Ok(p)
    } else {
        Err(PropertyError::OutOfDomain {
            context: format!("p={p} Pa"),
        })
    }
}

impl ThermoModel for ToyWater {
    type Fluid = Water;
}

impl HasPressure for ToyWater {
    fn pressure(&self, state: &State<Water>) -> Result<Pressure, PropertyError> {
        let p = match Self::phase(state)? {
            Phase::Liquid { p } | Phase::Vapor { p } => p,
            Phase::Mixture { .. } => p_sat(state.temperature.get::<kelvin>()),
        };
        Ok(Pressure::new::<pascal>(p))
    }
}

impl HasEnthalpy for ToyWater {
    fn enthalpy(&self, state: &State<Water>) -> Result<SpecificEnthalpy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let h = match Self::phase(state)? {
            Phase::Liquid { p } => h_liquid(t, p),
            Phase::Vapor { p } => h_vapor(t, p),
            Phase::Mixture { x } => h_sat_liquid(t) + x * L,
        };
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }
}

impl HasEntropy for ToyWater {
    fn entropy(&self, state: &State<Water>) -> Result<SpecificEntropy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let phase = Self::phase(state)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            self.entropy_si(t, &phase),
        ))
    }
}

impl HasQuality for ToyWater {
    fn quality(&self, state: &State<Water>) -> Result<Option<Ratio>, PropertyError> {
        Ok(match Self::phase(state)? {
            Phase::Mixture { x } => Some(Ratio::new::<ratio>(x)),
            Phase::Liquid { .. } | Phase::Vapor { .. } => None,
        })
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Pressure)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, temperature, pressure): (Water, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Water>, Self::Error> {
        let p = positive_pressure(pressure)?;
        let t = temperature.get::<kelvin>();
        if p >= p_sat(t) {
            Ok(state(t, rho_liquid(p)))
        } else {
            Ok(state(t, p / (R * t)))
        }
    }
}

impl StateFrom<(Water, Pressure, Quality)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, pressure, quality): (Water, Pressure, Quality),
    ) -> Result<State<Water>, Self::Error> {
        let t = t_sat(positive_pressure(pressure)?);
        Ok(state(
            t,
            rho_mixture(t, quality.into_inner().get::<ratio>()),
        ))
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Quality)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, temperature, quality): (Water, ThermodynamicTemperature, Quality),
    ) -> Result<State<Water>, Self::Error> {
        let t = temperature.get::<kelvin>();
        Ok(state(
            t,
            rho_mixture(t, quality.into_inner().get::<ratio>()),
        ))
    }
}

impl StateFrom<(Water, Pressure, Saturation)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, saturation): (Water, Pressure, Saturation),
    ) -> Result<State<Water>, Self::Error> {
        self.state_from((fluid, pressure, saturation.quality()))
    }
}

impl StateFrom<(Water, Pressure, SpecificEnthalpy)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, pressure, enthalpy): (Water, Pressure, SpecificEnthalpy),
    ) -> Result<State<Water>, Self::Error> {
        let p = positive_pressure(pressure)?;
        let h = enthalpy.get::<joule_per_kilogram>();
        let ts = t_sat(p);
        let hf = h_sat_liquid(ts);

        if h < hf {
            Ok(state(
                T_REF + (h - p / RHO_LIQUID) / CP_LIQUID,
                rho_liquid(p),
            ))
        } else if h > hf + L {
            let t = ts + (h - hf - L) / CP_VAPOR;
            Ok(state(t, p / (R * t)))
        } else {
            Ok(state(ts, rho_mixture(ts, (h - hf) / L)))
        }
    }
}

impl StateFrom<(Water, Pressure, SpecificEntropy)> for ToyWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_, pressure, entropy): (Water, Pressure, SpecificEntropy),
    ) -> Result<State<Water>, Self::Error> {
        let p = positive_pressure(pressure)?;
        let s = entropy.get::<joule_per_kilogram_kelvin>();
        let ts = t_sat(p);
        let sf = s_liquid(ts);
        let sg = sf + L / ts;

        if s < sf {
            Ok(state(T_REF * (s / CP_LIQUID).exp(), rho_liquid(p)))
        } else if s > sg {
            let t = ts * ((s - sg) / CP_VAPOR).exp();
            Ok(state(t, p / (R * t)))
        } else {
            Ok(state(ts, rho_mixture(ts, (s - sf) * ts / L)))
        }
    }
}

/// Dead state of [`ToyWater`] at the default environment.
pub(crate) fn dead_state() -> DeadState<Water> {
    Environment::default()
        .dead_state(Water, &ToyWater::default())
        .expect("toy water resolves at the default environment")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        pressure::{kilopascal, megapascal},
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::constraint::UnitInterval;

    #[test]
    fn saturation_line_passes_through_normal_boiling_point() {
        let t = ToyWater::saturation_temperature(Pressure::new::<pascal>(P_B));
        assert_relative_eq!(t.get::<kelvin>(), T_B, epsilon = 1e-9);
        assert_relative_eq!(p_sat(t_sat(20_000.0)), 20_000.0, max_relative = 1e-12);
    }

    #[test]
    fn two_phase_state_reports_pressure_and_quality() {
        let thermo = ToyWater::default();
        let p = Pressure::new::<kilopascal>(10.0);
        let x = UnitInterval::new(Ratio::new::<ratio>(0.75)).unwrap();
        let mixed = thermo.state_from((p, x)).unwrap();

        assert_relative_eq!(
            thermo.pressure(&mixed).unwrap().get::<kilopascal>(),
            10.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            thermo.quality(&mixed).unwrap().unwrap().get::<ratio>(),
            0.75,
            max_relative = 1e-9
        );
    }

    #[test]
    fn pressure_enthalpy_inverts_in_every_phase() {
        let thermo = ToyWater::default();
        let p = Pressure::new::<megapascal>(2.0);

        for t_c in [45.0, 300.0] {
            let t = ThermodynamicTemperature::new::<degree_celsius>(t_c);
            let original = thermo.state_from((t, p)).unwrap();
            let h = thermo.enthalpy(&original).unwrap();
            let found = thermo.state_from((p, h)).unwrap();
            assert_relative_eq!(
                found.temperature.get::<kelvin>(),
                t.get::<kelvin>(),
                max_relative = 1e-9
            );
        }

        let x = UnitInterval::new(Ratio::new::<ratio>(0.4)).unwrap();
        let mixed = thermo.state_from((p, x)).unwrap();
        let h = thermo.enthalpy(&mixed).unwrap();
        let found = thermo.state_from((p, h)).unwrap();
        assert_relative_eq!(
            thermo.quality(&found).unwrap().unwrap().get::<ratio>(),
            0.4,
            max_relative = 1e-9
        );
    }

    #[test]
    fn pressure_entropy_inverts_into_the_dome() {
        let thermo = ToyWater::default();
        let inlet = thermo
            .state_from((
                ThermodynamicTemperature::new::<degree_celsius>(300.0),
                Pressure::new::<megapascal>(2.0),
            ))
            .unwrap();
        let s = thermo.entropy(&inlet).unwrap();

        let outlet = thermo
            .state_from((Pressure::new::<kilopascal>(10.0), s))
            .unwrap();
        let x = thermo.quality(&outlet).unwrap().unwrap().get::<ratio>();

        assert!(x > 0.9 && x < 1.0, "x = {x}");
        assert_relative_eq!(
            thermo.entropy(&outlet).unwrap().get::<joule_per_kilogram_kelvin>(),
            s.get::<joule_per_kilogram_kelvin>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn dead_state_is_compressed_liquid() {
        let dead = dead_state();
        assert_relative_eq!(
            dead.enthalpy().get::<kilojoule_per_kilogram>(),
            104.7,
            epsilon = 0.1
        );
    }

    #[test]
    fn entropy_bias_applies_only_above_threshold() {
        let biased = ToyWater::with_entropy_bias(
            Pressure::new::<megapascal>(1.0),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(2.0),
        );
        let plain = ToyWater::default();
        let t = ThermodynamicTemperature::new::<degree_celsius>(50.0);

        let low = plain.state_from((t, Pressure::new::<kilopascal>(100.0))).unwrap();
        let high = plain.state_from((t, Pressure::new::<megapascal>(2.0))).unwrap();

        assert_eq!(biased.entropy(&low).unwrap(), plain.entropy(&low).unwrap());
        assert_relative_eq!(
            (plain.entropy(&high).unwrap() - biased.entropy(&high).unwrap())
                .get::<joule_per_kilogram_kelvin>(),
            2.0,
            epsilon = 1e-9
        );
    }
}
