//! Rankine cycle component models with energy and exergy balances.
//!
//! Each component takes its process conditions and efficiencies, resolves
//! inlet and outlet states through a property model, and reports a first-law
//! balance together with a second-law breakdown relative to a [`DeadState`]:
//!
//! | Component | Fuel exergy `exf`          | Product exergy `exp` | Ambient loss `exL`       |
//! |-----------|----------------------------|----------------------|--------------------------|
//! | Boiler    | `qh_actual·(1 − T0/T_out)` | `ex_out − ex_in`     | `heat_loss·(1 − T0/T_out)` |
//! | Condenser | `ex_in − ex_out`           | `0`                  | `qc·(1 − T0/T_in)`       |
//! | Pump      | `w`                        | `ex_out − ex_in`     | `0`                      |
//! | Turbine   | `ex_in − ex_out`           | `wa`                 | `w − wa`                 |
//!
//! Components are independent. Nothing here integrates them into a cycle.
//!
//! [`DeadState`]: crate::support::exergy::DeadState

pub mod boiler;
pub mod condenser;
pub mod pump;
pub mod turbine;

mod error;
mod resolve;

#[cfg(test)]
pub(crate) mod test_support;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{
        Quality, Saturation,
        capability::{HasEnthalpy, HasEntropy, HasQuality, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

pub use boiler::{Boiler, BoilerInput, BoilerOutlet, BoilerResults, boiler};
pub use condenser::{Condenser, CondenserInput, CondenserOutlet, CondenserResults, condenser};
pub use error::{ComponentError, ProcessWarning};
pub use pump::{Pump, PumpInput, PumpResults, pump};
pub use resolve::StatePoint;
pub use turbine::{Turbine, TurbineInput, TurbineResults, turbine};

/// Property model bounds shared by every Rankine component.
pub trait RankineThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasEnthalpy
    + HasEntropy
    + HasQuality
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, ThermodynamicTemperature, Quality)>
    + StateFrom<(Fluid, Pressure, Quality)>
    + StateFrom<(Fluid, Pressure, Saturation)>
    + StateFrom<(Fluid, Pressure, SpecificEntropy)>
    + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
{
}

impl<Fluid, T> RankineThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasEnthalpy
        + HasEntropy
        + HasQuality
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, ThermodynamicTemperature, Quality)>
        + StateFrom<(Fluid, Pressure, Quality)>
        + StateFrom<(Fluid, Pressure, Saturation)>
        + StateFrom<(Fluid, Pressure, SpecificEntropy)>
        + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
{
}

#[cfg(all(test, feature = "coolprop"))]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use twine_core::Model;
    use uom::{
        ConstZero,
        si::{
            available_energy::kilojoule_per_kilogram,
            f64::Ratio,
            pressure::kilopascal,
            ratio::ratio,
            thermodynamic_temperature::degree_celsius,
        },
    };

    use crate::support::{
        constraint::{UnitInterval, UnitIntervalLowerOpen},
        exergy::Environment,
        thermo::{fluid::Water, model::CoolProp},
    };

    fn water() -> CoolProp<Water> {
        CoolProp::<Water>::new().expect("CoolProp water model")
    }

    fn ratio_of(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    #[test]
    fn steam_turbine_with_compressed_liquid_inlet() {
        let model = Turbine::new(water(), Water, Environment::default()).unwrap();
        let results = model
            .call(&TurbineInput {
                inlet_pressure: Pressure::new::<kilopascal>(10_000.0),
                inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(300.0),
                outlet_pressure: Pressure::new::<kilopascal>(1_000.0),
                isentropic_efficiency: UnitIntervalLowerOpen::new(ratio_of(0.9)).unwrap(),
                mechanical_efficiency: UnitIntervalLowerOpen::new(ratio_of(0.95)).unwrap(),
                generator_efficiency: UnitIntervalLowerOpen::new(ratio_of(0.95)).unwrap(),
            })
            .unwrap();

        // 300 °C is below saturation at 10 MPa; the liquid flashes on expansion.
        let x = results.outlet.quality.unwrap().get::<ratio>();
        assert!(x > 0.0 && x < 1.0, "x = {x}");
        assert_relative_eq!(x, 0.25, epsilon = 0.02);

        assert!(results.shaft_work > SpecificEnthalpy::ZERO);
        assert!(results.shaft_work < results.work_isentropic * 0.9);

        let eps = results.exergy.efficiency.get::<ratio>();
        assert!(eps > 0.0 && eps < 1.0, "eps = {eps}");
    }

    #[test]
    fn feedwater_pump() {
        let model = Pump::new(water(), Water, Environment::default()).unwrap();
        let results = model
            .call(&PumpInput {
                inlet_pressure: Pressure::new::<kilopascal>(10.0),
                outlet_pressure: Pressure::new::<kilopascal>(2_000.0),
                isentropic_efficiency: UnitIntervalLowerOpen::new(ratio_of(0.9)).unwrap(),
            })
            .unwrap();

        assert_relative_eq!(
            results.work.get::<kilojoule_per_kilogram>(),
            2.24,
            epsilon = 0.03
        );

        let rise = results.outlet.temperature.get::<degree_celsius>() - 45.81;
        assert!(rise > 0.0 && rise < 0.5, "rise = {rise} K");

        let eps = results.exergy.efficiency.get::<ratio>();
        assert!(eps > 0.8 && eps <= 1.0, "eps = {eps}");
    }

    #[test]
    fn condenser_to_saturated_liquid() {
        let model = Condenser::new(water(), Water, Environment::default()).unwrap();
        let results = model
            .call(&CondenserInput {
                inlet_pressure: Pressure::new::<kilopascal>(10.0),
                inlet_quality: UnitInterval::new(ratio_of(0.75)).unwrap(),
                outlet_pressure: Pressure::new::<kilopascal>(10.0),
                outlet: CondenserOutlet::SaturatedLiquid,
            })
            .unwrap();

        assert_relative_eq!(
            results.heat_rejected.get::<kilojoule_per_kilogram>(),
            0.75 * 2392.1,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            results.outlet.temperature.get::<degree_celsius>(),
            45.81,
            epsilon = 0.02
        );
        assert_eq!(results.exergy.product, SpecificEnthalpy::ZERO);
        assert_eq!(results.exergy.efficiency, Ratio::ZERO);
    }

    #[test]
    fn boiler_to_superheated_steam() {
        let model = Boiler::new(water(), Water, Environment::default()).unwrap();
        let results = model
            .call(&BoilerInput {
                inlet_pressure: Pressure::new::<kilopascal>(2_000.0),
                inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(46.0),
                outlet_pressure: Pressure::new::<kilopascal>(2_000.0),
                outlet: BoilerOutlet::Superheated(
                    ThermodynamicTemperature::new::<degree_celsius>(300.0),
                ),
                efficiency: UnitIntervalLowerOpen::new(ratio_of(0.9)).unwrap(),
            })
            .unwrap();

        // Steam tables: h(2 MPa, 300 °C) = 3023.5 kJ/kg.
        assert_relative_eq!(
            results.outlet.enthalpy.get::<kilojoule_per_kilogram>(),
            3023.5,
            max_relative = 2e-3
        );
        let eps = results.exergy.efficiency.get::<ratio>();
        assert!(eps > 0.0 && eps < 1.0, "eps = {eps}");
        assert!(results.warnings.is_empty());
    }
}
