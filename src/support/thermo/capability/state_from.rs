use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for resolving a [`State`] from a pair of independent properties.
///
/// Each supported pair is its own implementation, so an unsupported query is
/// a compile error rather than a runtime failure. The Rankine components use:
///
/// | Input                                          | Used for                    |
/// |------------------------------------------------|-----------------------------|
/// | `(Fluid, ThermodynamicTemperature, Pressure)`  | subcooled or superheated ports, dead state |
/// | `(Fluid, Pressure, Quality)`                   | two-phase condenser inlet   |
/// | `(Fluid, ThermodynamicTemperature, Quality)`   | settling two-phase results  |
/// | `(Fluid, Pressure, Saturation)`                | saturated liquid or vapor   |
/// | `(Fluid, Pressure, SpecificEntropy)`           | isentropic outlets          |
/// | `(Fluid, Pressure, SpecificEnthalpy)`          | actual outlets              |
///
/// A pair that lands inside the vapor dome still yields a state. Its
/// temperature is the saturation temperature and its density the mixture
/// density.
///
/// When `Fluid: Default`, the fluid may be left out: `thermo.state_from((t, p))`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves the state fixed by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Resolves `(A, B)` with `Fluid::default()`.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
