use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` captures temperature and density, which together fix the
/// state of a pure fluid everywhere, including inside the vapor dome where
/// temperature and pressure alone do not.
///
/// `State` is the primary input to capability-based thermodynamic models for
/// calculating pressure, enthalpy, entropy, and vapor quality.
///
/// # Example
///
/// ```
/// use twine_rankine::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::degree_celsius,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(997.0),
///     Water,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
