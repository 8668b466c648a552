use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// `uom` does not subtract two [`ThermodynamicTemperature`] values into a
/// [`TemperatureInterval`]
/// ([#380](https://github.com/iliekturtles/uom/issues/380)). The condenser
/// needs that interval to judge subcooling.
pub trait TemperatureDifference {
    /// `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        let kelvin_above = self.get::<abs_kelvin>() - other.get::<abs_kelvin>();
        TemperatureInterval::new::<delta_kelvin>(kelvin_above)
    }
}
