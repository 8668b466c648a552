/// Base trait for all thermodynamic property models.
///
/// A model names the fluid type it operates on. Everything else a model can
/// do is expressed through capability traits that extend this one.
pub trait ThermoModel {
    type Fluid;
}
