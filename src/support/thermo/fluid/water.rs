/// Canonical identifier for water, the working fluid of a steam Rankine cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Water {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Water";
}
