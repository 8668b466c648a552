/// Canonical identifier for R245fa (1,1,1,3,3-pentafluoropropane).
///
/// A common working fluid for organic Rankine cycles driven by
/// low-temperature heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct R245fa;

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for R245fa {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "R245fa";
}
