//! Thermodynamic property models.
//!
//! Real-fluid properties come from CoolProp, enabled with the `coolprop`
//! feature. Any other backend can be used by implementing the capability
//! traits in [`capability`](crate::support::thermo::capability).

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
