pub mod flavor;
pub mod params;
pub mod predictions;
pub mod truth;
