//! Data model for blood sugar readings.

mod reading;

pub use reading::Reading;
