/// Errors raised when building inputs for the calculator.
///
/// The calculation itself is total; only coordinates and configuration are
/// validated, at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkylightError {
    #[error("latitude must be within [-90, 90] degrees, got {latitude}")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("longitude must be within [-180, 180] degrees, got {longitude}")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("coordinates must be finite")]
    NonFiniteCoordinate,

    /// An altitude threshold is non-finite or not strictly between the poles.
    #[error("{name} altitude must be finite and within (-90, 90) degrees, got {altitude}")]
    InvalidAltitude { name: &'static str, altitude: f64 },

    #[error("twilight altitude {twilight} must be below horizon altitude {horizon}")]
    ThresholdOrder { horizon: f64, twilight: f64 },
}
