use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Only construction can fail; once a [`Simulation`](crate::core::Simulation)
/// exists, stepping is infallible. Each variant names the offending parameter.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Pre-supplied state lies outside the simulation box.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("dt must be finite and > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("dt"));
    }

    #[test]
    fn out_of_bounds_display() {
        let e = Error::OutOfBounds("particle 3 at (12, 4)".into());
        assert!(e.to_string().starts_with("out of bounds"));
    }
}
