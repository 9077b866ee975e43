use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("`{name}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
    #[error("could not parse `{name}` from {raw:?}")]
    Unparsable { name: &'static str, raw: String },
}

pub(crate) fn positive(name: &'static str, value: impl Into<f64>) -> Result<(), ConfigError> {
    let value = value.into();
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

pub(crate) fn unit(name: &'static str, value: impl Into<f64>) -> Result<(), ConfigError> {
    let value = value.into();
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
