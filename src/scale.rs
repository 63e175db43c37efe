/// Stand-in divisor used when the temperature is exactly zero.
pub const ZERO_TEMPERATURE_SUBSTITUTE: f64 = 0.01;

/// Temperature actually used for scaling. Only an exact zero is replaced;
/// negative temperatures pass through and flip the sign of every scaled logit.
#[must_use]
pub fn effective_temperature(temperature: f64) -> f64 {
    if temperature == 0.0 {
        ZERO_TEMPERATURE_SUBSTITUTE
    } else {
        temperature
    }
}

/// Divide a raw logit by the effective temperature.
#[must_use]
pub fn scale(raw: f64, temperature: f64) -> f64 {
    raw / effective_temperature(temperature)
}
