//! Yearly to monthly rate conversion

/// Convert a yearly percentage (6.0 = 6%) to the equivalent compounding
/// monthly rate as a decimal.
///
/// A yearly loss of 100% or more has no real monthly equivalent; those
/// inputs return 0.
pub fn yearly_to_monthly_rate(yearly_percent: f64) -> f64 {
    let yearly = yearly_percent / 100.0;
    if yearly <= -1.0 {
        return 0.0;
    }
    (1.0 + yearly).powf(1.0 / 12.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_six_percent() {
        let monthly = yearly_to_monthly_rate(6.0);
        assert_relative_eq!(monthly, 1.06_f64.powf(1.0 / 12.0) - 1.0);
        assert_relative_eq!((1.0 + monthly).powi(12), 1.06, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(yearly_to_monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_total_loss_clamps_to_zero() {
        assert_eq!(yearly_to_monthly_rate(-100.0), 0.0);
        assert_eq!(yearly_to_monthly_rate(-150.0), 0.0);
    }

    #[test]
    fn test_partial_loss_is_negative() {
        let monthly = yearly_to_monthly_rate(-50.0);
        assert!(monthly < 0.0);
        assert_relative_eq!((1.0 + monthly).powi(12), 0.5, epsilon = 1e-12);
    }
}
