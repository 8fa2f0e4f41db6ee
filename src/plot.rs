//! Scaling of plot data into pixel extents.

use tracing::debug;

use crate::error::{InputError, Result};

/// Scales `data` so that its full range spans `size` pixels.
///
/// Values are multiplied by `size / (max - min)`; they are not shifted, so
/// offsetting and flipping the result is left to the caller.
///
/// # Errors
///
/// Returns [`InputError::InvalidArgument`] if `data` is empty or all values
/// are equal.
pub fn scale_to_fit(data: &[f64], size: f64) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(InputError::InvalidArgument("cannot fit an empty data set".into()).into());
    }
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    scale_to_range(data, size, max - min)
}

/// Scales `data` so that a span of `range` data units covers `size` pixels.
///
/// # Errors
///
/// Returns [`InputError::InvalidArgument`] if `range` is zero or not finite.
pub fn scale_to_range(data: &[f64], size: f64, range: f64) -> Result<Vec<f64>> {
    if range == 0.0 || !range.is_finite() {
        debug!(range, "rejected plot data range");
        return Err(InputError::InvalidArgument(format!(
            "data range must be finite and non-zero, got {range}"
        ))
        .into());
    }
    let factor = size / range;
    Ok(data.iter().map(|v| v * factor).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn fit_spans_size() {
        let scaled = scale_to_fit(&[1.0, 3.0, 2.0, 5.0], 500.0).unwrap();
        assert_relative_eq!(scaled[0], 125.0);
        assert_relative_eq!(scaled[3], 625.0);
        assert_relative_eq!(scaled[3] - scaled[0], 500.0);
    }

    #[test]
    fn fixed_range() {
        let scaled = scale_to_range(&[-1.0, 0.5], 100.0, 4.0).unwrap();
        assert_eq!(scaled, vec![-25.0, 12.5]);
    }

    #[test]
    fn empty_and_flat_data_are_rejected() {
        assert_eq!(scale_to_fit(&[], 10.0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            scale_to_fit(&[2.0, 2.0], 10.0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            scale_to_range(&[1.0], 10.0, f64::NAN).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
