//! Text display of row-major matrices.
//!
//! Each row is written on its own line, values in fixed-point notation
//! separated by a single space:
//!
//! ```text
//! 1.00000 2.00000
//! 3.00000 4.00000
//! ```

use std::io::{self, Write};

use tracing::trace;

use crate::stats::rows;
use crate::types::{MatrixShape, Result, StatsError};

/// Fewest digits ever printed after the decimal point.
pub const MIN_PRECISION: usize = 5;

/// Most digits printed after the decimal point; beyond this `f64` carries no
/// further information.
pub const MAX_PRECISION: usize = 17;

/// Formatting options for matrix display.
///
/// # Examples
///
/// ```rust
/// use colstats_core::PrintConfig;
///
/// assert_eq!(PrintConfig::default().precision(), 5);
/// assert_eq!(PrintConfig::with_precision(8).unwrap().precision(), 8);
/// assert!(PrintConfig::with_precision(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintConfig {
    precision: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            precision: MIN_PRECISION,
        }
    }
}

impl PrintConfig {
    /// Creates a configuration printing `precision` decimals.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidParameter` unless `precision` is in
    /// [`MIN_PRECISION`]`..=`[`MAX_PRECISION`].
    pub fn with_precision(precision: usize) -> Result<Self> {
        let config = Self { precision };
        config.validate()?;
        Ok(config)
    }

    /// Digits printed after the decimal point.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Validates the configuration.
    ///
    /// Useful after deserialising a config that bypassed
    /// [`PrintConfig::with_precision`].
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(StatsError::InvalidParameter {
                name: "precision",
                value: format!(
                    "{} outside range [{}, {}]",
                    self.precision, MIN_PRECISION, MAX_PRECISION
                ),
            });
        }
        Ok(())
    }
}

/// Writes `a` to `writer`, one row per line.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` is shorter than the shape,
/// `StatsError::InvalidParameter` for an invalid `config`, and
/// `StatsError::Io` if the writer fails.
///
/// # Examples
///
/// ```rust
/// use colstats_core::{write_matrix, MatrixShape, PrintConfig};
///
/// let mut out = Vec::new();
/// let shape = MatrixShape::new(2, 2).unwrap();
/// write_matrix(&mut out, &[1.0, -2.5, 0.0, 3.0], shape, &PrintConfig::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1.00000 -2.50000\n0.00000 3.00000\n");
/// ```
pub fn write_matrix<W: Write>(
    writer: &mut W,
    a: &[f64],
    shape: MatrixShape,
    config: &PrintConfig,
) -> Result<()> {
    shape.check_matrix("a", a.len())?;
    config.validate()?;
    trace!(rows = shape.rows(), cols = shape.cols(), "writing matrix");

    let precision = config.precision();
    for row in rows(a, shape) {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{:.*}", precision, value)?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Formats `a` into a `String` using the same layout as [`write_matrix`].
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` or `StatsError::InvalidParameter`
/// as [`write_matrix`] does.
pub fn format_matrix(a: &[f64], shape: MatrixShape, config: &PrintConfig) -> Result<String> {
    shape.check_matrix("a", a.len())?;
    config.validate()?;
    let mut out = Vec::with_capacity(shape.len().saturating_mul(config.precision() + 4));
    write_matrix(&mut out, a, shape, config)?;
    // Only ASCII digits, signs, dots and separators are ever written.
    String::from_utf8(out).map_err(|e| StatsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes `a` to standard output with the default configuration.
///
/// # Errors
///
/// Returns `StatsError::BufferTooSmall` if `a` is shorter than the shape and
/// `StatsError::Io` if stdout is closed.
pub fn show_matrix(a: &[f64], shape: MatrixShape) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_matrix(&mut handle, a, shape, &PrintConfig::default())?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Verifies that the default layout has five decimals, single spaces and one line per row.
    #[test]
    fn test_default_format() {
        let shape = MatrixShape::new(3, 2).unwrap();
        let text = format_matrix(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            shape,
            &PrintConfig::default(),
        )
        .unwrap();
        assert_eq!(text, "1.00000 2.00000\n3.00000 4.00000\n5.00000 6.00000\n");
    }

    /// Verifies that values are rounded to the precision and keep their sign.
    #[test]
    fn test_rounding_and_sign() {
        let shape = MatrixShape::new(1, 3).unwrap();
        let text = format_matrix(&[0.123456789, -10.0, 2.0 / 3.0], shape, &PrintConfig::default())
            .unwrap();
        assert_eq!(text, "0.12346 -10.00000 0.66667\n");
    }

    /// Verifies that a custom precision changes the number of decimals.
    #[test]
    fn test_custom_precision() {
        let shape = MatrixShape::new(1, 1).unwrap();
        let config = PrintConfig::with_precision(8).unwrap();
        let text = format_matrix(&[std::f64::consts::PI], shape, &config).unwrap();
        assert_eq!(text, "3.14159265\n");
    }

    /// Verifies that NaN and infinity print without panicking.
    #[test]
    fn test_non_finite_values() {
        let shape = MatrixShape::new(1, 2).unwrap();
        let text = format_matrix(&[f64::NAN, f64::INFINITY], shape, &PrintConfig::default())
            .unwrap();
        assert_eq!(text, "NaN inf\n");
    }

    /// Verifies that precision outside 5..=17 is rejected.
    #[test]
    fn test_precision_bounds() {
        assert!(PrintConfig::with_precision(MIN_PRECISION).is_ok());
        assert!(PrintConfig::with_precision(MAX_PRECISION).is_ok());
        assert!(matches!(
            PrintConfig::with_precision(4),
            Err(StatsError::InvalidParameter {
                name: "precision",
                ..
            })
        ));
        assert!(PrintConfig::with_precision(18).is_err());
    }

    /// Verifies that a failing writer surfaces as `StatsError::Io`.
    #[test]
    fn test_writer_failure_surfaces_as_io() {
        let shape = MatrixShape::new(1, 1).unwrap();
        let err = write_matrix(&mut FailingWriter, &[1.0], shape, &PrintConfig::default())
            .unwrap_err();
        assert!(matches!(err, StatsError::Io(_)));
    }

    /// Verifies that a buffer shorter than the shape is rejected.
    #[test]
    fn test_short_buffer_rejected() {
        let shape = MatrixShape::new(2, 2).unwrap();
        let err = format_matrix(&[1.0, 2.0], shape, &PrintConfig::default()).unwrap_err();
        assert!(matches!(err, StatsError::BufferTooSmall { .. }));
    }

    /// Verifies that a short buffer is reported before the output string is
    /// sized from a very tall shape.
    #[test]
    fn test_tall_shape_short_buffer_rejected() {
        let shape = MatrixShape::new(usize::MAX / 2, 1).unwrap();
        let err = format_matrix(&[], shape, &PrintConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            StatsError::BufferTooSmall {
                buffer: "a",
                actual: 0,
                ..
            }
        ));
    }

    /// Verifies that printing to stdout succeeds.
    #[test]
    fn test_show_matrix_smoke() {
        let shape = MatrixShape::new(2, 2).unwrap();
        show_matrix(&[1.0, 2.0, 3.0, 4.0], shape).unwrap();
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        /// Verifies that a print configuration survives a JSON round trip.
        #[test]
        fn test_print_config_serde_roundtrip() {
            let config = PrintConfig::with_precision(9).unwrap();
            let json = serde_json::to_string(&config).unwrap();
            assert_eq!(json, r#"{"precision":9}"#);

            let parsed: PrintConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, config);
        }

        /// Verifies that an out-of-range precision read from JSON is still
        /// rejected before anything is written.
        #[test]
        fn test_deserialised_precision_is_validated_on_write() {
            let config: PrintConfig = serde_json::from_str(r#"{"precision":2}"#).unwrap();
            assert!(config.validate().is_err());

            let shape = MatrixShape::new(1, 1).unwrap();
            let mut out = Vec::new();
            let err = write_matrix(&mut out, &[1.0], shape, &config).unwrap_err();
            assert!(matches!(err, StatsError::InvalidParameter { .. }));
            assert!(out.is_empty());
        }
    }
}
