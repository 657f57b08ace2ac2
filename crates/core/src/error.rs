//! Error types for the color-fusion core.

use thiserror::Error;

/// Errors produced by decoding, blending, rendering, and export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    /// After stripping a leading `#`, the input was not exactly 6 characters.
    #[error("hex color code must be 6 characters long, got {len}")]
    InvalidHexLength { len: usize },

    /// One of the three character pairs was not valid base-16.
    #[error("invalid hex color code: {0}")]
    InvalidHexDigits(String),

    /// A gradient spec asked for more intermediate colors than supported.
    #[error("step count {0} is out of range (0..={max})", max = crate::spec::MAX_STEPS)]
    StepsOutOfRange(usize),

    /// Width or height was zero, or the pixel count overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Writing or encoding an exported image failed.
    #[error("failed to save file: {0}")]
    ExportIo(String),
}

impl FusionError {
    /// Returns true for errors raised while decoding a hex color.
    ///
    /// These are the failures the recovery policy masks.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            FusionError::InvalidHexLength { .. } | FusionError::InvalidHexDigits(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_length_includes_length() {
        let err = FusionError::InvalidHexLength { len: 2 };
        let msg = format!("{err}");
        assert!(msg.contains("6 characters"), "missing expectation in: {msg}");
        assert!(msg.contains('2'), "missing actual length in: {msg}");
    }

    #[test]
    fn invalid_hex_digits_includes_message() {
        let err = FusionError::InvalidHexDigits("GG".into());
        let msg = format!("{err}");
        assert!(msg.contains("GG"), "missing offending pair in: {msg}");
    }

    #[test]
    fn steps_out_of_range_includes_count_and_limit() {
        let err = FusionError::StepsOutOfRange(65);
        let msg = format!("{err}");
        assert!(msg.contains("65"), "missing count in: {msg}");
        assert!(msg.contains("64"), "missing limit in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", FusionError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn export_io_keeps_raw_reason() {
        let err = FusionError::ExportIo("permission denied".into());
        let msg = format!("{err}");
        assert!(msg.contains("permission denied"), "missing reason in: {msg}");
    }

    #[test]
    fn decode_errors_are_classified() {
        assert!(FusionError::InvalidHexLength { len: 0 }.is_decode_error());
        assert!(FusionError::InvalidHexDigits("zz".into()).is_decode_error());
        assert!(!FusionError::InvalidDimensions.is_decode_error());
        assert!(!FusionError::ExportIo("x".into()).is_decode_error());
        assert!(!FusionError::StepsOutOfRange(99).is_decode_error());
    }

    #[test]
    fn fusion_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FusionError>();
    }

    #[test]
    fn fusion_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FusionError>();
    }
}
