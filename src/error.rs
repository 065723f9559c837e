//! Configuration error and warning types.

use thiserror::Error;

/// Fatal wiring problem detected while binding the rig's cameras.
///
/// The rig keeps existing after one of these; every per-frame update that
/// depends on the missing reference becomes a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    #[error(
        "required component \"{0}\" is missing from the dome projector! \
         Rebuilding the dome projector rig with both cameras will probably fix this error."
    )]
    MissingNode(&'static str),
    #[error(
        "\"{0}\" has no camera attached! \
         Attach a camera to the node before binding it to the dome projector."
    )]
    MissingCamera(&'static str),
}

pub type RigResult<T> = Result<T, RigError>;

/// Non-fatal configuration issue. Logged once; the affected feature is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error(
        "\"Projection Camera\" is not the main camera! \
         Most likely a default main camera is still present in the scene."
    )]
    ProjectionCameraNotMain,
    #[error("demo camera base not set, camera movement is disabled")]
    MissingCameraBase,
    #[error("FPS text not set, frame rate display is disabled")]
    MissingFpsText,
    #[error("render settings not set, vsync toggle is disabled")]
    MissingRenderSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_asset() {
        let err = RigError::MissingNode("World Camera");
        assert!(err.to_string().contains("\"World Camera\" is missing"));

        let err = RigError::MissingCamera("Projection Camera");
        assert!(err.to_string().starts_with("\"Projection Camera\" has no camera"));
    }

    #[test]
    fn warning_display() {
        assert_eq!(
            ConfigWarning::MissingFpsText.to_string(),
            "FPS text not set, frame rate display is disabled"
        );
    }
}
