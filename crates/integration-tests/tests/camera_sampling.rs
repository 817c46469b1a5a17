//! Color sampler sessions against fake and still-image cameras.

#![allow(clippy::unwrap_used)]

use trueshade_core::{ProductId, Rgb};
use trueshade_integration_tests::{TestContext, solid_png};
use trueshade_storefront::camera::{
    CameraDevice, CameraError, CameraSession, StillImageCamera, StillImageStream,
};
use trueshade_storefront::color::{HueName, TextColor};

/// A device whose permission prompt is always declined.
struct DeniedCamera;

impl CameraDevice for DeniedCamera {
    type Stream = StillImageStream;

    async fn acquire(&self) -> Result<StillImageStream, CameraError> {
        Err(CameraError::PermissionDenied)
    }
}

#[tokio::test]
async fn test_denied_camera_leaves_cart_untouched() {
    let ctx = TestContext::new();
    let mut state = ctx.session();
    state.add_to_cart(&ProductId::new("p1"));

    let err = CameraSession::open(&DeniedCamera).await.unwrap_err();
    assert_eq!(
        err.notice().message(),
        "Camera access denied or unavailable."
    );

    assert_eq!(state.catalog().quantity(&ProductId::new("p1")), 1);
    let reopened = ctx.session();
    assert_eq!(reopened.catalog().quantity(&ProductId::new("p1")), 1);
}

#[tokio::test]
async fn test_sample_still_image() {
    let ctx = TestContext::new();
    let path = ctx.dir().join("swatch.png");
    std::fs::write(&path, solid_png(9, 7, Rgb::new(200, 50, 50))).unwrap();

    let camera = StillImageCamera::new(&path);
    let mut session = CameraSession::open(&camera).await.unwrap();
    let sample = session.sample().cloned().unwrap();

    assert_eq!(sample.hex.as_str(), "#c83232");
    assert_eq!(sample.hue, HueName::WarmRed);
    assert_eq!(sample.advice.best, TextColor::Dark);
    assert!(sample.advice.to_string().starts_with("Best on Dark Text • "));

    let err = session.toggle_torch().await.unwrap_err();
    assert_eq!(
        err.notice().message(),
        "Torch not supported on this device."
    );

    session.close();
    assert!(!session.is_open());
    assert!(session.sample().is_none());
}

#[tokio::test]
async fn test_missing_image_is_unavailable() {
    let ctx = TestContext::new();
    let camera = StillImageCamera::new(ctx.dir().join("missing.png"));
    let err = CameraSession::open(&camera).await.unwrap_err();
    assert!(matches!(err, CameraError::Unavailable(_)));
    assert_eq!(
        err.notice().message(),
        "Camera access denied or unavailable."
    );
}
