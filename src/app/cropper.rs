// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/cropper.rs
//
// Headless image cropper: view state, gesture handling and the crop operation.

use std::path::PathBuf;

use log::{debug, info, warn};

use super::document::{ImageEditor, SizeProbe};
use super::message::CropperMessage;
use super::model::{CenterOn, CropperProps, PanZoomProps, ViewState};
use crate::domain::cropper::{self, CropData, CropParams, FitInput};
use crate::domain::geometry::Size;

/// Receives state reports from the cropper.
pub trait CropperListener {
    /// Called after every state change with the full view state.
    fn set_cropper_params(&mut self, state: &ViewState);

    /// Called on every gesture: `true` when the image sits at scale 1.
    fn set_is_cropping(&mut self, _is_cropping: bool) {}
}

impl<F> CropperListener for F
where
    F: FnMut(&ViewState),
{
    fn set_cropper_params(&mut self, state: &ViewState) {
        self(state);
    }
}

/// Handle to the external pan/zoom widget.
pub trait PanZoomHandle {
    fn center_on(&mut self, target: CenterOn);
}

/// Pan/zoom handle for running without a widget; only logs requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPanZoom;

impl PanZoomHandle for HeadlessPanZoom {
    fn center_on(&mut self, target: CenterOn) {
        debug!(
            "center_on ({}, {}) scale {} duration {:?}",
            target.x, target.y, target.scale, target.duration
        );
    }
}

/// Crop metadata together with the new image produced by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct CropOutcome {
    pub data: CropData,
    pub uri: PathBuf,
}

/// Compute the crop rectangle for `params` and let `editor` cut it out.
///
/// Editor failures are returned unchanged.
pub async fn crop(params: &CropParams, editor: &dyn ImageEditor) -> anyhow::Result<CropOutcome> {
    let data = cropper::compute_crop_data(params);
    debug!(
        "Crop {}: offset {} size {} display {}",
        params.image.display(),
        data.offset,
        data.size,
        data.display_size
    );

    let uri = editor.crop_image(&params.image, &data).await?;
    Ok(CropOutcome { data, uri })
}

pub struct ImageCropper<P, Z, L> {
    props: CropperProps,
    state: ViewState,
    probe: P,
    pan_zoom: Z,
    listener: L,
}

impl<P, Z, L> ImageCropper<P, Z, L>
where
    P: SizeProbe,
    Z: PanZoomHandle,
    L: CropperListener,
{
    pub fn new(props: CropperProps, probe: P, pan_zoom: Z, listener: L) -> Self {
        Self {
            props,
            state: ViewState::default(),
            probe,
            pan_zoom,
            listener,
        }
    }

    /// Static crop entry point, usable without a cropper instance.
    pub async fn crop(params: &CropParams, editor: &dyn ImageEditor) -> anyhow::Result<CropOutcome> {
        crop(params, editor).await
    }

    pub fn props(&self) -> &CropperProps {
        &self.props
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// First load of the current image.
    pub async fn mount(&mut self) -> anyhow::Result<()> {
        self.init().await
    }

    /// Replace the props; the image is reloaded only if its reference changed.
    pub async fn set_props(&mut self, props: CropperProps) -> anyhow::Result<()> {
        let image_changed = props.image != self.props.image;
        self.props = props;

        if image_changed && !self.props.image.as_os_str().is_empty() {
            self.init().await?;
        }
        Ok(())
    }

    pub async fn set_image(&mut self, image: PathBuf) -> anyhow::Result<()> {
        let props = CropperProps {
            image,
            ..self.props.clone()
        };
        self.set_props(props).await
    }

    /// Probe the image, fit it to the viewport and center the widget at the
    /// minimum scale.
    ///
    /// Sizes from a previous image are dropped first, so on a probe failure the
    /// state stays loading and the error is returned.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        self.state.allow_negative_scale = self.props.allow_negative_scale;
        self.state.loading = true;
        self.state.src_size = None;
        self.state.fitted_size = None;
        self.state.orientation_hint = None;

        let (width, height) = match self.probe.probe(&self.props.image).await {
            Ok(size) => size,
            Err(err) => {
                warn!("Failed to probe {}: {err:#}", self.props.image.display());
                return Err(err);
            }
        };

        let fit = cropper::fit(&FitInput {
            natural: Size::from_pixels(width, height),
            override_size: self.props.override_size(),
            viewport_width: self.props.viewport_width,
            crop_area: self.props.crop_area(),
            width_ratio: self.props.width_ratio,
            height_ratio: self.props.height_ratio,
            allow_negative_scale: self.props.allow_negative_scale,
        });

        info!(
            "Loaded {} ({}): fitted {} min scale {}",
            self.props.image.display(),
            fit.src_size,
            fit.fitted_size,
            fit.min_scale
        );

        self.state.orientation_hint = Some(fit.orientation_hint);
        self.state.src_size = Some(fit.src_size);
        self.state.fitted_size = Some(fit.fitted_size);
        self.state.min_scale = fit.min_scale;
        self.state.loading = false;

        self.pan_zoom.center_on(CenterOn {
            x: 0.0,
            y: 0.0,
            scale: fit.min_scale,
            duration: Some(1),
        });
        self.listener.set_cropper_params(&self.state);
        Ok(())
    }

    /// Record a pan/zoom gesture reported by the widget.
    ///
    /// Ignored while loading: the widget is not rendered yet.
    pub fn handle_move(&mut self, position_x: f64, position_y: f64, scale: f64) {
        if self.state.loading {
            return;
        }
        self.listener.set_is_cropping(scale == 1.0);

        self.state.position_x = position_x;
        self.state.position_y = position_y;
        self.state.scale = Some(scale);
        self.listener.set_cropper_params(&self.state);
    }

    /// Toggle between scale 1 and the minimum scale.
    pub fn smart_zoom(&mut self) {
        if self.state.loading {
            return;
        }

        let scale = match self.state.scale {
            Some(current) if current < 1.0 => 1.0,
            Some(current) if current == 1.0 => self.state.min_scale,
            _ => 1.0,
        };

        self.pan_zoom.center_on(CenterOn {
            x: 0.0,
            y: 0.0,
            scale,
            duration: None,
        });

        self.state.scale = Some(scale);
        self.listener.set_cropper_params(&self.state);
    }

    pub async fn update(&mut self, message: CropperMessage) -> anyhow::Result<()> {
        match message {
            CropperMessage::Moved {
                position_x,
                position_y,
                scale,
            } => self.handle_move(position_x, position_y, scale),
            CropperMessage::SmartZoom => self.smart_zoom(),
            CropperMessage::ImageChanged(image) => self.set_image(image).await?,
        }
        Ok(())
    }

    /// Widget properties, or `None` while the image is loading.
    pub fn pan_zoom_props(&self) -> Option<PanZoomProps> {
        if self.state.loading {
            return None;
        }
        let fitted = self.state.fitted_size?;

        Some(PanZoomProps {
            crop_width: self.props.crop_area_width,
            crop_height: self.props.crop_area_height,
            image_width: fitted.w,
            image_height: fitted.h,
            min_scale: self.state.min_scale,
            enable_center_focus: !self.state.allow_negative_scale,
        })
    }

    /// Crop parameters for the current view, or `None` while loading.
    pub fn crop_params(&self) -> Option<CropParams> {
        if self.state.loading {
            return None;
        }

        Some(CropParams {
            image: self.props.image.clone(),
            position_x: self.state.position_x,
            position_y: self.state.position_y,
            scale: self.state.scale.unwrap_or(1.0),
            crop_area_size: Some(self.props.crop_area()),
            src_size: self.state.src_size?,
            fitted_size: self.state.fitted_size?,
            viewport_width: self.props.viewport_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    use anyhow::anyhow;
    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;

    const EPS: f64 = 1e-9;

    #[derive(Default)]
    struct FakeProbe {
        sizes: HashMap<PathBuf, (u32, u32)>,
    }

    impl FakeProbe {
        fn with(mut self, path: &str, size: (u32, u32)) -> Self {
            self.sizes.insert(PathBuf::from(path), size);
            self
        }
    }

    impl SizeProbe for FakeProbe {
        fn probe<'a>(&'a self, image: &'a Path) -> BoxFuture<'a, anyhow::Result<(u32, u32)>> {
            let result = self
                .sizes
                .get(image)
                .copied()
                .ok_or_else(|| anyhow!("no such image: {}", image.display()));
            async move { result }.boxed()
        }
    }

    #[derive(Default)]
    struct RecordingPanZoom {
        calls: Vec<CenterOn>,
    }

    impl PanZoomHandle for RecordingPanZoom {
        fn center_on(&mut self, target: CenterOn) {
            self.calls.push(target);
        }
    }

    #[derive(Default)]
    struct RecordingListener {
        states: Vec<ViewState>,
        cropping: Vec<bool>,
    }

    impl CropperListener for RecordingListener {
        fn set_cropper_params(&mut self, state: &ViewState) {
            self.states.push(state.clone());
        }

        fn set_is_cropping(&mut self, is_cropping: bool) {
            self.cropping.push(is_cropping);
        }
    }

    struct FakeEditor {
        fail: bool,
    }

    impl ImageEditor for FakeEditor {
        fn crop_image<'a>(
            &'a self,
            image: &'a Path,
            _data: &'a CropData,
        ) -> BoxFuture<'a, anyhow::Result<PathBuf>> {
            let result = if self.fail {
                Err(anyhow!("editor rejected {}", image.display()))
            } else {
                Ok(PathBuf::from("/cache/cropped.png"))
            };
            async move { result }.boxed()
        }
    }

    type TestCropper = ImageCropper<FakeProbe, RecordingPanZoom, RecordingListener>;

    impl TestCropper {
        fn listener(&self) -> &RecordingListener {
            &self.listener
        }

        fn pan_zoom(&self) -> &RecordingPanZoom {
            &self.pan_zoom
        }
    }

    fn cropper(props: CropperProps, probe: FakeProbe) -> TestCropper {
        ImageCropper::new(
            props,
            probe,
            RecordingPanZoom::default(),
            RecordingListener::default(),
        )
    }

    fn portrait_cropper() -> TestCropper {
        cropper(
            CropperProps::new("portrait.jpg", 400.0),
            FakeProbe::default()
                .with("portrait.jpg", (800, 1200))
                .with("square.jpg", (2000, 2000)),
        )
    }

    #[tokio::test]
    async fn test_mount_fits_and_centers() {
        let mut c = portrait_cropper();
        assert!(c.pan_zoom_props().is_none());
        assert!(c.crop_params().is_none());

        c.mount().await.unwrap();

        let state = c.state();
        assert!(!state.loading);
        assert_eq!(state.src_size, Some(Size::new(800.0, 1200.0)));
        assert_eq!(state.fitted_size, Some(Size::new(400.0, 600.0)));
        assert!((state.min_scale - 1.0001).abs() < EPS);
        assert_eq!(state.orientation_hint, Some(1.0));

        let calls = &c.pan_zoom().calls;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].duration, Some(1));
        assert!((calls[0].scale - state.min_scale).abs() < EPS);

        assert_eq!(c.listener().states.len(), 1);
        assert!(!c.listener().states[0].loading);
    }

    #[tokio::test]
    async fn test_mount_probe_failure_stays_loading() {
        let mut c = cropper(CropperProps::new("missing.jpg", 400.0), FakeProbe::default());
        assert!(c.mount().await.is_err());
        assert!(c.state().loading);
        assert!(c.listener().states.is_empty());
        assert!(c.pan_zoom().calls.is_empty());
    }

    #[tokio::test]
    async fn test_failed_reload_drops_previous_sizes() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();
        assert!(c.crop_params().is_some());

        assert!(c.set_image(PathBuf::from("missing.jpg")).await.is_err());

        let state = c.state();
        assert!(state.loading);
        assert_eq!(state.src_size, None);
        assert_eq!(state.fitted_size, None);
        assert_eq!(state.orientation_hint, None);
        assert!(c.crop_params().is_none());
        assert!(c.pan_zoom_props().is_none());
    }

    #[tokio::test]
    async fn test_gestures_ignored_while_loading() {
        let mut c = portrait_cropper();

        c.handle_move(10.0, 10.0, 1.0);
        c.smart_zoom();

        assert_eq!(c.state().scale, None);
        assert!(c.pan_zoom().calls.is_empty());
        assert!(c.listener().states.is_empty());
        assert!(c.listener().cropping.is_empty());
    }

    #[tokio::test]
    async fn test_pan_zoom_props_after_load() {
        let mut props = CropperProps::new("portrait.jpg", 400.0);
        props.allow_negative_scale = true;
        let mut c = cropper(props, FakeProbe::default().with("portrait.jpg", (800, 1200)));
        c.mount().await.unwrap();

        let widget = c.pan_zoom_props().unwrap();
        assert_eq!(widget.crop_width, 400.0);
        assert_eq!(widget.image_width, 400.0);
        assert_eq!(widget.image_height, 600.0);
        assert!(!widget.enable_center_focus);
        assert!((widget.min_scale - 1.0).abs() < EPS);
    }

    #[tokio::test]
    async fn test_handle_move_reports_cropping() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();

        c.handle_move(10.0, -20.0, 1.0);
        c.handle_move(0.0, 0.0, 1.5);

        assert_eq!(c.listener().cropping, vec![true, false]);
        let last = c.listener().states.last().unwrap();
        assert_eq!(last.position_x, 0.0);
        assert_eq!(last.scale, Some(1.5));
        assert_eq!(c.listener().states.len(), 3);
    }

    #[tokio::test]
    async fn test_smart_zoom_toggles() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();
        let min_scale = c.state().min_scale;

        // unset scale goes to 1
        c.smart_zoom();
        assert_eq!(c.state().scale, Some(1.0));

        c.smart_zoom();
        assert_eq!(c.state().scale, Some(min_scale));

        c.smart_zoom();
        assert_eq!(c.state().scale, Some(1.0));

        c.handle_move(0.0, 0.0, 0.7);
        c.smart_zoom();
        assert_eq!(c.state().scale, Some(1.0));

        let last = c.pan_zoom().calls.last().unwrap();
        assert_eq!(last.duration, None);
        assert_eq!(last.scale, 1.0);
    }

    #[tokio::test]
    async fn test_set_image_reinits_only_on_change() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();

        c.set_image(PathBuf::from("portrait.jpg")).await.unwrap();
        assert_eq!(c.pan_zoom().calls.len(), 1);

        c.update(CropperMessage::ImageChanged(PathBuf::from("square.jpg")))
            .await
            .unwrap();
        assert_eq!(c.pan_zoom().calls.len(), 2);
        assert_eq!(c.state().src_size, Some(Size::square(2000.0)));
        assert_eq!(c.state().fitted_size, Some(Size::square(400.0)));
    }

    #[tokio::test]
    async fn test_update_dispatches_gestures() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();

        c.update(CropperMessage::Moved {
            position_x: 5.0,
            position_y: 6.0,
            scale: 2.0,
        })
        .await
        .unwrap();
        assert_eq!(c.state().scale, Some(2.0));

        c.update(CropperMessage::SmartZoom).await.unwrap();
        assert_eq!(c.state().scale, Some(1.0));
    }

    #[tokio::test]
    async fn test_crop_from_current_view() {
        let mut c = portrait_cropper();
        c.mount().await.unwrap();
        c.handle_move(0.0, 0.0, 2.0);

        let params = c.crop_params().unwrap();
        let outcome = TestCropper::crop(&params, &FakeEditor { fail: false })
            .await
            .unwrap();

        assert_eq!(outcome.uri, PathBuf::from("/cache/cropped.png"));
        assert!((outcome.data.offset.x - 200.0).abs() < 1e-6);
        assert!((outcome.data.offset.y - 400.0).abs() < 1e-6);
        assert!((outcome.data.size.w - 400.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_crop_propagates_editor_error() {
        let params = CropParams {
            image: PathBuf::from("a.jpg"),
            position_x: 0.0,
            position_y: 0.0,
            scale: 1.0,
            crop_area_size: None,
            src_size: Size::square(100.0),
            fitted_size: Size::square(400.0),
            viewport_width: 400.0,
        };
        let err = crop(&params, &FakeEditor { fail: true }).await.unwrap_err();
        assert!(err.to_string().contains("editor rejected"));
    }

    #[tokio::test]
    async fn test_closure_listener() {
        let mut seen = 0;
        {
            let mut c = ImageCropper::new(
                CropperProps::new("square.jpg", 400.0),
                FakeProbe::default().with("square.jpg", (2000, 2000)),
                HeadlessPanZoom,
                |_: &ViewState| seen += 1,
            );
            c.mount().await.unwrap();
            c.handle_move(0.0, 0.0, 1.0);
        }
        assert_eq!(seen, 2);
    }
}
