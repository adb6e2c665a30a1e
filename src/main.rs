// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command-line front end: fit an image to a viewport and crop the visible window.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;

use cropframe::app::document::{ImageSizeProbe, RasterEditor};
use cropframe::app::{HeadlessPanZoom, ImageCropper, ViewState};
use cropframe::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print fitted size and minimum scale for an image.
    Fit {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Crop the region visible at the given pan offset and scale.
    Crop {
        #[command(flatten)]
        view: ViewArgs,
        /// Horizontal pan offset reported by the pan/zoom widget.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f64,
        /// Vertical pan offset reported by the pan/zoom widget.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f64,
        /// Zoom scale; defaults to the computed minimum scale.
        #[arg(long)]
        scale: Option<f64>,
        /// Directory for the cropped image.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ViewArgs {
    /// Image file.
    pub image: PathBuf,
    /// Viewport width the image is fitted to.
    #[arg(long)]
    pub viewport: Option<f64>,
    #[arg(long)]
    pub crop_width: Option<f64>,
    #[arg(long)]
    pub crop_height: Option<f64>,
    #[arg(long)]
    pub width_ratio: Option<f64>,
    #[arg(long)]
    pub height_ratio: Option<f64>,
    /// Allow zooming out beyond fit.
    #[arg(long)]
    pub allow_negative_scale: bool,
}

impl ViewArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(viewport) = self.viewport {
            config.viewport_width = viewport;
        }
        config.crop_area_width = self.crop_width.or(config.crop_area_width);
        config.crop_area_height = self.crop_height.or(config.crop_area_height);
        if let Some(ratio) = self.width_ratio {
            config.width_ratio = ratio;
        }
        if let Some(ratio) = self.height_ratio {
            config.height_ratio = ratio;
        }
        config.allow_negative_scale |= self.allow_negative_scale;
    }
}

/// Defaults overridden by the command-line flags.
fn build_config(view: &ViewArgs, output_dir: Option<PathBuf>) -> AppConfig {
    let mut config = AppConfig::default();
    view.apply(&mut config);
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    config
}

fn log_state(state: &ViewState) {
    log::debug!("Cropper state: {state:?}");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Command::Fit { view } => {
            let config = build_config(&view, None);
            let mut cropper = ImageCropper::new(
                config.props_for(&view.image),
                ImageSizeProbe,
                HeadlessPanZoom,
                log_state,
            );
            cropper.mount().await?;

            info!("Fitted {}", cropper.props().image.display());
            let state = cropper.state();
            let widget = cropper
                .pan_zoom_props()
                .context("cropper did not finish loading")?;
            println!("source:      {}", state.src_size.unwrap_or_default());
            println!("fitted:      {}x{}", widget.image_width, widget.image_height);
            println!("crop window: {}x{}", widget.crop_width, widget.crop_height);
            println!("min scale:   {}", widget.min_scale);
            println!("center focus: {}", widget.enable_center_focus);
        }
        Command::Crop {
            view,
            x,
            y,
            scale,
            output_dir,
        } => {
            let config = build_config(&view, output_dir);

            let mut cropper = ImageCropper::new(
                config.props_for(&view.image),
                ImageSizeProbe,
                HeadlessPanZoom,
                log_state,
            );
            cropper.mount().await?;
            let scale = scale.unwrap_or(cropper.state().min_scale);
            cropper.handle_move(x, y, scale);

            let params = cropper
                .crop_params()
                .context("cropper did not finish loading")?;
            let editor = RasterEditor::new(config.output_dir.clone());
            info!("Writing into {}", editor.output_dir().display());
            let outcome = cropframe::crop(&params, &editor).await?;

            info!("Wrote {}", outcome.uri.display());
            println!("offset:      {}", outcome.data.offset);
            println!("size:        {}", outcome.data.size);
            println!("display:     {}", outcome.data.display_size);
            let orientation = outcome.data.orientation();
            println!("orientation: {} ({})", orientation, orientation.code());
            println!("output:      {}", outcome.uri.display());
        }
    }

    Ok(())
}
