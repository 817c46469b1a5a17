//! Color inspection and camera sampling commands.

use std::path::PathBuf;

use trueshade_core::{FilterMode, HexColor, Rgb};
use trueshade_storefront::camera::{CameraSession, StillImageCamera};
use trueshade_storefront::color::math::{gradient_pair, shade_color};
use trueshade_storefront::color::vision::simulate_hex;
use trueshade_storefront::color::SampledColor;
use trueshade_storefront::{AppError, Result};

/// Parse `#rrggbb`, `rrggbb`, or `r,g,b`.
fn parse_color(input: &str) -> Result<Rgb> {
    if !input.contains(',') {
        return Ok(HexColor::parse(input)?.rgb());
    }

    let channels: Vec<u8> = input
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| AppError::BadRequest(format!("Invalid color channel in {input:?}: {e}")))?;

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(AppError::BadRequest(format!(
            "Expected three channels, got {}",
            channels.len()
        ))),
    }
}

fn readout(sample: &SampledColor) -> String {
    let Rgb { r, g, b } = sample.rgb;
    format!(
        "{hex}  rgb({r}, {g}, {b})\n{hue} • {tone}\n{advice}",
        hex = sample.hex,
        hue = sample.hue,
        tone = sample.tone.label(),
        advice = sample.advice,
    )
}

pub fn inspect(input: &str) -> Result<()> {
    let sample = SampledColor::analyze(parse_color(input)?);
    println!("{}", readout(&sample));
    Ok(())
}

pub fn shade(input: &str, amount: i32) -> Result<()> {
    let color = HexColor::from(parse_color(input)?);
    let shaded = shade_color(&color, amount);
    let (start, end) = gradient_pair(&shaded);
    println!("{shaded}");
    println!("gradient: {start} -> {end}");
    Ok(())
}

pub fn simulate(input: &str, mode: Option<FilterMode>) -> Result<()> {
    let color = HexColor::from(parse_color(input)?);
    let modes = mode.map_or_else(|| FilterMode::ALL.to_vec(), |m| vec![m]);
    for mode in modes {
        println!(
            "{:<14} {}  ({})",
            mode.label(),
            simulate_hex(mode, &color),
            mode.description()
        );
    }
    Ok(())
}

/// Sample the center of a PNG through the camera pipeline.
///
/// Camera failures print a notice and leave the process successful.
pub async fn sample(image: PathBuf, torch: bool) {
    let camera = StillImageCamera::new(image);
    let mut session = match CameraSession::open(&camera).await {
        Ok(session) => session,
        Err(e) => {
            println!("{}", e.notice());
            return;
        }
    };

    match session.sample() {
        Some(sample) => println!("{}", readout(sample)),
        None => println!("No frame available yet."),
    }

    if torch {
        match session.toggle_torch().await {
            Ok(on) => println!("Torch {}", if on { "on" } else { "off" }),
            Err(e) => println!("{}", e.notice()),
        }
    }

    session.close();
}
