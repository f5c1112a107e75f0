//! Drift field demo
//!
//! Samples an interpolated noise channel the way an animation loop would:
//! one sample per frame, frequency and amplitude taken from JSON parameters.

use anyhow::Result;
use ember_math::random::FieldParams;
use ember_math::scalar;

const PARAMS: &str = r#"{ "seed": 7, "frequency": 0.25, "amplitude": 90.0 }"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let params: FieldParams = serde_json::from_str(PARAMS)?;
    tracing::info!(seed = params.seed, "sampling drift field");

    for frame in 0..120u32 {
        let t = frame as f32 / 60.0;
        let angle = scalar::wrapf(params.sample(t), 0.0, 360.0);
        println!("frame {frame:3}  t {t:5.2}  angle {angle:7.2}");
    }

    Ok(())
}
