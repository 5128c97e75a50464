//! Command line value parsers and the flags shared by every subcommand.

use crate::config::RenderConfig;
use crate::controllers::cli::zoom::{Selection, ZoomStep};
use crate::core::actions::render_frame::RenderStrategy;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::presenters::file::frame_sequence::FrameFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// `--strategy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Render on one thread
    Serial,
    /// Spread rows over all cores
    Parallel,
}

impl From<StrategyArg> for RenderStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Serial => Self::Serial,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Flags that override fields of the loaded [`RenderConfig`].
#[derive(Debug, Clone, Default, Args)]
pub struct RenderOverrides {
    /// Canvas width in pixels
    #[arg(long, global = true)]
    pub width: Option<u32>,
    /// Canvas height in pixels
    #[arg(long, global = true)]
    pub height: Option<u32>,
    /// Gradient image; its first row becomes the palette
    #[arg(long, global = true)]
    pub gradient: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    pub strategy: Option<StrategyArg>,
    #[arg(long, global = true, value_enum)]
    pub format: Option<FrameFormat>,
}

impl RenderOverrides {
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(gradient) = &self.gradient {
            config.gradient = Some(gradient.clone());
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

fn parse_numbers<T: FromStr>(s: &str, expected: usize) -> Result<Vec<T>, String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<T>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("'{}' is not a comma separated list of numbers", s))?;

    if values.len() != expected {
        return Err(format!("expected {} values, got {}", expected, values.len()));
    }

    Ok(values)
}

/// Parses `x_min,x_max,y_min,y_max`.
pub fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let v = parse_numbers::<f64>(s, 4)?;

    Viewport::new(v[0], v[1], v[2], v[3]).map_err(|err| err.to_string())
}

/// Parses a selection as `x0,y0,x1,y1` pixel corners.
pub fn parse_selection(s: &str) -> Result<Selection, String> {
    let v = parse_numbers::<u32>(s, 4)?;

    Ok(Selection {
        from: Point { x: v[0], y: v[1] },
        to: Point { x: v[2], y: v[3] },
    })
}

/// Parses one zoom step: `back`, `reset`, `view=x_min,x_max,y_min,y_max`
/// or a selection.
pub fn parse_zoom_step(s: &str) -> Result<ZoomStep, String> {
    match s.trim() {
        "back" => Ok(ZoomStep::Back),
        "reset" => Ok(ZoomStep::Reset),
        step => match step.strip_prefix("view=") {
            Some(viewport) => parse_viewport(viewport).map(ZoomStep::Goto),
            None => parse_selection(step).map(ZoomStep::Select),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        assert_eq!(
            parse_viewport("-2, 1, -1, 1").unwrap(),
            Viewport::default()
        );
    }

    #[test]
    fn test_parse_viewport_rejects_inverted_bounds() {
        assert!(parse_viewport("1,-2,-1,1").is_err());
    }

    #[test]
    fn test_parse_viewport_rejects_wrong_arity() {
        assert_eq!(
            parse_viewport("1,2,3").unwrap_err(),
            "expected 4 values, got 3"
        );
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("10,20,30,40").unwrap(),
            Selection {
                from: Point { x: 10, y: 20 },
                to: Point { x: 30, y: 40 },
            }
        );
    }

    #[test]
    fn test_parse_selection_rejects_negative_pixels() {
        assert!(parse_selection("-1,0,10,10").is_err());
    }

    #[test]
    fn test_parse_zoom_steps() {
        assert_eq!(parse_zoom_step("back").unwrap(), ZoomStep::Back);
        assert_eq!(parse_zoom_step("reset").unwrap(), ZoomStep::Reset);
        assert_eq!(
            parse_zoom_step("view=-2,1,-1,1").unwrap(),
            ZoomStep::Goto(Viewport::default())
        );
        assert_eq!(
            parse_zoom_step("1,2,3,4").unwrap(),
            ZoomStep::Select(Selection {
                from: Point { x: 1, y: 2 },
                to: Point { x: 3, y: 4 },
            })
        );
        assert!(parse_zoom_step("view=1,-2,-1,1").is_err());
        assert!(parse_zoom_step("forward").is_err());
    }

    #[test]
    fn test_strategy_flag_maps_onto_render_strategy() {
        let serial = <StrategyArg as ValueEnum>::from_str("serial", false).unwrap();
        let parallel = <StrategyArg as ValueEnum>::from_str("parallel", false).unwrap();

        assert_eq!(RenderStrategy::from(serial), RenderStrategy::Serial);
        assert_eq!(RenderStrategy::from(parallel), RenderStrategy::Parallel);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut config = RenderConfig::default();
        let overrides = RenderOverrides {
            width: Some(64),
            strategy: Some(StrategyArg::Serial),
            ..RenderOverrides::default()
        };

        overrides.apply(&mut config);

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 400);
        assert_eq!(config.strategy, RenderStrategy::Serial);
        assert_eq!(config.format, FrameFormat::Png);
    }
}
