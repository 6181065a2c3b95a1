use crate::math::Color;

pub const DEFAULT_REGION_COLOR: Color = Color::hex(0xed4543);
const ACTIVE_COLOR: Color = Color::hex(0x00F7FF);

/// Colours a region was authored with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionColors {
    pub fill: Color,
    pub stroke: Color,
}

impl RegionColors {
    /// Parse authored hex strings; unparseable or missing ones use the default
    pub fn from_hex(fill: Option<&str>, stroke: Option<&str>) -> Self {
        let parse = |s: Option<&str>| s.and_then(Color::parse_hex).unwrap_or(DEFAULT_REGION_COLOR);
        Self { fill: parse(fill), stroke: parse(stroke) }
    }
}

impl Default for RegionColors {
    fn default() -> Self {
        Self { fill: DEFAULT_REGION_COLOR, stroke: DEFAULT_REGION_COLOR }
    }
}

/// Style applied to a region for one animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseStyle {
    pub fill_opacity: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub z_index: i32,
}

/// Pulse for a region at `time` seconds. The highlighted region pulses
/// fast and bright in the accent colour; the rest breathe slowly in their
/// own colours.
pub fn pulse_style(active: bool, time: f64, original: RegionColors) -> PulseStyle {
    let (speed, base, range) = if active { (5.0, 0.6, 0.25) } else { (1.0, 0.3, 0.05) };
    let fill_opacity = (base + (time * speed).sin() * range) as f32;

    if active {
        PulseStyle {
            fill_opacity,
            fill: ACTIVE_COLOR,
            stroke: ACTIVE_COLOR,
            stroke_width: 4.0,
            z_index: 10,
        }
    } else {
        PulseStyle {
            fill_opacity,
            fill: original.fill,
            stroke: original.stroke,
            stroke_width: 2.0,
            z_index: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pulse_is_brighter_and_on_top() {
        let colors = RegionColors::from_hex(Some("#112233"), None);
        for step in 0..100 {
            let t = step as f64 * 0.037;
            let active = pulse_style(true, t, colors);
            let idle = pulse_style(false, t, colors);

            assert!(active.fill_opacity >= 0.35 - 1e-6 && active.fill_opacity <= 0.85 + 1e-6);
            assert!(idle.fill_opacity >= 0.25 - 1e-6 && idle.fill_opacity <= 0.35 + 1e-6);
            assert_eq!(active.fill, ACTIVE_COLOR);
            assert_eq!((active.stroke_width, active.z_index), (4.0, 10));
            assert_eq!(idle.fill, Color::hex(0x112233));
            assert_eq!(idle.stroke, DEFAULT_REGION_COLOR);
            assert_eq!((idle.stroke_width, idle.z_index), (2.0, 1));
        }
    }

    #[test]
    fn active_pulse_is_faster() {
        // quarter period of the active pulse
        let t = std::f64::consts::FRAC_PI_2 / 5.0;
        assert!((pulse_style(true, t, RegionColors::default()).fill_opacity - 0.85).abs() < 1e-6);
        assert!(pulse_style(false, t, RegionColors::default()).fill_opacity < 0.32);
    }
}
