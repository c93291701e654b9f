//! RGB ↔ HSV conversion in device units.
//!
//! The forward conversion scales saturation by 1000, the wheel conversion
//! divides it by 997. The controller firmware expects exactly this pair, so
//! a forward-then-wheel round trip is lossy for saturated-but-not-pure colors.
//! All scaling truncates toward zero.

use crate::protocol::{HSV_SCALE, HUE_MAX, WHEEL_SAT_MAX};

use super::{HsvColor, Rgb};

/// Continuous RGB → HSV, all components in `[0, 1]`, hue cyclic in `[0, 1)`.
fn rgb_to_hsv_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let range = maxc - minc;
    let s = range / maxc;
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Continuous HSV → RGB. Hue is taken modulo one full turn by sector, so
/// `h == 1.0` lands on red like `h == 0.0`.
fn hsv_to_rgb_unit(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0) as i64;
    let f = h * 6.0 - sector as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0) as u8
}

/// Convert an RGB color to device HSV units.
///
/// `hue` is in `[0, 359]`, `sat` and `val` in `[0, 1000]`, each truncated.
pub fn rgb_to_hsv(rgb: Rgb) -> HsvColor {
    let (h, s, v) = rgb_to_hsv_unit(
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    );
    HsvColor {
        hue: (h * f64::from(HUE_MAX)) as u16,
        sat: (s * f64::from(HSV_SCALE)) as u16,
        val: (v * f64::from(HSV_SCALE)) as u16,
    }
}

/// Convert a color-wheel selection to RGB at full value.
///
/// `sat` is clamped to 997 and normalized by 997. `hue` is normalized by 360
/// without wrapping; 360 yields the same color as 0.
pub fn wheel_to_rgb(hue: u16, sat: u16) -> Rgb {
    let sat = sat.min(WHEEL_SAT_MAX);
    let (r, g, b) = hsv_to_rgb_unit(
        f64::from(hue) / f64::from(HUE_MAX),
        f64::from(sat) / f64::from(WHEEL_SAT_MAX),
        1.0,
    );
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

/// Convert device HSV back to RGB using the generic 1000 scale.
///
/// Inverse companion of [`rgb_to_hsv`] (up to truncation). Saturation and
/// value above 1000 are treated as 1000.
pub fn hsv_to_rgb(hsv: HsvColor) -> Rgb {
    let scale = f64::from(HSV_SCALE);
    let (r, g, b) = hsv_to_rgb_unit(
        f64::from(hsv.hue) / f64::from(HUE_MAX),
        f64::from(hsv.sat.min(HSV_SCALE)) / scale,
        f64::from(hsv.val.min(HSV_SCALE)) / scale,
    );
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}
