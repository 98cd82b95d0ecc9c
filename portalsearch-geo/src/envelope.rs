//! Axis-aligned rectangles and their extraction from query values.

use serde_json::Value;
use std::fmt::Write;

/// Axis-aligned rectangle as min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Envelope {
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Builds an envelope from `[xmin, ymin, xmax, ymax]`.
    pub const fn from_bounds(bounds: [f64; 4]) -> Self {
        Self::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    /// Extracts an envelope from a JSON object with `xmin/ymin/xmax/ymax`
    /// members or from a 4-number array. Returns `None` for any other shape.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::new(
                map.get("xmin")?.as_f64()?,
                map.get("ymin")?.as_f64()?,
                map.get("xmax")?.as_f64()?,
                map.get("ymax")?.as_f64()?,
            )),
            Value::Array(items) if items.len() == 4 => {
                let mut bounds = [0.0; 4];
                for (slot, item) in bounds.iter_mut().zip(items) {
                    *slot = item.as_f64()?;
                }
                Some(Self::from_bounds(bounds))
            }
            _ => None,
        }
    }

    /// Parses `"xmin,ymin,xmax,ymax"`.
    pub fn from_delimited(text: &str) -> Option<Self> {
        let parts: Vec<f64> = text
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        let bounds: [f64; 4] = parts.try_into().ok()?;
        if bounds.iter().all(|v| v.is_finite()) {
            Some(Self::from_bounds(bounds))
        } else {
            None
        }
    }

    pub fn min(&self) -> (f64, f64) {
        (self.xmin, self.ymin)
    }

    pub fn max(&self) -> (f64, f64) {
        (self.xmax, self.ymax)
    }

    pub fn bounds(&self) -> [f64; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }

    /// Formats the upstream `bbox` value: four comma-joined decimals with
    /// shortest round-trip precision.
    pub fn to_bbox_param(&self) -> String {
        let mut out = String::new();
        for (i, value) in self.bounds().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", format_coordinate(*value));
        }
        out
    }
}

/// Formats like a JavaScript number: integral values without a fraction,
/// tiny and huge magnitudes in exponent form.
fn format_coordinate(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-7..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        // Rust prints `1e-11`; JS prints `1e-11` too, but `4.3e21` as `4.3e+21`.
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_object() {
        let envelope = Envelope::from_json(&json!({
            "xmin": -118.0, "ymin": 32.0, "xmax": -116.0, "ymax": 34.0,
            "spatialReference": {"wkid": 4326}
        }))
        .unwrap();
        assert_eq!(envelope, Envelope::new(-118.0, 32.0, -116.0, 34.0));
    }

    #[test]
    fn from_json_array() {
        let envelope = Envelope::from_json(&json!([1, 2, 3, 4])).unwrap();
        assert_eq!(envelope.min(), (1.0, 2.0));
        assert_eq!(envelope.max(), (3.0, 4.0));
    }

    #[test]
    fn from_json_rejects_other_shapes() {
        assert!(Envelope::from_json(&json!([1, 2, 3])).is_none());
        assert!(Envelope::from_json(&json!([1, 2, 3, "x"])).is_none());
        assert!(Envelope::from_json(&json!({"xmin": 1, "ymin": 2, "xmax": 3})).is_none());
        assert!(Envelope::from_json(&json!("1,2,3,4")).is_none());
    }

    #[test]
    fn from_delimited_string() {
        let envelope = Envelope::from_delimited("-118, 32,-116,34").unwrap();
        assert_eq!(envelope.bounds(), [-118.0, 32.0, -116.0, 34.0]);
        assert!(Envelope::from_delimited("1,2,3").is_none());
        assert!(Envelope::from_delimited("1,2,3,four").is_none());
    }

    #[test]
    fn bbox_param_formatting() {
        let envelope = Envelope::new(-118.00000000000001, 31.999999999999982, -116.0, 34.5);
        assert_eq!(
            envelope.to_bbox_param(),
            "-118.00000000000001,31.999999999999982,-116,34.5"
        );
    }

    #[test]
    fn bbox_param_small_values_use_exponent() {
        let envelope = Envelope::new(-4.363816717609226e-11, 0.0, 1.0, 2.0);
        assert_eq!(envelope.to_bbox_param(), "-4.363816717609226e-11,0,1,2");
    }
}
