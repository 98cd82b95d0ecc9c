//! Reprojection of rectangles into WGS84.

use crate::envelope::Envelope;
use crate::error::{GeoError, GeoResult};
use crate::spatial_ref::{canonical_wkid, WGS84_WKID};
use proj4rs::Proj;
use tracing::debug;

const WGS84_DEF: &str = "+proj=longlat +datum=WGS84 +no_defs";

const WEB_MERCATOR_DEF: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

// Web mercator treats WGS84 coordinates as if they lay on this sphere, so its
// inverse targets the sphere directly instead of shifting onto the ellipsoid.
const WEB_MERCATOR_GEOGRAPHIC_DEF: &str = "+proj=longlat +a=6378137 +b=6378137 +no_defs";

const NAD83_DEF: &str = "+proj=longlat +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +no_defs";

/// Source and target definitions for a supported WKID, and whether the
/// source is geographic (degrees in, radians to proj4rs) or projected.
fn definition(wkid: u32) -> Option<(&'static str, &'static str, bool)> {
    match wkid {
        4326 => Some((WGS84_DEF, WGS84_DEF, true)),
        4269 => Some((NAD83_DEF, WGS84_DEF, true)),
        3857 | 3785 | 900913 | 102113 => {
            Some((WEB_MERCATOR_DEF, WEB_MERCATOR_GEOGRAPHIC_DEF, false))
        }
        _ => None,
    }
}

/// Reprojects both corners of `envelope` from `wkid` into WGS84 degrees.
///
/// WGS84 input is returned unchanged.
pub fn to_wgs84(envelope: Envelope, wkid: u32) -> GeoResult<Envelope> {
    let wkid = canonical_wkid(wkid);
    if wkid == WGS84_WKID {
        return Ok(envelope);
    }

    let (src_def, dst_def, geographic) =
        definition(wkid).ok_or(GeoError::UnsupportedWkid(wkid))?;
    if geographic {
        for lat in [envelope.ymin, envelope.ymax] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(GeoError::LatitudeOutOfRange { wkid, lat });
            }
        }
    }
    let src = Proj::from_proj_string(src_def)?;
    let dst = Proj::from_proj_string(dst_def)?;

    let (xmin, ymin) = transform_point(&src, &dst, envelope.min(), geographic)?;
    let (xmax, ymax) = transform_point(&src, &dst, envelope.max(), geographic)?;

    debug!(wkid, ?envelope, xmin, ymin, xmax, ymax, "reprojected rectangle to wgs84");
    Ok(Envelope::new(xmin, ymin, xmax, ymax))
}

fn transform_point(
    src: &Proj,
    dst: &Proj,
    (x, y): (f64, f64),
    geographic: bool,
) -> GeoResult<(f64, f64)> {
    let mut point = if geographic {
        (x.to_radians(), y.to_radians(), 0.0)
    } else {
        (x, y, 0.0)
    };
    proj4rs::transform::transform(src, dst, &mut point)?;

    let (lon, lat) = (point.0.to_degrees(), point.1.to_degrees());
    if lon.is_finite() && lat.is_finite() {
        Ok((lon, lat))
    } else {
        Err(GeoError::Projection(format!(
            "non-finite result for point ({x}, {y})"
        )))
    }
}
