//! Input WKID selection.

use tracing::debug;

/// WGS84 geographic coordinates.
pub const WGS84_WKID: u32 = 4326;

/// Spherical web mercator.
pub const WEB_MERCATOR_WKID: u32 = 3857;

/// Esri's pre-EPSG code for web mercator.
pub const LEGACY_WEB_MERCATOR_WKID: u32 = 102100;

/// WKIDs with a registered projection definition.
pub const SUPPORTED_WKIDS: [u32; 6] = [4326, 4269, 3857, 3785, 900913, 102113];

/// Outcome of picking an input spatial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Reprojection to WGS84 is possible from this WKID.
    Supported(u32),
    /// The WKID is known to the caller but not to us; the filter must be dropped.
    Unsupported(u32),
}

impl Resolution {
    pub fn wkid(self) -> u32 {
        match self {
            Resolution::Supported(wkid) | Resolution::Unsupported(wkid) => wkid,
        }
    }
}

/// Maps legacy aliases onto the code the projection registry uses.
pub fn canonical_wkid(wkid: u32) -> u32 {
    if wkid == LEGACY_WEB_MERCATOR_WKID {
        WEB_MERCATOR_WKID
    } else {
        wkid
    }
}

pub fn is_supported(wkid: u32) -> bool {
    SUPPORTED_WKIDS.contains(&wkid)
}

/// Picks the input WKID for a rectangle.
///
/// Precedence: the WKID embedded in the geometry, then the `inSR` hint, then
/// WGS84. A zero WKID counts as absent.
pub fn resolve_wkid(embedded: Option<u32>, hint: Option<u32>) -> Resolution {
    let Some(wkid) = embedded.filter(|w| *w != 0).or(hint.filter(|w| *w != 0)) else {
        debug!("no spatial reference supplied, assuming wkid {WGS84_WKID}");
        return Resolution::Supported(WGS84_WKID);
    };

    let wkid = canonical_wkid(wkid);
    if is_supported(wkid) {
        Resolution::Supported(wkid)
    } else {
        Resolution::Unsupported(wkid)
    }
}
