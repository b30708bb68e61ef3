//! Pixel <-> geodetic mapping through projected map coordinates.
//!
//! Image coordinates address the outer upper-left corner of a pixel. The
//! pixel grid may be rotated against map north by the orientation angle θ:
//!
//! ```text
//! line   = (dx·sinθ − dy·cosθ) / pixel_size_y
//! sample = (dx·cosθ + dy·sinθ) / pixel_size_x
//! ```
//!
//! where (dx, dy) is the map offset from the scene's UL corner. With θ = 0
//! this is the plain north-up affine grid.

use espa_common::{GeoCoord, GeolocError, GeolocResult, ImgCoord, MapCoord};

use crate::context::Geoloc;

impl Geoloc {
    /// Geodetic coordinate to image coordinate.
    ///
    /// Fill input returns [`GeolocError::Fill`] without touching the
    /// projection.
    pub fn to_space(&self, geo: &GeoCoord) -> GeolocResult<ImgCoord> {
        if geo.is_fill {
            return Err(GeolocError::Fill("to_space"));
        }

        let (x, y) = self
            .forward
            .forward(geo.lon, geo.lat)
            .map_err(|e| GeolocError::transform(format!("forward {}: {}", self.def.projection, e)))?;

        Ok(self.map_to_image(&MapCoord::new(x, y)))
    }

    /// Image coordinate to geodetic coordinate.
    pub fn from_space(&self, img: &ImgCoord) -> GeolocResult<GeoCoord> {
        if img.is_fill {
            return Err(GeolocError::Fill("from_space"));
        }

        let map = self.image_to_map(img);
        let (lon, lat) = self
            .inverse
            .inverse(map.x, map.y)
            .map_err(|e| GeolocError::transform(format!("inverse {}: {}", self.def.projection, e)))?;

        Ok(GeoCoord::new(lon, lat))
    }

    /// Map coordinate to image coordinate. Pure arithmetic, no projection.
    pub fn map_to_image(&self, map: &MapCoord) -> ImgCoord {
        if map.is_fill {
            return ImgCoord::fill();
        }
        let dx = map.x - self.def.ul_corner.x;
        let dy = map.y - self.def.ul_corner.y;

        let dl = dx * self.sin_orien - dy * self.cos_orien;
        let ds = dx * self.cos_orien + dy * self.sin_orien;

        ImgCoord::new(dl / self.def.pixel_size_y(), ds / self.def.pixel_size_x())
    }

    /// Image coordinate to map coordinate. Exact inverse of [`Self::map_to_image`].
    pub fn image_to_map(&self, img: &ImgCoord) -> MapCoord {
        if img.is_fill {
            return MapCoord::fill();
        }
        let dl = img.line * self.def.pixel_size_y();
        let ds = img.sample * self.def.pixel_size_x();

        let dy = ds * self.sin_orien - dl * self.cos_orien;
        let dx = ds * self.cos_orien + dl * self.sin_orien;

        MapCoord::new(self.def.ul_corner.x + dx, self.def.ul_corner.y + dy)
    }
}
