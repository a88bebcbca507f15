//! Host-side image volumes.
//!
//! [`VolumeImage`] is the in-memory source an image store resolves names to:
//! a `width x height x depth` scalar volume in slice-major order. Its
//! [`extract`](VolumeImage::extract) copies a described region out of the
//! volume, which is the host half of a tile push; the device half only ever
//! sees the already-extracted pixels.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::extent::ImageExtent;
use crate::format::ElementType;
use crate::region::TileRegion;

/// A host-side scalar volume, stored slice-major (`z`, then `y`, then `x`).
///
/// Values are kept as `f32` regardless of [`ElementType`]; the element type
/// travels as metadata so that device allocations can be sized without
/// touching pixel data.
#[derive(Clone)]
pub struct VolumeImage {
    /// Raw values, `width * height * depth` elements.
    pub(crate) data: Vec<f32>,
    /// Volume dimensions.
    pub extent: ImageExtent,
    /// Element type the values represent.
    pub element_type: ElementType,
}

impl VolumeImage {
    /// Creates a zero-filled volume.
    ///
    /// Unlike computed tile geometry, a source volume must have at least
    /// one pixel along every axis.
    pub fn new(extent: ImageExtent, element_type: ElementType) -> Result<Self> {
        Self::validate_extent(extent)?;
        Ok(Self {
            data: vec![0.0; extent.num_pixels() as usize],
            extent,
            element_type,
        })
    }

    /// Creates a volume from existing values.
    pub fn from_f32(data: Vec<f32>, extent: ImageExtent, element_type: ElementType) -> Result<Self> {
        Self::validate_extent(extent)?;
        let expected = extent.num_pixels() as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            extent,
            element_type,
        })
    }

    fn validate_extent(extent: ImageExtent) -> Result<()> {
        if extent.width <= 0 || extent.height <= 0 || extent.depth <= 0 {
            return Err(Error::InvalidDimensions {
                width: extent.width,
                height: extent.height,
                depth: extent.depth,
            });
        }
        Ok(())
    }

    /// Volume dimensions.
    #[inline]
    pub fn extent(&self) -> ImageExtent {
        self.extent
    }

    /// Element type metadata.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Raw values.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw values.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of stored elements.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Value at (x, y, z), or `None` outside the volume.
    #[inline]
    pub fn value_at(&self, x: i32, y: i32, z: i32) -> Option<f32> {
        if !self.extent.region().contains(x, y, z) {
            return None;
        }
        let w = self.extent.width as usize;
        let h = self.extent.height as usize;
        Some(self.data[(z as usize * h + y as usize) * w + x as usize])
    }

    /// Copies the described region out of this volume.
    ///
    /// Extraction is total. Pixels of the region that fall outside the
    /// volume read as zero, and a region with non-positive extents yields
    /// an empty volume; degenerate geometry is the caller's signal, not a
    /// failure of the copy. Slices of the output are filled in parallel.
    pub fn extract(&self, region: &TileRegion) -> VolumeImage {
        let out_w = region.width.max(0);
        let out_h = region.height.max(0);
        let out_d = region.depth.max(0);
        let plane = out_w as usize * out_h as usize;
        let mut data = vec![0.0; plane * out_d as usize];

        if let Some(src) = region.intersect(&self.extent.region()) {
            let src_w = self.extent.width as usize;
            let src_h = self.extent.height as usize;
            let run = src.width as usize;
            data.par_chunks_mut(plane).enumerate().for_each(|(dz, out_slice)| {
                let z = region.z + dz as i32;
                if z < src.z || z >= src.z_end() {
                    return;
                }
                for y in src.y..src.y_end() {
                    let src_row = (z as usize * src_h + y as usize) * src_w + src.x as usize;
                    let dst_row =
                        (y - region.y) as usize * out_w as usize + (src.x - region.x) as usize;
                    out_slice[dst_row..dst_row + run]
                        .copy_from_slice(&self.data[src_row..src_row + run]);
                }
            });
        }

        VolumeImage {
            data,
            extent: ImageExtent::new(out_w, out_h, out_d),
            element_type: self.element_type,
        }
    }
}

impl std::fmt::Debug for VolumeImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeImage")
            .field("extent", &self.extent)
            .field("element_type", &self.element_type)
            .field("num_elements", &self.num_elements())
            .finish()
    }
}
