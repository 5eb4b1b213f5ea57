//! Binary voxel format.
//!
//! A 16-byte header of four little-endian `u32` (`nx`, `ny`, `nz`, frame count)
//! followed by `frames * nz * ny * nx` little-endian IEEE-754 `f32` densities,
//! frame by frame, layer (z) by layer, line (y) by line, value (x) by value.

use super::IoError;
use crate::bounds::Extents;
use crate::float_types::{Density, is_density};
use crate::grid::DensityGrid;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 16;

fn header(grid: &DensityGrid) -> [u8; HEADER_LEN] {
    let e = grid.extents();
    let mut out = [0u8; HEADER_LEN];
    for (chunk, value) in out
        .chunks_exact_mut(4)
        .zip([e.nx(), e.ny(), e.nz(), grid.frame_count()])
    {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    out
}

fn parse_header(bytes: &[u8; HEADER_LEN]) -> Result<(u32, Extents), IoError> {
    let mut words = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]));
    let mut next = || words.next().unwrap_or_default();
    let (nx, ny, nz, frames) = (next(), next(), next(), next());
    if frames == 0 {
        return Err(IoError::MalformedInput("frame count is zero".into()));
    }
    Ok((frames, Extents::new(nx, ny, nz)?))
}

fn decode_values(payload: &[u8], expected: usize) -> Result<Vec<Density>, IoError> {
    if expected.checked_mul(4) != Some(payload.len()) {
        return Err(IoError::MalformedInput(format!(
            "expected {} bytes of densities, found {}",
            expected.saturating_mul(4),
            payload.len()
        )));
    }
    payload
        .chunks_exact(4)
        .enumerate()
        .map(|(i, c)| {
            let value = f32::from_le_bytes([c[0], c[1], c[2], c[3]]);
            if is_density(value) {
                Ok(value)
            } else {
                Err(IoError::MalformedInput(format!(
                    "value {value} at index {i} is outside [0, 1]"
                )))
            }
        })
        .collect()
}

impl DensityGrid {
    /// Write header and values to `w`, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<u64, IoError> {
        w.write_all(&header(self))?;
        for value in self.values() {
            w.write_all(&value.to_le_bytes())?;
        }
        Ok((HEADER_LEN + self.values().len() * 4) as u64)
    }

    /// Encode into an in-memory buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.values().len() * 4);
        out.extend_from_slice(&header(self));
        for value in self.values() {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Decode one grid from the front of `r`. Bytes after the grid are left unread.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, IoError> {
        let mut head = [0u8; HEADER_LEN];
        r.read_exact(&mut head)?;
        let (frames, extents) = parse_header(&head)?;
        let len = Self::storage_len(frames, extents)?;

        let byte_len = (len as u64).saturating_mul(4);
        let mut payload = Vec::new();
        r.by_ref().take(byte_len).read_to_end(&mut payload)?;
        let values = decode_values(&payload, len)?;
        Ok(Self::from_raw(frames, extents, values))
    }

    /// Decode a complete buffer; trailing bytes are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IoError> {
        if bytes.len() < HEADER_LEN {
            return Err(IoError::MalformedInput(format!(
                "{} bytes is shorter than the {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }
        let (head, payload) = bytes.split_at(HEADER_LEN);
        let mut header_bytes = [0u8; HEADER_LEN];
        header_bytes.copy_from_slice(head);
        let (frames, extents) = parse_header(&header_bytes)?;
        let len = Self::storage_len(frames, extents)?;
        let values = decode_values(payload, len)?;
        Ok(Self::from_raw(frames, extents, values))
    }

    /// Write the grid to `path` in the binary voxel format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        let written = self.write_to(&mut w)?;
        w.flush()?;
        tracing::debug!(path = %path.display(), bytes = written, "saved voxel model");
        Ok(())
    }

    /// Read a grid saved with [`save`](Self::save). The file must hold exactly one grid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
        let grid = Self::from_bytes(&bytes)?;
        tracing::debug!(path = %path.display(), extents = %grid.extents(), "loaded voxel model");
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DensityGrid {
        DensityGrid::from_fn(Extents::new(2, 1, 3).unwrap(), |[x, _, z]| {
            (x + 2 * z) as f32 / 8.0
        })
        .unwrap()
    }

    #[test]
    fn header_layout() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), HEADER_LEN + 6 * 4);
        assert_eq!(&bytes[0..4], &2u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &3u32.to_le_bytes());
        assert_eq!(&bytes[12..16], &1u32.to_le_bytes());
        // second value is x = 1, z = 0
        assert_eq!(&bytes[20..24], &0.125f32.to_le_bytes());
    }

    #[test]
    fn write_to_matches_to_bytes() {
        let grid = sample();
        let mut out = Vec::new();
        let n = grid.write_to(&mut out).unwrap();
        assert_eq!(n as usize, out.len());
        assert_eq!(out, grid.to_bytes());
    }

    #[test]
    fn truncated_and_trailing_input() {
        let bytes = sample().to_bytes();
        assert!(matches!(
            DensityGrid::from_bytes(&bytes[..bytes.len() - 1]),
            Err(IoError::MalformedInput(_))
        ));
        assert!(matches!(
            DensityGrid::from_bytes(&bytes[..10]),
            Err(IoError::MalformedInput(_))
        ));
        let mut longer = bytes.clone();
        longer.push(0);
        assert!(DensityGrid::from_bytes(&longer).is_err());

        // streaming decode stops at the end of the grid
        let mut cursor = std::io::Cursor::new(longer);
        assert_eq!(DensityGrid::read_from(&mut cursor).unwrap(), sample());
    }

    #[test]
    fn rejects_zero_extent_and_bad_values() {
        let mut bytes = sample().to_bytes();
        bytes[4..8].copy_from_slice(&0u32.to_le_bytes());
        assert!(matches!(DensityGrid::from_bytes(&bytes), Err(IoError::Voxel(_))));

        let mut bytes = sample().to_bytes();
        bytes[12..16].copy_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            DensityGrid::from_bytes(&bytes),
            Err(IoError::MalformedInput(_))
        ));

        let mut bytes = sample().to_bytes();
        bytes[16..20].copy_from_slice(&1.5f32.to_le_bytes());
        assert!(matches!(
            DensityGrid::from_bytes(&bytes),
            Err(IoError::MalformedInput(_))
        ));
    }

    #[test]
    fn multi_frame_files_decode() {
        let mut bytes = Vec::new();
        for word in [1u32, 1, 1, 2] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&0.25f32.to_le_bytes());
        bytes.extend_from_slice(&0.75f32.to_le_bytes());
        let grid = DensityGrid::from_bytes(&bytes).unwrap();
        assert_eq!(grid.frame_count(), 2);
        assert_eq!(grid.get(0, 0, 0, 0), Some(0.25));
        assert_eq!(grid.get(1, 0, 0, 0), Some(0.75));
        assert_eq!(grid.to_bytes(), bytes);
    }
}
