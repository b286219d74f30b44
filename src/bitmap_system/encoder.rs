use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::constants::{
    BITMAP_SIGNATURE, BITS_PER_PIXEL, BYTES_PER_PIXEL, COMPRESSION, INFO_HEADER_SIZE,
    PIXELS_PER_METER, PIXEL_ARRAY_OFFSET, PLANES,
};
use crate::errors::SimulationError;
use crate::render_system::canvas::Canvas;

/// Layout of each pixel row in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAlignment {
    /// Rows follow each other without padding, whatever the width.
    #[default]
    Packed,
    /// Rows are zero-padded to a multiple of four bytes.
    FourByte,
}

impl RowAlignment {
    pub fn padding(self, width: u32) -> usize {
        match self {
            RowAlignment::Packed => 0,
            RowAlignment::FourByte => {
                let row = width as usize * BYTES_PER_PIXEL as usize;
                (4 - row % 4) % 4
            }
        }
    }

    pub fn row_stride(self, width: u32) -> usize {
        width as usize * BYTES_PER_PIXEL as usize + self.padding(width)
    }
}

pub const HEADER_SIZE: usize = PIXEL_ARRAY_OFFSET as usize;

/// The 14-byte file header followed by the 40-byte info header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_offset: u32,
    pub info_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl BitmapHeader {
    pub fn new(width: u32, height: u32, alignment: RowAlignment) -> Result<Self, SimulationError> {
        let image_size = u32::try_from(alignment.row_stride(width))
            .ok()
            .and_then(|stride| stride.checked_mul(height))
            .and_then(|size| size.checked_add(PIXEL_ARRAY_OFFSET).map(|_| size))
            .ok_or_else(|| {
                SimulationError::InvalidParameter(format!(
                    "a {}x{} image does not fit in a bitmap file",
                    width, height
                ))
            })?;

        Ok(BitmapHeader {
            signature: BITMAP_SIGNATURE,
            file_size: PIXEL_ARRAY_OFFSET + image_size,
            reserved: 0,
            pixel_offset: PIXEL_ARRAY_OFFSET,
            info_size: INFO_HEADER_SIZE,
            width,
            height,
            planes: PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION,
            image_size,
            x_pixels_per_meter: PIXELS_PER_METER,
            y_pixels_per_meter: PIXELS_PER_METER,
            palette_colors: 0,
            important_colors: 0,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..2].copy_from_slice(&self.signature.to_le_bytes());
        bytes[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        bytes[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        bytes[14..18].copy_from_slice(&self.info_size.to_le_bytes());
        bytes[18..22].copy_from_slice(&self.width.to_le_bytes());
        bytes[22..26].copy_from_slice(&self.height.to_le_bytes());
        bytes[26..28].copy_from_slice(&self.planes.to_le_bytes());
        bytes[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        bytes[30..34].copy_from_slice(&self.compression.to_le_bytes());
        bytes[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        bytes[38..42].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        bytes[42..46].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        bytes[46..50].copy_from_slice(&self.palette_colors.to_le_bytes());
        bytes[50..54].copy_from_slice(&self.important_colors.to_le_bytes());
        bytes
    }

    /// Reads the headers back from the start of a bitmap file.
    pub fn parse(bytes: &[u8]) -> Result<Self, SimulationError> {
        if bytes.len() < HEADER_SIZE {
            return Err(SimulationError::MalformedBitmap(format!(
                "expected at least {} header bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }
        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        let header = BitmapHeader {
            signature: u16_at(0),
            file_size: u32_at(2),
            reserved: u32_at(6),
            pixel_offset: u32_at(10),
            info_size: u32_at(14),
            width: u32_at(18),
            height: u32_at(22),
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
            x_pixels_per_meter: u32_at(38),
            y_pixels_per_meter: u32_at(42),
            palette_colors: u32_at(46),
            important_colors: u32_at(50),
        };

        if header.signature != BITMAP_SIGNATURE {
            return Err(SimulationError::MalformedBitmap(format!(
                "bad signature {:#06x}",
                header.signature
            )));
        }
        if header.info_size != INFO_HEADER_SIZE {
            return Err(SimulationError::MalformedBitmap(format!(
                "unsupported info header size {}",
                header.info_size
            )));
        }
        Ok(header)
    }
}

/// Serializes a canvas as an uncompressed 24-bit bitmap.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapEncoder {
    alignment: RowAlignment,
}

impl BitmapEncoder {
    pub fn new() -> Self {
        BitmapEncoder::default()
    }

    pub fn with_alignment(alignment: RowAlignment) -> Self {
        BitmapEncoder { alignment }
    }

    pub fn alignment(&self) -> RowAlignment {
        self.alignment
    }

    pub fn header(&self, canvas: &Canvas) -> Result<BitmapHeader, SimulationError> {
        BitmapHeader::new(canvas.width(), canvas.height(), self.alignment)
    }

    /// Writes headers and pixel rows, bottom row first, each pixel as
    /// blue, green, red.
    pub fn encode_to<W: Write>(&self, canvas: &Canvas, writer: &mut W) -> Result<(), SimulationError> {
        let header = self.header(canvas)?;
        self.write_parts(&header, canvas, writer)?;
        Ok(())
    }

    fn write_parts<W: Write>(
        &self,
        header: &BitmapHeader,
        canvas: &Canvas,
        writer: &mut W,
    ) -> io::Result<()> {
        writer.write_all(&header.to_bytes())?;

        let padding = self.alignment.padding(canvas.width());
        let mut row_bytes = Vec::with_capacity(self.alignment.row_stride(canvas.width()));
        for row in canvas.rows() {
            row_bytes.clear();
            for color in row {
                row_bytes.extend_from_slice(&color.to_bgr_bytes());
            }
            row_bytes.resize(row_bytes.len() + padding, 0);
            writer.write_all(&row_bytes)?;
        }
        Ok(())
    }

    /// The complete file contents.
    pub fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, SimulationError> {
        let header = self.header(canvas)?;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(header.file_size as usize)
            .map_err(|e| {
                SimulationError::ResourceExhausted(format!(
                    "buffering a {} byte bitmap: {}",
                    header.file_size, e
                ))
            })?;
        self.encode_to(canvas, &mut bytes)?;
        Ok(bytes)
    }

    /// Encodes the canvas and writes it to `path`.
    ///
    /// The data goes to a hidden sibling file that is renamed over `path`
    /// once complete, so a failure never leaves a partial bitmap behind.
    pub fn write_file(&self, canvas: &Canvas, path: &Path) -> Result<(), SimulationError> {
        let bytes = self.encode(canvas)?;
        let staging = staging_path(path);
        if let Err(source) = stage_and_rename(&staging, path, &bytes) {
            let _ = fs::remove_file(&staging);
            return Err(SimulationError::OutputUnavailable {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("bitmap")));
    name.push(".partial");
    path.with_file_name(name)
}

fn stage_and_rename(staging: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(staging)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(staging, target)
}
