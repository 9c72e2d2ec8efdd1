//! ICO container layout.
//!
//! All fields are little-endian:
//!
//! ```text
//! header   reserved:u16 = 0, type:u16 = 1, count:u16 = N
//! entry*N  width:u8, height:u8, color_count:u8 = 0, reserved:u8 = 0,
//!          planes:u16 = 1, bit_count:u16, data_size:u32, data_offset:u32
//! data     frame bytes back to back, in entry order
//! ```
//!
//! Width and height are one byte each; 256 and above are stored as `0`.

use std::path::Path;

use crate::encode::frame::EncodedFrame;
use crate::foundation::error::{IcopackError, IcopackResult};

/// Length of the container header in bytes.
pub const ICON_DIR_HEADER_LEN: usize = 6;
/// Length of one directory entry in bytes.
pub const ICON_DIR_ENTRY_LEN: usize = 16;

const ICON_TYPE: u16 = 1;

/// One directory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerEntry {
    /// Width byte; `0` means 256 or more.
    pub width: u8,
    /// Height byte; `0` means 256 or more.
    pub height: u8,
    /// Palette size, always `0` for true-color frames.
    pub color_count: u8,
    /// Reserved, always `0`.
    pub reserved: u8,
    /// Color planes, always `1`.
    pub planes: u16,
    /// Bits per pixel of the source image.
    pub bit_count: u16,
    /// Byte length of the frame data.
    pub data_size: u32,
    /// Absolute file offset of the frame data.
    pub data_offset: u32,
}

impl ContainerEntry {
    fn for_frame(frame: &EncodedFrame, data_offset: u32) -> IcopackResult<Self> {
        let data_size = u32::try_from(frame.bytes.len()).map_err(|_| {
            IcopackError::encode(format!(
                "frame {} is {} bytes, more than a container entry can address",
                frame.size,
                frame.bytes.len()
            ))
        })?;
        Ok(Self {
            width: dimension_byte(frame.size.width),
            height: dimension_byte(frame.size.height),
            color_count: 0,
            reserved: 0,
            planes: 1,
            bit_count: frame.bit_count,
            data_size,
            data_offset,
        })
    }

    /// Pixel width the entry describes, mapping the `0` byte back to 256.
    pub fn pixel_width(&self) -> u32 {
        dimension_from_byte(self.width)
    }

    /// Pixel height the entry describes, mapping the `0` byte back to 256.
    pub fn pixel_height(&self) -> u32 {
        dimension_from_byte(self.height)
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.width);
        out.push(self.height);
        out.push(self.color_count);
        out.push(self.reserved);
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.data_size.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }

    fn read_from(b: &[u8]) -> Self {
        Self {
            width: b[0],
            height: b[1],
            color_count: b[2],
            reserved: b[3],
            planes: u16::from_le_bytes([b[4], b[5]]),
            bit_count: u16::from_le_bytes([b[6], b[7]]),
            data_size: u32::from_le_bytes([b[8], b[9], b[10], b[11]]),
            data_offset: u32::from_le_bytes([b[12], b[13], b[14], b[15]]),
        }
    }
}

/// Directory byte for a pixel dimension: the value itself below 256, `0` otherwise.
pub fn dimension_byte(px: u32) -> u8 {
    if px >= 256 { 0 } else { px as u8 }
}

fn dimension_from_byte(b: u8) -> u32 {
    if b == 0 { 256 } else { u32::from(b) }
}

/// Assemble `frames` into one container, directory first, then data in the same order.
///
/// Fails with [`IcopackError::Config`] for an empty frame list and
/// [`IcopackError::Encode`] when the frames do not fit the format's 16/32-bit fields.
pub fn encode_container(frames: &[EncodedFrame]) -> IcopackResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(IcopackError::config("container needs at least one frame"));
    }
    let count = u16::try_from(frames.len()).map_err(|_| {
        IcopackError::encode(format!("{} frames exceed the container limit", frames.len()))
    })?;

    let dir_len = ICON_DIR_HEADER_LEN + ICON_DIR_ENTRY_LEN * frames.len();
    let data_len: usize = frames.iter().map(|f| f.bytes.len()).sum();
    let total_len = dir_len + data_len;
    if u32::try_from(total_len).is_err() {
        return Err(IcopackError::encode(format!(
            "container of {total_len} bytes exceeds 32-bit offsets"
        )));
    }

    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&ICON_TYPE.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());

    let mut offset = dir_len as u32;
    for frame in frames {
        let entry = ContainerEntry::for_frame(frame, offset)?;
        entry.write_to(&mut out);
        offset += entry.data_size;
    }
    for frame in frames {
        out.extend_from_slice(&frame.bytes);
    }

    debug_assert_eq!(out.len(), total_len);
    Ok(out)
}

/// Encode `frames` and write the container to `dest` in one pass.
///
/// Nothing is written when assembly fails.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn write_container(frames: &[EncodedFrame], dest: &Path) -> IcopackResult<u64> {
    let bytes = encode_container(frames)?;
    crate::output::write_file(dest, &bytes)?;
    Ok(bytes.len() as u64)
}

/// A parsed container directory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerDirectory {
    /// Entries in file order.
    pub entries: Vec<ContainerEntry>,
}

impl ContainerDirectory {
    /// Parse and validate the directory of container `bytes`.
    ///
    /// Every entry's data range must lie inside `bytes`.
    pub fn parse(bytes: &[u8]) -> IcopackResult<Self> {
        if bytes.len() < ICON_DIR_HEADER_LEN {
            return Err(IcopackError::load("container shorter than its header"));
        }
        let reserved = u16::from_le_bytes([bytes[0], bytes[1]]);
        let kind = u16::from_le_bytes([bytes[2], bytes[3]]);
        let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
        if reserved != 0 || kind != ICON_TYPE {
            return Err(IcopackError::load(format!(
                "not an icon container (reserved={reserved}, type={kind})"
            )));
        }
        if count == 0 {
            return Err(IcopackError::load("container has no entries"));
        }

        let dir_len = ICON_DIR_HEADER_LEN + ICON_DIR_ENTRY_LEN * count;
        if bytes.len() < dir_len {
            return Err(IcopackError::load(format!(
                "container truncated: {count} entries need {dir_len} bytes, have {}",
                bytes.len()
            )));
        }

        let entries = bytes[ICON_DIR_HEADER_LEN..dir_len]
            .chunks_exact(ICON_DIR_ENTRY_LEN)
            .map(ContainerEntry::read_from)
            .collect::<Vec<_>>();

        for (i, e) in entries.iter().enumerate() {
            let start = e.data_offset as usize;
            let end = start.saturating_add(e.data_size as usize);
            if start < dir_len || end > bytes.len() {
                return Err(IcopackError::load(format!(
                    "entry {i} data range {start}..{end} outside file of {} bytes",
                    bytes.len()
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Slice the data of entry `index` out of the container `bytes` it was parsed from.
    pub fn frame_bytes<'a>(&self, bytes: &'a [u8], index: usize) -> Option<&'a [u8]> {
        let e = self.entries.get(index)?;
        let start = e.data_offset as usize;
        bytes.get(start..start + e.data_size as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/container.rs"]
mod tests;
