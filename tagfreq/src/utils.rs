//! Primitive readers and writers compatible with `java.io.DataOutputStream`.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::errors::{Result, TagFreqError};

/// Writes `s` in the modified UTF-8 encoding of `DataOutput.writeUTF`.
///
/// The string is converted to UTF-16 code units. Each unit in `U+0001..=U+007F` takes one byte,
/// `U+0000` and `U+0080..=U+07FF` take two bytes, and the rest take three bytes, so a
/// supplementary character becomes two three-byte surrogates. The encoded bytes are preceded by
/// their length as a big-endian `u16`.
///
/// # Errors
///
/// [`TagFreqError::InvalidArgument`] is returned when the encoded string is longer than 65535
/// bytes. Errors from `wtr` are returned as is.
pub fn write_java_utf<W>(mut wtr: W, s: &str) -> Result<()>
where
    W: Write,
{
    let mut buf = Vec::with_capacity(s.len());
    for u in s.encode_utf16() {
        match u {
            0x0001..=0x007f => buf.push(u as u8),
            0x0000 | 0x0080..=0x07ff => {
                buf.push(0xc0 | (u >> 6) as u8);
                buf.push(0x80 | (u & 0x3f) as u8);
            }
            _ => {
                buf.push(0xe0 | (u >> 12) as u8);
                buf.push(0x80 | ((u >> 6) & 0x3f) as u8);
                buf.push(0x80 | (u & 0x3f) as u8);
            }
        }
    }
    let len = u16::try_from(buf.len()).map_err(|_| {
        TagFreqError::invalid_argument(
            "s",
            format!("encoded string is too long: {} bytes", buf.len()),
        )
    })?;
    wtr.write_u16::<BigEndian>(len)?;
    wtr.write_all(&buf)?;
    Ok(())
}

/// Reads a string written by [`write_java_utf`] or `DataOutput.writeUTF`.
///
/// # Errors
///
/// [`TagFreqError::InvalidModel`] is returned when the bytes are not valid modified UTF-8 or
/// contain an unpaired surrogate. A truncated stream results in [`TagFreqError::IOError`].
pub fn read_java_utf<R>(mut rdr: R) -> Result<String>
where
    R: Read,
{
    let len = usize::from(rdr.read_u16::<BigEndian>()?);
    let mut bytes = vec![0; len];
    rdr.read_exact(&mut bytes)?;

    let continuation = |pos: usize| -> Result<u16> {
        match bytes.get(pos) {
            Some(&b) if b & 0xc0 == 0x80 => Ok(u16::from(b & 0x3f)),
            Some(_) => Err(TagFreqError::invalid_model(format!(
                "malformed modified UTF-8 around byte {pos}"
            ))),
            None => Err(TagFreqError::invalid_model(
                "partial character at end of modified UTF-8 string",
            )),
        }
    };

    let mut units = Vec::with_capacity(len);
    let mut i = 0;
    while i < len {
        let b = bytes[i];
        match b >> 4 {
            0..=7 => {
                units.push(u16::from(b));
                i += 1;
            }
            12 | 13 => {
                units.push((u16::from(b & 0x1f) << 6) | continuation(i + 1)?);
                i += 2;
            }
            14 => {
                units.push(
                    (u16::from(b & 0x0f) << 12) | (continuation(i + 1)? << 6) | continuation(i + 2)?,
                );
                i += 3;
            }
            _ => {
                return Err(TagFreqError::invalid_model(format!(
                    "malformed modified UTF-8 around byte {i}"
                )));
            }
        }
    }
    String::from_utf16(&units)
        .map_err(|_| TagFreqError::invalid_model("unpaired surrogate in modified UTF-8 string"))
}

/// Reads a big-endian `int32` that must not be negative.
pub fn read_non_negative_i32<R>(mut rdr: R, what: &str) -> Result<u32>
where
    R: Read,
{
    let value = rdr.read_i32::<BigEndian>()?;
    u32::try_from(value)
        .map_err(|_| TagFreqError::invalid_model(format!("negative {what}: {value}")))
}

/// Writes `value` as a big-endian `int32`.
pub fn write_i32_from<W, T>(mut wtr: W, value: T) -> Result<()>
where
    W: Write,
    i32: TryFrom<T, Error = std::num::TryFromIntError>,
{
    wtr.write_i32::<BigEndian>(i32::try_from(value)?)?;
    Ok(())
}
