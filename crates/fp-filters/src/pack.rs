//! Pack / unpack — DEFLATE-family compression with base64 transport.
//!
//! [`Pack`] compresses the selection and emits it as base64, wrapped to a
//! fixed column width so it pastes cleanly into config files and source
//! comments; with `unpack` it runs the whole pipeline in reverse.
//! [`Base64Text`] is the same transport layer without compression.
//!
//! # Pack options
//!
//! | Key       | Type   | Default | Effect                                |
//! |-----------|--------|---------|---------------------------------------|
//! | `unpack`  | bool   | false   | Decode + decompress instead          |
//! | `flavor`  | string | `gzip`  | `gzip`, `zlib`, or `deflate` framing |
//! | `wrap`    | int    | 64      | Encoded line width, 0 disables       |
//! | `urlsafe` | bool   | false   | URL-safe base64 alphabet             |
//! | `level`   | int    | 9       | Compression level 0–9                |
//!
//! # Base64 options
//!
//! | Key       | Type | Default | Effect                      |
//! |-----------|------|---------|-----------------------------|
//! | `decode`  | bool | false   | Decode instead of encode    |
//! | `urlsafe` | bool | true    | URL-safe base64 alphabet    |
//! | `wrap`    | int  | 0       | Encoded line width          |

use std::io::{Read, Write};

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::engine::GeneralPurpose;
use base64::Engine;
use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::error::FilterError;
use crate::options::Options;
use crate::Filter;

// ---------------------------------------------------------------------------
// Flavor
// ---------------------------------------------------------------------------

/// The stream framing around the raw DEFLATE data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// gzip framing (magic, header, CRC trailer).
    #[default]
    Gzip,
    /// zlib framing (2-byte header, Adler-32 trailer).
    Zlib,
    /// Raw DEFLATE, no framing at all.
    Deflate,
}

impl Flavor {
    fn parse(opts: &Options) -> Result<Self, FilterError> {
        match opts.get("flavor") {
            None | Some("gzip") => Ok(Self::Gzip),
            Some("zlib") => Ok(Self::Zlib),
            Some("deflate") => Ok(Self::Deflate),
            Some(other) => Err(FilterError::BadOption {
                key: "flavor".to_string(),
                value: other.to_string(),
                expected: "gzip, zlib, or deflate",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Base64 helpers (shared by Pack and Base64Text)
// ---------------------------------------------------------------------------

const fn engine(urlsafe: bool) -> &'static GeneralPurpose {
    if urlsafe { &URL_SAFE } else { &STANDARD }
}

/// Encode to base64, folding the output at `wrap` columns (0 = one line).
fn encode_wrapped(data: &[u8], urlsafe: bool, wrap: usize) -> String {
    let encoded = engine(urlsafe).encode(data);
    if wrap == 0 {
        return encoded;
    }
    let mut out = String::with_capacity(encoded.len() + encoded.len() / wrap + 1);
    for (i, ch) in encoded.chars().enumerate() {
        if i > 0 && i % wrap == 0 {
            out.push('\n');
        }
        out.push(ch);
    }
    out
}

/// Decode base64, tolerating the line breaks and padding whitespace that
/// wrapped output carries.
fn decode_lenient(text: &str, urlsafe: bool) -> Result<Vec<u8>, FilterError> {
    let cleaned: String = text.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
    Ok(engine(urlsafe).decode(cleaned)?)
}

// ---------------------------------------------------------------------------
// Pack
// ---------------------------------------------------------------------------

/// Compress-and-encode (or, with `unpack`, decode-and-decompress).
#[derive(Debug, Clone, Copy)]
pub struct Pack {
    unpack: bool,
    flavor: Flavor,
    wrap: usize,
    urlsafe: bool,
    level: u32,
}

impl Default for Pack {
    fn default() -> Self {
        Self {
            unpack: false,
            flavor: Flavor::Gzip,
            wrap: 64,
            urlsafe: false,
            level: 9,
        }
    }
}

impl Pack {
    /// Build from parsed options.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] or [`FilterError::BadOption`] for
    /// unrecognized keys or unparseable values.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("pack", &["unpack", "flavor", "wrap", "urlsafe", "level"])?;
        let defaults = Self::default();
        Ok(Self {
            unpack: opts.get_bool("unpack")?.unwrap_or(defaults.unpack),
            flavor: Flavor::parse(opts)?,
            wrap: opts.get_usize("wrap")?.unwrap_or(defaults.wrap),
            urlsafe: opts.get_bool("urlsafe")?.unwrap_or(defaults.urlsafe),
            level: opts.get_u32("level")?.unwrap_or(defaults.level),
        })
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, FilterError> {
        let level = Compression::new(self.level);
        let packed = match self.flavor {
            Flavor::Gzip => {
                let mut enc = GzEncoder::new(Vec::new(), level);
                enc.write_all(data)?;
                enc.finish()?
            }
            Flavor::Zlib => {
                let mut enc = ZlibEncoder::new(Vec::new(), level);
                enc.write_all(data)?;
                enc.finish()?
            }
            Flavor::Deflate => {
                let mut enc = DeflateEncoder::new(Vec::new(), level);
                enc.write_all(data)?;
                enc.finish()?
            }
        };
        log::debug!(
            "pack: {} bytes -> {} bytes ({:?})",
            data.len(),
            packed.len(),
            self.flavor
        );
        Ok(packed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, FilterError> {
        let mut out = Vec::new();
        match self.flavor {
            Flavor::Gzip => GzDecoder::new(data).read_to_end(&mut out)?,
            Flavor::Zlib => ZlibDecoder::new(data).read_to_end(&mut out)?,
            Flavor::Deflate => DeflateDecoder::new(data).read_to_end(&mut out)?,
        };
        Ok(out)
    }
}

impl Filter for Pack {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        if self.unpack {
            let packed = decode_lenient(text, self.urlsafe)?;
            let data = self.decompress(&packed)?;
            Ok(String::from_utf8(data)?)
        } else {
            let packed = self.compress(text.as_bytes())?;
            Ok(encode_wrapped(&packed, self.urlsafe, self.wrap))
        }
    }
}

// ---------------------------------------------------------------------------
// Base64Text
// ---------------------------------------------------------------------------

/// Plain base64 of the selection bytes, no compression.
#[derive(Debug, Clone, Copy)]
pub struct Base64Text {
    decode: bool,
    urlsafe: bool,
    wrap: usize,
}

impl Default for Base64Text {
    fn default() -> Self {
        Self {
            decode: false,
            urlsafe: true,
            wrap: 0,
        }
    }
}

impl Base64Text {
    /// Build from parsed options.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownOption`] or [`FilterError::BadOption`] for
    /// unrecognized keys or unparseable values.
    pub fn from_options(opts: &Options) -> Result<Self, FilterError> {
        opts.check_known("base64", &["decode", "urlsafe", "wrap"])?;
        let defaults = Self::default();
        Ok(Self {
            decode: opts.get_bool("decode")?.unwrap_or(defaults.decode),
            urlsafe: opts.get_bool("urlsafe")?.unwrap_or(defaults.urlsafe),
            wrap: opts.get_usize("wrap")?.unwrap_or(defaults.wrap),
        })
    }
}

impl Filter for Base64Text {
    fn apply(&self, text: &str) -> Result<String, FilterError> {
        if self.decode {
            let data = decode_lenient(text, self.urlsafe)?;
            Ok(String::from_utf8(data)?)
        } else {
            Ok(encode_wrapped(text.as_bytes(), self.urlsafe, self.wrap))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
