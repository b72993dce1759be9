// shellops: Shell operations for build tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of captured process output (UTF-8, CP1252, OEM, UTF-16LE).
//!
//! ```text
//! child stdout bytes --(bytes_to_utf8(encoding))--> String
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{IBM866, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::ConfigError;

/// Encoding of process output.
///
/// Maps to Windows code pages:
/// - `Utf8`: UTF-8 (65001), the default
/// - `Utf16Le`: UTF-16 LE (1200)
/// - `Acp`: Active Code Page, typically Windows-1252 (1252)
/// - `Oem`: OEM Code Page, IBM866
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Acp,
    Oem,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::Utf16Le => write!(f, "utf16le"),
            Self::Acp => write!(f, "acp"),
            Self::Oem => write!(f, "oem"),
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16le" | "utf-16le" => Ok(Self::Utf16Le),
            "acp" | "cp1252" => Ok(Self::Acp),
            "oem" => Ok(Self::Oem),
            _ => Err(ConfigError::InvalidValue {
                section: "shell".to_string(),
                key: "encoding".to_string(),
                message: format!("expected 'utf8', 'utf16le', 'acp' or 'oem', got '{s}'"),
            }),
        }
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD (replacement character).
///
/// # Example
/// ```
/// use shellops::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9"; // "café" in Windows-1252
/// let utf8 = bytes_to_utf8(Encoding::Acp, cp1252_bytes);
/// assert_eq!(utf8, "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Utf16Le => utf16_le_to_utf8(bytes),
        Encoding::Acp => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        Encoding::Oem => IBM866.decode_without_bom_handling(bytes).0,
    }
}

/// Converts UTF-16 LE bytes to UTF-8, ignoring a trailing odd byte.
fn utf16_le_to_utf8(bytes: &[u8]) -> Cow<'static, str> {
    let len = bytes.len() & !1;
    if len == 0 {
        return Cow::Borrowed("");
    }

    let units: Vec<u16> = bytes[..len]
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    Cow::Owned(String::from_utf16_lossy(&units))
}
