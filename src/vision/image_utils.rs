// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image payload helpers: data-URL stripping and base64 decoding

use base64::{
    alphabet,
    engine::{general_purpose::STANDARD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use thiserror::Error;

/// Standard alphabet, padding optional on decode.
///
/// Browser-produced data URLs are padded, but hand-built payloads often drop
/// the trailing `=`; both decode to the same bytes.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors raised while turning a request payload into image bytes
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Return the significant part of an `image` field.
///
/// Data URLs look like `data:image/png;base64,<payload>`; only the text after
/// the last comma is kept. A string without a comma is returned unchanged.
pub fn extract_payload(image: &str) -> &str {
    match image.rfind(',') {
        Some(idx) => &image[idx + 1..],
        None => image,
    }
}

/// Decode an `image` field (raw base64 or data URL) into raw bytes
///
/// ASCII whitespace is ignored so line-wrapped payloads decode as well.
///
/// # Example
/// ```ignore
/// let bytes = decode_base64_payload("data:image/png;base64,iVBORw0KGgo...")?;
/// ```
pub fn decode_base64_payload(image: &str) -> Result<Vec<u8>, ImageError> {
    let payload = extract_payload(image);

    if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        return Ok(LENIENT.decode(compact)?);
    }

    Ok(LENIENT.decode(payload)?)
}

/// Encode raw bytes as padded standard base64
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
