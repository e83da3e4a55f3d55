//! Commonly used constants

/// Base64 engine used when decoding connector signature material
pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;
