//! Stable, opaque, round-trippable identifiers for symbols (§3 RDF
//! identifier, §8 R1).
//!
//! Encoded as a length-prefixed ("netstring"-style) concatenation of the four
//! fields, then hex-encoded. Length-prefixing (rather than a delimiter
//! character) means decoding is unambiguous even when a field contains
//! whatever character a delimiter scheme would have reserved, satisfying R1
//! without adding a dependency.
//!
//! Per §9 Open Question (c), the `file_path` carried here is always
//! normalized to project-relative at construction time — callers must not
//! pass an absolute path in.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfId {
    pub project_name: String,
    pub file_path: String,
    pub node_type: String,
    pub symbol_name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RdfIdError {
    #[error("malformed RDF identifier: {0}")]
    Malformed(String),
}

impl RdfId {
    /// Constructs an id, normalizing `file_path` to project-relative (strips
    /// a leading `/` so the same file always encodes the same way regardless
    /// of whether a caller passed an absolute or relative path).
    pub fn new(
        project_name: impl Into<String>,
        file_path: impl Into<String>,
        node_type: impl Into<String>,
        symbol_name: impl Into<String>,
    ) -> Self {
        let file_path = file_path.into();
        let normalized = file_path.strip_prefix('/').unwrap_or(&file_path).to_string();
        Self {
            project_name: project_name.into(),
            file_path: normalized,
            node_type: node_type.into(),
            symbol_name: symbol_name.into(),
        }
    }

    /// Encodes this id as an opaque hex string.
    pub fn encode(&self) -> String {
        let mut buf = String::new();
        for field in [
            &self.project_name,
            &self.file_path,
            &self.node_type,
            &self.symbol_name,
        ] {
            buf.push_str(&field.len().to_string());
            buf.push(':');
            buf.push_str(field);
        }
        hex_encode(buf.as_bytes())
    }

    /// Decodes an id previously produced by [`RdfId::encode`]. Returns
    /// [`RdfIdError::Malformed`] on any structural violation rather than
    /// panicking, since this is a boundary that may see caller-supplied
    /// strings.
    pub fn decode(id: &str) -> Result<Self, RdfIdError> {
        let bytes = hex_decode(id).ok_or_else(|| RdfIdError::Malformed(id.to_string()))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| RdfIdError::Malformed(id.to_string()))?;
        let mut rest = text.as_str();
        let mut fields = Vec::with_capacity(4);
        for _ in 0..4 {
            let colon = rest
                .find(':')
                .ok_or_else(|| RdfIdError::Malformed(id.to_string()))?;
            let len: usize = rest[..colon]
                .parse()
                .map_err(|_| RdfIdError::Malformed(id.to_string()))?;
            let body_start = colon + 1;
            let body_end = body_start + len;
            if body_end > rest.len() {
                return Err(RdfIdError::Malformed(id.to_string()));
            }
            fields.push(rest[body_start..body_end].to_string());
            rest = &rest[body_end..];
        }
        if !rest.is_empty() {
            return Err(RdfIdError::Malformed(id.to_string()));
        }
        Ok(Self {
            project_name: fields[0].clone(),
            file_path: fields[1].clone(),
            node_type: fields[2].clone(),
            symbol_name: fields[3].clone(),
        })
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let hi = (bytes[i] as char).to_digit(16)?;
        let lo = (bytes[i + 1] as char).to_digit(16)?;
        out.push((hi * 16 + lo) as u8);
        i += 2;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_fields() {
        let id = RdfId::new("myproj", "src/app.ts", "class", "UserService");
        let encoded = id.encode();
        let decoded = RdfId::decode(&encoded).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn round_trips_fields_containing_delimiter_like_characters() {
        let id = RdfId::new("myproj", "src/app:weird.ts", "met:hod", "a:b/c");
        let encoded = id.encode();
        let decoded = RdfId::decode(&encoded).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn normalizes_absolute_file_path_to_relative() {
        let id = RdfId::new("myproj", "/src/app.ts", "class", "X");
        assert_eq!(id.file_path, "src/app.ts");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(RdfId::decode("not-hex!!").is_err());
        assert!(RdfId::decode("deadbeef").is_err());
    }
}
