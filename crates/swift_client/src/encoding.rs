//! Percent-encoding rules for container names and object keys.
//!
//! Object keys may contain `/` as a pseudo-directory separator, so the
//! slash must reach the wire unescaped for both providers. Swift
//! additionally leaves `=` alone in keys. Container names are single path
//! segments and are encoded in full.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;

// RFC 3986 unreserved characters stay literal everywhere.
const UNRESERVED: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SEGMENT: AsciiSet = UNRESERVED;

const CLOUDFILES_KEY: AsciiSet = UNRESERVED.remove(b'/');

const SWIFT_KEY: AsciiSet = CLOUDFILES_KEY.remove(b'=');

/// Which characters a client leaves unescaped in object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// Keep `/` and `=` literal (OpenStack Swift).
    Swift,
    /// Keep `/` literal (Rackspace CloudFiles).
    CloudFiles,
}

/// Encodes a container name as a single path segment.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, &SEGMENT).to_string()
}

/// Encodes an object key for use in a request path.
pub fn encode_key(key: &str, encoding: KeyEncoding) -> String {
    let set = match encoding {
        KeyEncoding::Swift => &SWIFT_KEY,
        KeyEncoding::CloudFiles => &CLOUDFILES_KEY,
    };
    utf8_percent_encode(key, set).to_string()
}
