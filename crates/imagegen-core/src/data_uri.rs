use base64::{engine::general_purpose, Engine as _};
use imagegen_types::DATA_URI_PREFIX;

/// Encode raw image bytes as `data:image/png;base64,<payload>`.
///
/// The MIME type is fixed: the provider's content type is not inspected.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    general_purpose::STANDARD.encode_string(bytes, &mut uri);
    uri
}
