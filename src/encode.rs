use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode raw JPEG bytes as a `data:image/jpeg;base64,` URL.
///
/// Accepts any byte sequence — the declared MIME type is checked at the
/// HTTP layer, not by decoding the image here.
pub fn jpeg_data_url(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_jpeg_prefix() {
        let url = jpeg_data_url(b"hello");
        assert_eq!(url, "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn empty_input_yields_bare_prefix() {
        assert_eq!(jpeg_data_url(&[]), "data:image/jpeg;base64,");
    }

    #[test]
    fn arbitrary_bytes_never_fail() {
        let bytes: Vec<u8> = (0..=255).collect();
        let url = jpeg_data_url(&bytes);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(url.len() > "data:image/jpeg;base64,".len());
    }
}
