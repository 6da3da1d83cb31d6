/// Decodes an object key as it appears in an S3 notification.
///
/// S3 form-encodes keys, so `+` stands for a space and must be replaced before percent-decoding.
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_encoded_separator() {
        assert_eq!(decode_object_key("folder%2Fdata.csv"), "folder/data.csv");
    }

    #[test]
    fn decodes_plus_as_space() {
        assert_eq!(
            decode_object_key("my+report+%282024%29.txt"),
            "my report (2024).txt"
        );
    }

    #[test]
    fn encoded_plus_stays_plus() {
        assert_eq!(decode_object_key("a%2Bb.json"), "a+b.json");
    }

    #[test]
    fn decodes_multibyte_characters() {
        assert_eq!(decode_object_key("caf%C3%A9.txt"), "café.txt");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_object_key("bad%FF.txt"), "bad\u{FFFD}.txt");
    }

    #[test]
    fn plain_key_is_unchanged() {
        assert_eq!(decode_object_key("user/doc/1.pdf"), "user/doc/1.pdf");
    }
}
