use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use isg_logging::isg_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> valid UTF-8 -> Content-Type charset -> chardetng fallback.
///
/// A body that is valid UTF-8 is taken as UTF-8 whatever the header claims.
/// Decoding is lenient: malformed input is replaced, never rejected.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return DecodedHtml {
            html: text.into_owned(),
            encoding_label: UTF_8.name().to_string(),
            had_errors: false,
        };
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (name, value) = part.trim().split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    let (text, actual, had_errors) = enc.decode(bytes);
    if had_errors {
        isg_warn!(
            "Response is not valid {}; malformed sequences were replaced",
            actual.name()
        );
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: actual.name().to_string(),
        had_errors,
    }
}
