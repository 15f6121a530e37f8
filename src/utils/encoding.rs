use chardetng::EncodingDetector;

/// Decodes uploaded bytes by charset sniffing. Upstream datasets arrive in
/// ISO-8859-1 about as often as UTF-8, so the charset cannot be assumed.
/// Undecodable sequences are replaced, never surfaced as an error.
pub fn decode(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
