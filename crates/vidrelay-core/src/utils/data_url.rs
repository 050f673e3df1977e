//! Inline `data:` URL handling.
//!
//! Some sites embed the video directly as a `data:<mime>;base64,<payload>`
//! link instead of a fetchable URL.

/// Return the base64 payload of a `data:` URL, if it is base64 encoded.
///
/// The media type is not checked; any `;base64` data URL qualifies.
///
/// # Examples
///
/// ```rust
/// use vidrelay_core::utils::inline_base64_payload;
///
/// assert_eq!(
///     inline_base64_payload("data:video/mp4;base64,AAAAIGZ0eXA="),
///     Some("AAAAIGZ0eXA=")
/// );
/// assert_eq!(inline_base64_payload("https://cdn.example.test/v.mp4"), None);
/// ```
pub fn inline_base64_payload(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    meta.rsplit(';')
        .next()
        .filter(|param| param.eq_ignore_ascii_case("base64"))
        .map(|_| payload)
}
