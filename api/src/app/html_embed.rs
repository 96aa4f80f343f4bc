//! Embedding a QR code image into an HTML email body
//!
//! Plain marker search, no HTML parsing. Matching is case-sensitive and only
//! the first occurrence of a marker is used.

const BODY_CLOSE: &str = "</body>";
const HTML_CLOSE: &str = "</html>";

/// Centered block holding the QR code as an inline `data:` URI
pub fn qr_image_block(image_base64: &str) -> String {
    format!(
        r#"<div style="text-align: center; margin-top: 20px;"><img src="data:image/png;base64,{}" alt="QR Code" /></div>"#,
        image_base64
    )
}

/// Insert `block` before the first `</body>`, else before the first `</html>`,
/// else at the end of the document.
pub fn insert_image_block(html: &str, block: &str) -> String {
    let anchor = html.find(BODY_CLOSE).or_else(|| html.find(HTML_CLOSE));

    match anchor {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(&html[..pos]);
            out.push_str(block);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{}{}", html, block),
    }
}

/// Append the QR code image to an HTML email body
pub fn embed_qr_image(html: &str, image_base64: &str) -> String {
    insert_image_block(html, &qr_image_block(image_base64))
}

#[cfg(test)]
mod tests {
    use super::*;

    const B64: &str = "iVBORw0KGgo=";

    fn block() -> String {
        qr_image_block(B64)
    }

    #[test]
    fn block_is_a_self_contained_data_uri() {
        let b = block();
        assert!(b.starts_with("<div"));
        assert!(b.ends_with("</div>"));
        assert!(b.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
    }

    #[test]
    fn inserts_before_body_close() {
        let out = embed_qr_image("<html><body>content</body></html>", B64);
        assert_eq!(out, format!("<html><body>content{}</body></html>", block()));
        assert!(!out.contains("content</body>"));
        assert_eq!(out.matches("<img").count(), 1);
    }

    #[test]
    fn only_first_body_close_is_used() {
        let out = embed_qr_image("<html><body>A</body>B</body></html>", B64);
        assert_eq!(out, format!("<html><body>A{}</body>B</body></html>", block()));
        assert_eq!(out.matches("<img").count(), 1);
    }

    #[test]
    fn falls_back_to_html_close() {
        let out = embed_qr_image("<html><p>hi</p></html>", B64);
        assert_eq!(out, format!("<html><p>hi</p>{}</html>", block()));
    }

    #[test]
    fn body_close_wins_over_earlier_html_close() {
        let out = embed_qr_image("</html><body>x</body>", B64);
        assert_eq!(out, format!("</html><body>x{}</body>", block()));
    }

    #[test]
    fn appends_when_no_markers() {
        let out = embed_qr_image("plain text", B64);
        assert_eq!(out, format!("plain text{}", block()));
    }

    #[test]
    fn empty_document_is_just_the_block() {
        assert_eq!(embed_qr_image("", B64), block());
    }

    #[test]
    fn markers_are_case_sensitive() {
        let out = embed_qr_image("<BODY>x</BODY>", B64);
        assert_eq!(out, format!("<BODY>x</BODY>{}", block()));
    }
}
