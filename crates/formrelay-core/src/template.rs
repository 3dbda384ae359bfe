//! HTML body rendering for relayed submissions.

/// Rendered in place of a form field the caller did not send.
pub const MISSING_FIELD: &str = "undefined";

/// Render the notification body.
///
/// `name` and `comment` are inserted verbatim unless `escape` is set.
pub fn render_submission_html(
    name: Option<&str>,
    comment: Option<&str>,
    image_count: usize,
    escape: bool,
) -> String {
    let field = |value: Option<&str>| -> String {
        let value = value.unwrap_or(MISSING_FIELD);
        if escape {
            escape_html(value)
        } else {
            value.to_string()
        }
    };

    format!(
        r#"
      <h2>Nuevo comentario recibido</h2>
      <p><strong>Nombre:</strong> {name}</p>
      <p><strong>Comentario:</strong><br>{comment}</p>
      <p>Imágenes adjuntas: {count}</p>
    "#,
        name = field(name),
        comment = field(comment),
        count = image_count,
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
