//! HTML rendering for the colorpage server.
//!
//! Exports `render`, which produces the complete landing page document for
//! a resolved background color. Keep the HTML blob here to avoid runtime
//! template dependencies.
//!
use crate::config::Color;

/// Render the landing page for the given background color.
///
/// Deterministic and pure: the same color always yields a byte-identical
/// document. Only pre-validated `Color` values are interpolated, so no
/// external input ever reaches the markup.
pub fn render(color: Color) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Demo USAC</title>
    <style>
        body {{
            background-color: {background};
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
            font-family: sans-serif;
            color: {text};
        }}
        h1 {{
            font-size: 5rem;
            text-align: center;
        }}
    </style>
</head>
<body>
    <h1>Demo USAC</h1>
</body>
</html>
"#,
        background = color.as_css(),
        text = color.contrast(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render(Color::Green), render(Color::Green));
        assert_eq!(render(Color::White), render(Color::White));
    }

    #[test]
    fn document_is_complete_html5() {
        let page = render(Color::Blue);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<meta charset="UTF-8">"#));
        assert!(page.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert!(page.contains("<title>Demo USAC</title>"));
        assert!(page.contains("<h1>Demo USAC</h1>"));
    }

    #[test]
    fn background_follows_the_resolved_color() {
        assert!(render(Color::Red).contains("background-color: red;"));
        assert!(render(Color::White).contains("background-color: white;"));
    }

    #[test]
    fn text_color_keeps_contrast_with_the_background() {
        assert!(render(Color::Yellow).contains("color: black;"));
        assert!(render(Color::White).contains("color: black;"));
        assert!(render(Color::Red).contains("color: white;"));
        assert!(render(Color::Blue).contains("color: white;"));
    }
}
