//! QR rendering collaborator: turns a string into scannable SVG markup.

use qrcode::render::svg;
use qrcode::QrCode;
use qrclip_core::AppError;

/// Render `data` as an SVG QR code.
///
/// # Arguments
/// - `data`: Text to encode, typically a submission URL.
///
/// # Returns
/// Standalone SVG markup suitable for inline embedding.
///
/// # Errors
/// Returns [`AppError::Render`] if the payload exceeds QR capacity.
pub fn render_svg(data: &str) -> Result<String, AppError> {
    let code = QrCode::new(data.as_bytes()).map_err(|err| AppError::Render(err.to_string()))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::render_svg;

    #[test]
    fn renders_svg_markup_for_a_url() {
        let markup = render_svg("http://127.0.0.1:8000/post/abc123").expect("render");
        assert!(markup.starts_with("<?xml") || markup.starts_with("<svg"));
        assert!(markup.contains("<svg"));
    }

    #[test]
    fn oversized_payload_is_a_render_error() {
        let oversized = "x".repeat(8_000);
        assert!(render_svg(&oversized).is_err());
    }
}
