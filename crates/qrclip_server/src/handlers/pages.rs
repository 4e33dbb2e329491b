//! HTML page handlers.

use crate::{error::HttpError, qr, request_base_url, AppState};
use axum::{
    extract::{Host, Path, State},
    response::Html,
};
use qrclip_core::token;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>QR Clipboard</title>
</head>
<body>
<div class="container" data-clip-id="__CLIP_ID__">
<h1>QR Clipboard</h1>
<p>Scan this QR code to send clipboard text to:</p>
__QR_SVG__
<br>
<code>__SUBMIT_URL__</code>
<p>Or paste content here to save:</p>
<input type="text" id="clip-text" name="text" placeholder="Enter text here">
<br>
<button type="button" onclick="submitClip()">Save</button>
<h2>Stored clips</h2>
<ul id="clip-list"></ul>
<button type="button" onclick="clearAll()">Clear all</button>
</div>
<script>
const clipId = document.querySelector(".container").dataset.clipId;

async function submitClip() {
    const text = document.getElementById("clip-text").value;
    await fetch("/post/" + clipId, {
        method: "POST",
        headers: { "Content-Type": "application/x-www-form-urlencoded" },
        body: "text=" + encodeURIComponent(text),
    });
    await refresh();
}

async function removeClip(id) {
    await fetch("/post/" + id, { method: "DELETE" });
    await refresh();
}

async function clearAll() {
    await fetch("/clear", { method: "DELETE" });
    await refresh();
}

async function refresh() {
    const data = await (await fetch("/data")).json();
    const list = document.getElementById("clip-list");
    list.textContent = "";
    for (const [id, text] of Object.entries(data)) {
        const item = document.createElement("li");
        const label = document.createElement("code");
        label.textContent = id + ": " + text;
        const remove = document.createElement("button");
        remove.textContent = "Delete";
        remove.onclick = () => removeClip(id);
        item.append(label, " ", remove);
        list.append(item);
    }
}

refresh();
setInterval(refresh, 2000);
</script>
</body>
</html>
"#;

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_home_page(id: &str, url: &str, qr_svg: &str) -> String {
    HOME_PAGE
        .replace("__CLIP_ID__", &escape_html(id))
        .replace("__SUBMIT_URL__", &escape_html(url))
        .replace("__QR_SVG__", qr_svg)
}

fn render_clip_page(text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Clipboard Data</title>\n\
         </head>\n<body>\n<div class=\"box\">\n<h2>Clipboard Content</h2>\n\
         <p><b id=\"clip-text\">{}</b></p>\n\
         <button type=\"button\" onclick=\"navigator.clipboard.writeText(document.getElementById('clip-text').textContent)\">\
         Copy to Clipboard</button>\n</div>\n</body>\n</html>\n",
        escape_html(text)
    )
}

/// Home page: issues a fresh identifier and its QR-encoded submission URL.
///
/// Generation has no side effect on the store; the entry is born when the
/// first submission arrives for the identifier.
///
/// # Arguments
/// - `state`: Application state.
/// - `host`: Request `Host` header, when present.
///
/// # Returns
/// The home page as HTML.
///
/// # Errors
/// Returns an error if QR rendering fails.
pub async fn home(
    State(state): State<AppState>,
    host: Option<Host>,
) -> Result<Html<String>, HttpError> {
    let id = token::generate_token();
    let base = request_base_url(&state.config, host.as_ref().map(|Host(value)| value.as_str()));
    let url = token::submission_url(&base, &id);
    let qr_svg = qr::render_svg(&url)?;
    tracing::debug!(id = %id, url = %url, "issued clip token");
    Ok(Html(render_home_page(&id, &url, &qr_svg)))
}

/// Show the stored text for a clip, or a not-found message.
///
/// Absence is not an error here; the page renders a literal message, per
/// the read-only viewing flow.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Clip identifier from the path.
///
/// # Returns
/// The clip view page as HTML.
pub async fn show_clip(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let text = state
        .store
        .get(&id)
        .map(|clip| clip.text)
        .unwrap_or_else(|| "No data found for this code.".to_string());
    Html(render_clip_page(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_embeds_id_url_and_qr() {
        let page = render_home_page("abc123", "http://127.0.0.1:8000/post/abc123", "<svg></svg>");
        assert!(page.contains("data-clip-id=\"abc123\""));
        assert!(page.contains("<code>http://127.0.0.1:8000/post/abc123</code>"));
        assert!(page.contains("<svg></svg>"));
    }

    #[test]
    fn clip_page_escapes_stored_text() {
        let page = render_clip_page("<script>alert(1)</script>");
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn escape_html_covers_metacharacters() {
        assert_eq!(escape_html("a&b<c>\"d\""), "a&amp;b&lt;c&gt;&quot;d&quot;");
    }
}
