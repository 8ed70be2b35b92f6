//! The HTML document that boots the client.

use storyai_core::config::API_ORIGIN_META;

use crate::config::ServerConfig;

/// Render the page shell served for every client route.
///
/// The backend origin is embedded as a `<meta>` tag so one compiled bundle
/// can talk to different backends.
pub fn render_shell(config: &ServerConfig) -> String {
    let title = escape_html(&config.server.title);
    let origin = escape_html(&config.client.api_origin);
    let css = escape_html(&config.asset_url("css"));
    let js = escape_html(&config.asset_url("js"));
    let wasm = escape_html(&config.asset_url("wasm"));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{API_ORIGIN_META}" content="{origin}">
    <title>{title}</title>
    <link rel="stylesheet" href="{css}">
    <link rel="modulepreload" href="{js}">
    <script type="module">
      import init, {{ mount }} from '{js}';
      init({{ module_or_path: '{wasm}' }}).then(() => mount());
    </script>
  </head>
  <body></body>
</html>
"#
    )
}

/// Escape text for use in element content and quoted attributes.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_embeds_api_origin() {
        let config = ServerConfig::from_toml("[client]\napi_origin = \"https://api.example.com/\"\n")
            .unwrap();
        let html = render_shell(&config);

        assert!(html.contains(r#"<meta name="storyai-api-origin" content="https://api.example.com">"#));
        assert!(html.contains("<title>MyStory AI</title>"));
    }

    #[test]
    fn test_shell_loads_bundle() {
        let html = render_shell(&ServerConfig::default());

        assert!(html.contains(r#"href="/pkg/storyai.css""#));
        assert!(html.contains("import init, { mount } from '/pkg/storyai.js';"));
        assert!(html.contains("module_or_path: '/pkg/storyai.wasm'"));
        assert!(html.contains("<body></body>"));
    }

    #[test]
    fn test_shell_escapes_title() {
        let mut config = ServerConfig::default();
        config.server.title = "Tom & Jerry <3".to_string();
        let html = render_shell(&config);

        assert!(html.contains("<title>Tom &amp; Jerry &lt;3</title>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#""a' & b""#), "&quot;a&#39; &amp; b&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
