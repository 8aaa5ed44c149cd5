use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static HERO_DATA_URI: OnceLock<String> = OnceLock::new();

pub const MOCK_SELLER_PATH: &str = "/assets/mock_seller.json";

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Returns the generated Tailwind stylesheet, or an empty string when the
/// build did not produce one (plain `cargo run` without the Dioxus CLI).
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| {
            try_load_text("/assets/tailwind.css").unwrap_or_else(|| {
                tracing::warn!("assets/tailwind.css not embedded; utility classes will be unstyled");
                String::new()
            })
        })
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri("/assets/favicon.svg"))
        .as_str()
}

/// Returns a data URI for the landing page illustration.
pub fn hero_data_uri() -> &'static str {
    HERO_DATA_URI
        .get_or_init(|| svg_data_uri("/assets/hero.svg"))
        .as_str()
}

/// Raw JSON of the bundled seller record used by the mock analyzer.
pub fn mock_seller_json() -> Option<String> {
    try_load_text(MOCK_SELLER_PATH)
}

fn load_text(path: &str) -> String {
    try_load_text(path).unwrap_or_else(|| panic!("Embedded asset {path} is missing or not UTF-8"))
}

fn try_load_text(path: &str) -> Option<String> {
    let asset = EmbeddedAssets::get(&canonical_asset_path(path))?;
    String::from_utf8(asset.data.into_owned()).ok()
}

fn svg_data_uri(path: &str) -> String {
    let encoded = encode_base64(load_asset(path).as_ref());
    format!("data:image/svg+xml;base64,{encoded}")
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = *chunk.get(1).unwrap_or(&0);
        let b2 = *chunk.get(2).unwrap_or(&0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn asset_paths_are_normalised() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("hero.svg"), "hero.svg");
    }

    #[test]
    fn bundled_assets_are_present() {
        assert!(main_css().contains(".trust-ring"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(hero_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(mock_seller_json().is_some());
    }
}
