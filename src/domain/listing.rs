use url::Url;

/// Display-friendly pieces of an analysed listing link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingSummary {
    pub host: String,
    pub item_id: Option<String>,
}

impl ListingSummary {
    /// Splits `raw` into host and `/itm/<id>` listing id. Returns `None` when
    /// the link cannot be parsed as a URL at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        let host = url.host_str()?.trim_start_matches("www.").to_lowercase();

        let item_id = url
            .path_segments()
            .and_then(|segments| {
                segments
                    .skip_while(|segment| *segment != "itm")
                    .skip(1)
                    .find(|segment| is_item_id(segment))
            })
            .map(str::to_string);

        Some(Self { host, item_id })
    }

    pub fn display(&self) -> String {
        match &self.item_id {
            Some(id) => format!("{} · item {}", self.host, id),
            None => self.host.clone(),
        }
    }
}

/// `/itm/<id>` and `/itm/<slug>/<id>` both occur; the id is the first
/// all-digit segment after `itm`.
fn is_item_id(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Line shown under the results header.
pub fn listing_caption(raw: &str) -> String {
    ListingSummary::parse(raw)
        .map(|summary| summary.display())
        .unwrap_or_else(|| raw.to_string())
}
