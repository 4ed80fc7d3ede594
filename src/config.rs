use super::*;
use url::Url;

/// Environment override for the widget URL. Also reachable through the
/// `--widget-url` CLI flag, which sets this variable before startup.
pub const WIDGET_URL_ENV: &str = "CHATDOCK_WIDGET_URL";

const WIDGET_BASE_URL: &str = "https://chat.vortexio.tech/widget/assets/twp/blank.html";
const WIDGET_PROJECT_ID: &str = "68f73807d8ab1e0fba8a1dca";

// Display flags consumed by the remote widget; opaque configuration as far
// as the host is concerned.
const WIDGET_QUERY_FLAGS: [(&str, &str); 3] = [
    ("tiledesk_fullscreenMode", "true"),
    ("tiledesk_hideHeaderCloseButton", "true"),
    ("tiledesk_open", "true"),
];

/// The fixed remote address the widget window navigates to, or a validated
/// override from the environment.
pub(crate) fn widget_url() -> Url {
    if let Ok(raw) = env::var(WIDGET_URL_ENV) {
        match parse_widget_url_override(&raw) {
            Ok(parsed) => return parsed,
            Err(reason) => log::warn!("Ignoring {WIDGET_URL_ENV} override ({reason}): {raw}"),
        }
    }

    default_widget_url()
}

pub(crate) fn parse_widget_url_override(raw: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw.trim()).map_err(|e| format!("not a valid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", parsed.scheme()));
    }
    Ok(parsed)
}

pub(crate) fn default_widget_url() -> Url {
    let mut url = Url::parse(WIDGET_BASE_URL).expect("widget base URL is well-formed");
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("tiledesk_projectid", WIDGET_PROJECT_ID);
        for (key, value) in WIDGET_QUERY_FLAGS {
            query.append_pair(key, value);
        }
    }
    url
}
