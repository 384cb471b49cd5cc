// Document head: title and meta description from the brand dataset

use crate::content::PageMeta;

const DESCRIPTION_SELECTOR: &str = "meta[name=\"description\"]";

/// Sets the document title and description. Logs and returns on any miss.
pub fn apply(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("no document, head metadata not applied");
        return;
    };

    document.set_title(&meta.title);

    match document.query_selector(DESCRIPTION_SELECTOR) {
        Ok(Some(tag)) => {
            if let Err(e) = tag.set_attribute("content", &meta.description) {
                tracing::warn!(error = ?e, "failed to set meta description");
            }
        }
        Ok(None) => tracing::debug!("index.html has no meta description tag"),
        Err(e) => tracing::warn!(error = ?e, "meta description lookup failed"),
    }
}
