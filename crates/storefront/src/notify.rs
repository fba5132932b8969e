//! Outbound notification link building.
//!
//! Builds the WhatsApp deep link and mail-compose link that carry the order
//! summary. Only construction lives here; opening the links and whatever
//! happens after is the caller's concern, fire-and-forget.

use sbos_core::OrderRef;
use url::Url;

/// Build a WhatsApp deep link carrying the URL-encoded summary text.
///
/// # Errors
///
/// Returns an error if `number` does not form a valid `wa.me` URL.
pub fn whatsapp_link(number: &str, summary: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "https://wa.me/{number}?text={}",
        urlencoding::encode(summary)
    ))
}

/// Build a mail-compose link with subject "Order Confirmation <ref>" and the
/// summary as body.
///
/// # Errors
///
/// Returns an error if `to` does not form a valid `mailto:` URL.
pub fn mailto_link(to: &str, reference: &OrderRef, summary: &str) -> Result<Url, url::ParseError> {
    let subject = format!("Order Confirmation {reference}");
    Url::parse(&format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(summary)
    ))
}
