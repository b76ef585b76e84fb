use std::sync::LazyLock;

use crate::types::Deal;
use crate::utils::normalize_whitespace;

use scraper::{ElementRef, Html, Selector};

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".card").expect("invalid selector: card"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".card-title").expect("invalid selector: title"));
static PRICE_NEW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".price-new").expect("invalid selector: new price"));
static DISCOUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".price-discount").expect("invalid selector: discount"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".card-description").expect("invalid selector: description")
});
static DATE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".card-date").expect("invalid selector: date"));
static IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("invalid selector: img"));

/// Text of every descendant matching `selector`, concatenated, with whitespace
/// runs collapsed.
fn child_text(element: ElementRef, selector: &Selector) -> String {
    normalize_whitespace(
        &element
            .select(selector)
            .flat_map(|e| e.text())
            .collect::<String>(),
    )
}

/// The store is carried by the second attribute of the card's first image.
fn store_from_image(element: ElementRef) -> Option<String> {
    let img = element.select(&IMG).next()?;
    img.value()
        .attrs()
        .nth(1)
        .map(|(_, value)| value.to_string())
}

/// Extracts a deal from one `.card` fragment.
///
/// Returns `None` when the new-price text is not exactly one token (old price
/// artifacts, empty price) or when the store image is missing.
pub fn parse_deal(card: ElementRef) -> Option<Deal> {
    let name = child_text(card, &TITLE);
    let price_text = child_text(card, &PRICE_NEW);

    let mut tokens = price_text.split_whitespace();
    let price = match (tokens.next(), tokens.next()) {
        (Some(price), None) => price.to_string(),
        _ => {
            log::debug!("Skipping '{}': unexpected price text '{}'", name, price_text);
            return None;
        }
    };

    let Some(store) = store_from_image(card) else {
        log::debug!("Skipping '{}': no store image", name);
        return None;
    };

    Some(Deal {
        name,
        description: child_text(card, &DESCRIPTION),
        price,
        discount: child_text(card, &DISCOUNT),
        store,
        validity: child_text(card, &DATE),
    })
}

/// Parses every deal card of a deals page, in document order.
pub fn parse_deals(html: &str) -> Vec<Deal> {
    let document = Html::parse_document(html);
    let deals: Vec<Deal> = document.select(&CARD).filter_map(parse_deal).collect();
    log::debug!("Parsed {} deals", deals.len());
    deals
}
