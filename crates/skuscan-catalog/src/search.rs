//! Title search: the pagination loop, variant flattening, and price sort.

use crate::client::CatalogClient;

/// Maximum number of pages to walk before giving up.
/// Prevents infinite loops on cycling cursors.
const MAX_PAGES: usize = 200;

/// Why the pagination loop stopped.
///
/// Callers return the accumulated entries regardless of the reason; the tag
/// keeps "upstream broke" separable from "no more results" without changing
/// the response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `hasNextPage` went false.
    Exhausted,
    /// A page came back with zero product edges.
    EmptyPage,
    /// A page fetch failed; everything collected before it is kept.
    UpstreamError,
    /// [`MAX_PAGES`] exceeded.
    PageLimit,
}

/// The outcome of one title search: flattened entries, sorted ascending by
/// price, plus the loop's termination reason.
#[derive(Debug)]
pub struct SearchResults {
    pub entries: Vec<String>,
    pub termination: Termination,
}

/// Loop state threaded through the fold: what has been collected, where the
/// next page starts, and whether there is one.
struct Accumulator {
    entries: Vec<String>,
    cursor: Option<String>,
    has_next: bool,
}

impl CatalogClient {
    /// Searches the catalog for products whose title contains `title` and
    /// flattens every variant into a `"<product> - <variant> - $<price>"`
    /// entry, sorted ascending by price.
    ///
    /// Best-effort by contract: a failed page fetch stops pagination but the
    /// entries gathered so far are still returned (possibly none). The
    /// failure is logged, not surfaced.
    pub async fn collect_variants(&self, title: &str) -> SearchResults {
        let (mut entries, termination) = self.paginate(title).await;
        sort_by_price(&mut entries);
        SearchResults {
            entries,
            termination,
        }
    }

    /// Walks the products connection page by page, folding each page into
    /// the accumulator. Pages are fetched strictly sequentially: the cursor
    /// from page N is required to request page N+1.
    async fn paginate(&self, title: &str) -> (Vec<String>, Termination) {
        let mut acc = Accumulator {
            entries: Vec::new(),
            cursor: None,
            has_next: true,
        };
        let mut page_count = 0usize;

        while acc.has_next {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    title,
                    max_pages = MAX_PAGES,
                    "page limit reached; cursor may be cycling"
                );
                return (acc.entries, Termination::PageLimit);
            }

            let page = match self.fetch_page(title, acc.cursor.as_deref()).await {
                Ok(page) => page,
                Err(error) => {
                    tracing::warn!(
                        title,
                        page = page_count,
                        error = %error,
                        "catalog page fetch failed; keeping results collected so far"
                    );
                    return (acc.entries, Termination::UpstreamError);
                }
            };

            if page.edges.is_empty() {
                return (acc.entries, Termination::EmptyPage);
            }

            for edge in page.edges {
                // Last edge's cursor wins; with page_size 1 there is at most one.
                acc.cursor = Some(edge.cursor);
                let product_title = edge.node.title;
                for variant in edge.node.variants.edges {
                    acc.entries.push(format_entry(
                        &product_title,
                        &variant.node.title,
                        &variant.node.price,
                    ));
                }
            }
            acc.has_next = page.page_info.has_next_page;
        }

        (acc.entries, Termination::Exhausted)
    }
}

/// Formats one display entry. The upstream decimal string is parsed and
/// re-rendered, so `"19.990"` becomes `$19.99` and `"20"` becomes `$20`.
pub(crate) fn format_entry(product: &str, variant: &str, raw_price: &str) -> String {
    format!("{product} - {variant} - ${}", parse_price(raw_price))
}

/// Parses the longest leading numeric prefix of `raw` as an `f64`.
///
/// `"19.99 USD"` parses as `19.99`; a string with no leading number yields
/// `NaN` rather than an error — an unpriceable entry still renders and
/// simply sorts last.
pub(crate) fn parse_price(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Sorts entries ascending by the price re-parsed from each formatted
/// string — the text after the first `" - $"` marker, not a retained
/// numeric value.
pub(crate) fn sort_by_price(entries: &mut [String]) {
    entries.sort_by(|a, b| entry_price(a).total_cmp(&entry_price(b)));
}

fn entry_price(entry: &str) -> f64 {
    entry
        .split_once(" - $")
        .map_or(f64::NAN, |(_, rest)| parse_price(rest))
}
