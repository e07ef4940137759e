//! Wire types for the Shopify Admin GraphQL `products` connection.
//!
//! ## Observed envelope shape
//!
//! Every response is a JSON object with an optional `data` field and an
//! optional `errors` array. Shopify returns HTTP 200 even for query errors;
//! in that case `data` is `null` and `errors` carries the diagnostics. A
//! throttled-but-partial response can carry *both* `data` and `errors` —
//! the page is still usable, so `data` wins when present.
//!
//! ### Prices
//! `price` on a variant node is a decimal **string** (e.g. `"19.990"`,
//! `"20"`), never a number. It is kept as `String` here; numeric parsing
//! happens at formatting time in [`crate::search`].
//!
//! ### Cursors
//! Each product edge carries an opaque base64 cursor. The cursor of a
//! page's last edge is what the next request's `after` argument must be.

use serde::Deserialize;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ProductsData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// The `data` object of a products query.
#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: ProductConnection,
}

/// One page of the `products` connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConnection {
    pub page_info: PageInfo,
    pub edges: Vec<ProductEdge>,
}

/// Relay-style page metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// A product edge: pagination cursor plus the product node.
#[derive(Debug, Deserialize)]
pub struct ProductEdge {
    pub cursor: String,
    pub node: ProductNode,
}

/// A product with its variants connection.
#[derive(Debug, Deserialize)]
pub struct ProductNode {
    /// Global ID, e.g. `gid://shopify/Product/1234567890`.
    pub id: String,
    pub title: String,
    pub variants: VariantConnection,
}

/// The nested `variants(first: N)` connection of a product.
#[derive(Debug, Deserialize)]
pub struct VariantConnection {
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Deserialize)]
pub struct VariantEdge {
    pub node: VariantNode,
}

/// A purchasable variant.
#[derive(Debug, Deserialize)]
pub struct VariantNode {
    /// Global ID, e.g. `gid://shopify/ProductVariant/987654321`.
    pub id: String,
    pub title: String,
    /// Decimal string as returned by the API.
    pub price: String,
}
