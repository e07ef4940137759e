//! GraphQL document builder for the products search query.

/// Renders the products search document.
///
/// The title filter is a server-side wildcard match (`title:*'<title>'*`);
/// the title is interpolated verbatim, matching the upstream contract this
/// service proxies. `after` is rendered as `null` on the first page and as
/// a quoted cursor afterwards.
pub(crate) fn products_query(
    title: &str,
    first: u32,
    after: Option<&str>,
    variants_first: u32,
) -> String {
    let after = match after {
        Some(cursor) => format!("\"{cursor}\""),
        None => "null".to_owned(),
    };

    format!(
        r#"query {{
  products(query: "title:*'{title}'*", first: {first}, after: {after}) {{
    pageInfo {{
      hasNextPage
      hasPreviousPage
    }}
    edges {{
      cursor
      node {{
        id
        title
        variants(first: {variants_first}) {{
          edges {{
            node {{
              id
              title
              price
            }}
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}
