//! Markup builders for catalog content.
//!
//! Pure functions from catalog records to [`Markup`]. Every piece of
//! catalog text is escaped here; nothing downstream escapes again.

use storefront_catalog::{ContentSection, ProductId, ProductRecord, format_optional_price};

use crate::location::{HOME_PAGE, ID_PARAM, PRODUCT_PAGE};
use crate::markup::{Markup, encode_query_value, escape_html};

/// Link to a product's detail page, e.g. `product.html?id=lemon-1`.
pub fn product_href(id: &ProductId) -> String {
    format!(
        "{PRODUCT_PAGE}?{ID_PARAM}={}",
        encode_query_value(&id.as_text())
    )
}

/// A product card. Tags are included, up to `tag_limit`, only when a limit
/// is given.
pub fn product_card(product: &ProductRecord, tag_limit: Option<usize>) -> Markup {
    let name = escape_html(&product.name);
    let tags = match tag_limit {
        Some(limit) => format!(
            "<div class=\"product-features\">{}</div>",
            tag_items(product.tags.iter().take(limit))
        ),
        None => String::new(),
    };

    Markup::trusted(format!(
        "<a class=\"product-card\" href=\"{href}\" aria-label=\"View {name}\">\
         <div class=\"product-image\"><img src=\"{image}\" alt=\"{name}\"></div>\
         <div class=\"product-info\">\
         <h3>{name}</h3>\
         <p>{short}</p>\
         {tags}\
         <div class=\"product-footer\">\
         <span class=\"price\">From {price}</span>\
         <span class=\"btn btn-small\">Learn More</span>\
         </div></div></a>",
        href = escape_html(&product_href(&product.id)),
        image = escape_html(&product.image),
        short = escape_html(&product.short_description),
        price = escape_html(&format_optional_price(product.price.as_deref())),
    ))
}

/// Cards for a list of products.
pub fn product_cards<'a, I>(products: I, tag_limit: Option<usize>) -> Markup
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    Markup::concat(products.into_iter().map(|p| product_card(p, tag_limit)))
}

/// `Home / Products / <name>`.
pub fn breadcrumb(name: &str) -> Markup {
    Markup::trusted(format!(
        "<a href=\"{HOME_PAGE}\">Home</a> / <a href=\"{HOME_PAGE}#products\">Products</a> / <span>{}</span>",
        escape_html(name)
    ))
}

/// The primary product image.
pub fn gallery_image(product: &ProductRecord) -> Markup {
    Markup::trusted(format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(&product.image),
        escape_html(&product.name)
    ))
}

/// Description, feature list, and detailed-content sections.
pub fn description_block(product: &ProductRecord) -> Markup {
    let features: String = product
        .features
        .iter()
        .map(|f| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape_html(&f.title),
                escape_html(&f.description)
            )
        })
        .collect();

    let mut html = Markup::trusted(format!(
        "<h2>Description</h2><p>{}</p><h3>Key Features</h3><ul class=\"feature-list\">{features}</ul>",
        escape_html(&product.description)
    ));

    for section in product.detailed_content.iter().flatten() {
        html.push(content_section(section));
    }
    html
}

fn content_section(section: &ContentSection) -> Markup {
    let mut html = format!("<h3>{}</h3>", escape_html(&section.heading));

    if let Some(items) = &section.items {
        html.push_str("<div class=\"maps-grid\">");
        for item in items {
            html.push_str(&format!(
                "<div class=\"map-item\"><h4>{}</h4><p>{}</p></div>",
                escape_html(&item.name),
                escape_html(&item.description)
            ));
        }
        html.push_str("</div>");
    }

    if let Some(content) = section.paragraph() {
        html.push_str(&format!("<p>{}</p>", escape_html(content)));
    }

    Markup::trusted(html)
}

/// Secondary link to the user guide, opened in a new browsing context.
pub fn user_guide_button(url: &str) -> Markup {
    Markup::trusted(format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"btn btn-secondary btn-block\" style=\"margin-top: 1rem;\">📄 View User Guide</a>",
        escape_html(url)
    ))
}

/// `<li><strong>key:</strong> value</li>` per technical detail.
pub fn spec_items<'a, I>(entries: I) -> Markup
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    Markup::trusted(
        entries
            .into_iter()
            .map(|(key, value)| {
                format!(
                    "<li><strong>{}:</strong> {}</li>",
                    escape_html(key),
                    escape_html(&value)
                )
            })
            .collect::<String>(),
    )
}

/// Check-marked key feature items.
pub fn key_feature_items<'a, I>(features: I) -> Markup
where
    I: IntoIterator<Item = &'a String>,
{
    Markup::trusted(
        features
            .into_iter()
            .map(|f| format!("<li>✓ {}</li>", escape_html(f)))
            .collect::<String>(),
    )
}

/// Tag chips.
pub fn tag_items<'a, I>(tags: I) -> Markup
where
    I: IntoIterator<Item = &'a String>,
{
    Markup::trusted(
        tags.into_iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
            .collect::<String>(),
    )
}

/// Whole-body notice for an unknown product id.
pub fn not_found_notice() -> Markup {
    Markup::trusted(format!(
        "<div class=\"container\" style=\"padding: 4rem 2rem; text-align: center;\">\
         <h1>Product Not Found</h1><p><a href=\"{HOME_PAGE}\">Return to Homepage</a></p></div>"
    ))
}
