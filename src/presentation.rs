//! Display mapping for catalog rows and the HTML views of the storefront.
//!
//! Prices are formatted the way `es-ES` renders EUR amounts: comma decimal
//! separator, dot grouping from five integer digits up, symbol after a space.

use std::fmt::Write;

use serde::Serialize;
use uuid::Uuid;

use crate::models::Product;

pub const DEFAULT_STORE_NAME: &str = "Muebles & Co.";
const CURRENCY_SYMBOL: &str = "€";

/// Format a price held in cents.
pub fn format_price(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let cents = abs % 100;
    format!(
        "{sign}{},{cents:02} {CURRENCY_SYMBOL}",
        group_thousands(abs / 100)
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    // es-ES leaves four digit amounts ungrouped.
    if digits.len() < 5 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    SoldOut,
}

impl Availability {
    pub fn from_stock(stock: i32) -> Self {
        if stock > 0 {
            Availability::InStock
        } else {
            Availability::SoldOut
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::InStock => "En stock",
            Availability::SoldOut => "Agotado",
        }
    }

    pub fn is_available(self) -> bool {
        self == Availability::InStock
    }
}

/// Label used on the detail page, which also shows the remaining units.
pub fn stock_label(stock: i32) -> String {
    match Availability::from_stock(stock) {
        Availability::InStock => format!("En stock ({stock} disponibles)"),
        Availability::SoldOut => Availability::SoldOut.label().to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: Option<String>,
    pub availability: Availability,
    pub href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            image_url: product.image_url.clone(),
            availability: Availability::from_stock(product.stock),
            href: detail_href(product.id),
        }
    }
}

pub fn detail_href(id: Uuid) -> String {
    format!("/productos/{id}")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(store_name: &str, title: &str, body: &str) -> String {
    let store_name = escape_html(store_name);
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | {store_name}</title>\n</head>\n<body>\n\
         <header><a href=\"/\">{store_name}</a></header>\n<main>\n{body}</main>\n</body>\n</html>\n"
    )
}

/// Featured listing. `backend_ready == false` renders the configuration notice
/// instead of the grid.
pub fn render_listing(store_name: &str, backend_ready: bool, cards: &[ProductCard]) -> String {
    let mut body = String::new();
    if !backend_ready {
        body.push_str(
            "<section class=\"notice\">\n<h2>Configuración requerida</h2>\n\
             <p>Define DATABASE_URL y DATABASE_ACCESS_KEY y reinicia el servidor.</p>\n</section>\n",
        );
    } else if cards.is_empty() {
        body.push_str(
            "<section class=\"empty\">\n<p>No hay productos disponibles en este momento.</p>\n</section>\n",
        );
    } else {
        body.push_str("<ul class=\"products\">\n");
        for card in cards {
            let _ = write!(
                body,
                "<li><a href=\"{href}\">{image}<h3>{name}</h3>{description}\
                 <span class=\"price\">{price}</span> \
                 <span class=\"badge {badge}\">{label}</span></a></li>\n",
                href = card.href,
                image = image_tag(card.image_url.as_deref(), &card.name),
                name = escape_html(&card.name),
                description = card
                    .description
                    .as_deref()
                    .map(|d| format!("<p>{}</p>", escape_html(d)))
                    .unwrap_or_default(),
                price = escape_html(&card.price),
                badge = badge_class(card.availability),
                label = card.availability.label(),
            );
        }
        body.push_str("</ul>\n");
    }
    page(store_name, "Productos", &body)
}

pub fn render_detail(store_name: &str, product: &Product) -> String {
    let availability = Availability::from_stock(product.stock);
    let mut body = String::new();
    let _ = write!(
        body,
        "<article class=\"product\">\n<a href=\"/\">Volver a productos</a>\n{image}\n\
         <h1>{name}</h1>\n<p class=\"price\">{price}</p>\n",
        image = image_tag(product.image_url.as_deref(), &product.name),
        name = escape_html(&product.name),
        price = escape_html(&format_price(product.price)),
    );
    if let Some(description) = product.description.as_deref() {
        let _ = write!(
            body,
            "<h2>Descripción</h2>\n<p>{}</p>\n",
            escape_html(description)
        );
    }
    let _ = write!(
        body,
        "<p class=\"badge {badge}\">{label}</p>\n<button{disabled}>{action}</button>\n</article>\n",
        badge = badge_class(availability),
        label = escape_html(&stock_label(product.stock)),
        disabled = if availability.is_available() {
            ""
        } else {
            " disabled"
        },
        action = if availability.is_available() {
            "Añadir al carrito"
        } else {
            "Producto agotado"
        },
    );
    page(store_name, &product.name, &body)
}

pub fn render_not_found(store_name: &str) -> String {
    page(
        store_name,
        "No encontrado",
        "<section class=\"not-found\">\n<h1>Producto no encontrado</h1>\n\
         <a href=\"/\">Volver a productos</a>\n</section>\n",
    )
}

fn image_tag(url: Option<&str>, alt: &str) -> String {
    match url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(url),
            escape_html(alt)
        ),
        None => "<div class=\"placeholder\"></div>".to_string(),
    }
}

fn badge_class(availability: Availability) -> &'static str {
    match availability {
        Availability::InStock => "in-stock",
        Availability::SoldOut => "sold-out",
    }
}
