//! Table and JSON rendering for CLI output.
//!
//! JSON output uses the same envelopes as the HTTP API.

use std::fmt::Write as _;

use catalog_core::{
    CatalogError, PageMetadata, PaginatedResult, PriceLimits, ProductDetail, ProductListItem,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    data: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<PageMetadata>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope<'a> {
    success: bool,
    error: &'a str,
    error_code: &'a str,
}

/// Counts reported by `validate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogSummary {
    pub products: usize,
    pub nutrition_records: usize,
    pub reviews: usize,
    pub price_limits: PriceLimits,
}

fn print_json<T: Serialize>(data: &T, metadata: Option<PageMetadata>) -> anyhow::Result<()> {
    let envelope = Envelope {
        success: true,
        data,
        metadata,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub(crate) fn print_page(result: &PaginatedResult, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&result.products, Some(result.metadata()));
    }
    print!("{}", render_page(result));
    Ok(())
}

pub(crate) fn print_detail(detail: &ProductDetail, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(detail, None);
    }
    print!("{}", render_detail(detail));
    Ok(())
}

pub(crate) fn print_price_limits(limits: PriceLimits, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&limits, None);
    }
    println!("min price: {:.2}", limits.min_price);
    println!("max price: {:.2}", limits.max_price);
    Ok(())
}

pub(crate) fn print_summary(summary: &CatalogSummary, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(summary, None);
    }
    println!("{}", render_summary(summary));
    Ok(())
}

/// Report a catalog error. JSON mode writes the failure envelope to stdout;
/// otherwise the reason code goes to stderr.
pub(crate) fn print_catalog_error(err: &CatalogError, json: bool) -> anyhow::Result<()> {
    if json {
        let envelope = ErrorEnvelope {
            success: false,
            error: err.reason(),
            error_code: err.error_code(),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        eprintln!("error: {} ({})", err.reason(), err.error_code());
    }
    Ok(())
}

fn product_row(item: &ProductListItem) -> String {
    let price = format!("{:.2}", item.price);
    let rating = format!("{:.1}", item.average_rating);
    format!(
        "{:<5}{:<34}{:>8}{:>8}{:>9}  {}",
        item.id,
        item.name,
        price,
        rating,
        item.review_count,
        if item.available { "yes" } else { "no" },
    )
}

pub(crate) fn render_page(result: &PaginatedResult) -> String {
    let mut out = String::new();

    if result.products.is_empty() {
        let _ = writeln!(
            out,
            "no products on page {} ({} matching in total)",
            result.current_page, result.total_products
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{:<5}{:<34}{:>8}{:>8}{:>9}  AVAILABLE",
        "ID", "NAME", "PRICE", "RATING", "REVIEWS"
    );
    for item in &result.products {
        let _ = writeln!(out, "{}", product_row(item));
    }
    let _ = writeln!(
        out,
        "page {} of {} ({} products)",
        result.current_page, result.total_pages, result.total_products
    );
    out
}

pub(crate) fn render_detail(detail: &ProductDetail) -> String {
    let mut out = String::new();
    let info = &detail.nutritional_info;
    let dist = &detail.rating_distribution;

    let _ = writeln!(out, "{} (#{})", detail.name, detail.id);
    let _ = writeln!(out, "{}", detail.short_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.full_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "price:      {:.2}", detail.price);
    let _ = writeln!(out, "volume:     {}", detail.volume);
    let _ = writeln!(out, "category:   {}", detail.category);
    let _ = writeln!(
        out,
        "available:  {}",
        if detail.available { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "rating:     {:.1} ({} reviews)",
        detail.average_rating, detail.review_count
    );
    let _ = writeln!(
        out,
        "            5: {}  4: {}  3: {}  2: {}  1: {}",
        dist.five_stars, dist.four_stars, dist.three_stars, dist.two_stars, dist.one_star
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "serving:    {}", info.serving_size);
    let _ = writeln!(out, "calories:   {} kcal", info.calories);
    let _ = writeln!(out, "sugars:     {}g", info.sugars.normalize());
    let _ = writeln!(out, "caffeine:   {}mg", info.caffeine.normalize());
    let _ = writeln!(out, "taurine:    {}mg", info.taurine.normalize());
    let _ = writeln!(out, "sodium:     {}mg", info.sodium.normalize());
    if let Some(vitamins) = &info.vitamins {
        let list: Vec<String> = vitamins.iter().map(|(k, v)| format!("{k} {v}")).collect();
        let _ = writeln!(out, "vitamins:   {}", list.join(", "));
    }
    let _ = writeln!(out, "ingredients: {}", info.ingredients.join(", "));
    let _ = writeln!(
        out,
        "allergens:  {}",
        info.allergens
            .as_ref()
            .filter(|a| !a.is_empty())
            .map_or_else(|| "none".to_string(), |a| a.join(", "))
    );
    out
}

pub(crate) fn render_summary(summary: &CatalogSummary) -> String {
    format!(
        "catalog ok: {} products, {} nutrition records, {} reviews, prices {:.2} to {:.2}",
        summary.products,
        summary.nutrition_records,
        summary.reviews,
        summary.price_limits.min_price,
        summary.price_limits.max_price
    )
}
