//! The built-in Monster Energy catalog served when no data file is configured.

use std::collections::BTreeMap;

use catalog_core::{InMemoryCatalog, NutritionalInfo, Product, ProductId, Review};
use rust_decimal::Decimal;

const CAN_VOLUME: &str = "473ml";

const B_VITAMINS: [(&str, &str); 4] = [
    ("B2", "3.6mg"),
    ("B3", "43mg"),
    ("B6", "4.2mg"),
    ("B12", "13mcg"),
];

/// Build the fixture catalog: five products, one nutrition record each and
/// seventeen reviews.
#[must_use]
pub fn fixture_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(products(), nutritional_info(), reviews())
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: ProductId,
    name: &str,
    slug: &str,
    short_description: &str,
    full_description: &str,
    price: Decimal,
    category: &str,
    sales_count: u64,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        image_url: format!("https://example.com/images/{slug}.jpg"),
        short_description: short_description.to_string(),
        full_description: full_description.to_string(),
        price,
        volume: CAN_VOLUME.to_string(),
        category: category.to_string(),
        available: true,
        sales_count,
    }
}

fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Monster Energy Original",
            "monster-original",
            "The original Monster Energy drink",
            "Monster Energy is a carbonated energy drink that contains caffeine, taurine, \
             B vitamins, and other ingredients. The original flavor delivers a smooth, \
             easy-drinking experience.",
            cents(899),
            "Original",
            1250,
        ),
        product(
            2,
            "Monster Energy Ultra",
            "monster-ultra",
            "Zero sugar, full Monster flavor",
            "Monster Ultra is a lighter tasting, zero sugar energy drink with full Monster \
             Energy flavor. Perfect for those who want energy without the calories.",
            cents(949),
            "Ultra",
            980,
        ),
        product(
            3,
            "Monster Energy Juice",
            "monster-juice",
            "Energy + Juice blend",
            "Monster Juice combines the energy of Monster with real fruit juice for a \
             refreshing taste. Contains 100% daily value of Vitamin C.",
            cents(1099),
            "Juice",
            750,
        ),
        product(
            4,
            "Monster Energy Assault",
            "monster-assault",
            "Intense cherry lime flavor",
            "Monster Assault delivers an intense cherry lime flavor with the full Monster \
             Energy blend. Perfect for those who want a bold taste.",
            cents(899),
            "Original",
            620,
        ),
        product(
            5,
            "Monster Energy Pipeline Punch",
            "monster-pipeline",
            "Tropical punch flavor",
            "Monster Pipeline Punch is a tropical punch flavored energy drink with passion \
             fruit, orange, and guava. A taste of the islands in every can.",
            cents(999),
            "Juice",
            890,
        ),
    ]
}

fn vitamins(with_vitamin_c: bool) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = B_VITAMINS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    if with_vitamin_c {
        map.insert("C".to_string(), "100% DV".to_string());
    }
    map
}

fn nutrition(
    product_id: ProductId,
    calories: u32,
    sugars: i64,
    caffeine: i64,
    with_vitamin_c: bool,
    ingredients: &[&str],
) -> NutritionalInfo {
    NutritionalInfo {
        product_id,
        serving_size: CAN_VOLUME.to_string(),
        calories,
        sugars: Decimal::from(sugars),
        caffeine: Decimal::from(caffeine),
        taurine: Decimal::from(2000),
        sodium: Decimal::from(370),
        vitamins: Some(vitamins(with_vitamin_c)),
        ingredients: ingredients.iter().map(|i| (*i).to_string()).collect(),
        allergens: None,
    }
}

fn nutritional_info() -> Vec<NutritionalInfo> {
    vec![
        nutrition(
            1,
            210,
            54,
            160,
            false,
            &[
                "Carbonated Water",
                "Sucrose",
                "Glucose",
                "Citric Acid",
                "Natural Flavors",
                "Taurine",
                "Sodium Citrate",
                "Color Added",
                "Panax Ginseng Root Extract",
                "L-Carnitine L-Tartrate",
                "Caffeine",
                "Sorbic Acid",
                "Benzoic Acid",
                "Niacinamide",
                "Sodium Chloride",
                "Glucuronolactone",
                "Inositol",
                "Guarana Seed Extract",
                "Pyridoxine Hydrochloride",
                "Sucralose",
                "Riboflavin",
                "Maltodextrin",
                "Cyanocobalamin",
            ],
        ),
        nutrition(
            2,
            10,
            0,
            140,
            false,
            &[
                "Carbonated Water",
                "Citric Acid",
                "Erythritol",
                "Taurine",
                "Sodium Citrate",
                "Natural Flavors",
                "Panax Ginseng Root Extract",
                "L-Carnitine L-Tartrate",
                "Caffeine",
                "Sorbic Acid",
                "Benzoic Acid",
                "Niacinamide",
                "Sucralose",
                "Sodium Chloride",
                "Glucuronolactone",
                "Inositol",
                "Guarana Seed Extract",
                "Pyridoxine Hydrochloride",
                "Riboflavin",
                "Maltodextrin",
                "Cyanocobalamin",
            ],
        ),
        nutrition(
            3,
            180,
            42,
            160,
            true,
            &[
                "Carbonated Water",
                "Concentrated Juices (Apple, Orange, Tangerine, White Grape)",
                "Sucrose",
                "Glucose",
                "Citric Acid",
                "Taurine",
                "Natural Flavors",
                "Sodium Citrate",
                "Panax Ginseng Root Extract",
                "L-Carnitine L-Tartrate",
                "Caffeine",
                "Sorbic Acid",
                "Benzoic Acid",
                "Niacinamide",
                "Ascorbic Acid",
                "Sodium Chloride",
                "Glucuronolactone",
                "Inositol",
                "Guarana Seed Extract",
                "Pyridoxine Hydrochloride",
                "Riboflavin",
                "Maltodextrin",
                "Cyanocobalamin",
            ],
        ),
        nutrition(
            4,
            200,
            52,
            160,
            false,
            &[
                "Carbonated Water",
                "Sucrose",
                "Glucose",
                "Citric Acid",
                "Natural Flavors",
                "Taurine",
                "Sodium Citrate",
                "Color Added",
                "Panax Ginseng Root Extract",
                "L-Carnitine L-Tartrate",
                "Caffeine",
                "Sorbic Acid",
                "Benzoic Acid",
                "Niacinamide",
                "Sodium Chloride",
                "Glucuronolactone",
                "Inositol",
                "Guarana Seed Extract",
                "Pyridoxine Hydrochloride",
                "Sucralose",
                "Riboflavin",
                "Maltodextrin",
                "Cyanocobalamin",
            ],
        ),
        nutrition(
            5,
            190,
            46,
            160,
            true,
            &[
                "Carbonated Water",
                "Concentrated Juices (Passion Fruit, Orange, Guava)",
                "Sucrose",
                "Glucose",
                "Citric Acid",
                "Taurine",
                "Natural Flavors",
                "Sodium Citrate",
                "Panax Ginseng Root Extract",
                "L-Carnitine L-Tartrate",
                "Caffeine",
                "Sorbic Acid",
                "Benzoic Acid",
                "Niacinamide",
                "Ascorbic Acid",
                "Sodium Chloride",
                "Glucuronolactone",
                "Inositol",
                "Guarana Seed Extract",
                "Pyridoxine Hydrochloride",
                "Riboflavin",
                "Maltodextrin",
                "Cyanocobalamin",
            ],
        ),
    ]
}

fn reviews() -> Vec<Review> {
    // (product, rating in tenths)
    const RATINGS: [(ProductId, i64); 17] = [
        (1, 45),
        (1, 50),
        (1, 40),
        (1, 45),
        (1, 50),
        (2, 48),
        (2, 45),
        (2, 50),
        (2, 47),
        (3, 42),
        (3, 40),
        (3, 45),
        (4, 43),
        (4, 40),
        (5, 46),
        (5, 48),
        (5, 45),
    ];

    RATINGS
        .iter()
        .map(|&(product_id, tenths)| Review {
            product_id,
            rating: Decimal::new(tenths, 1),
        })
        .collect()
}
