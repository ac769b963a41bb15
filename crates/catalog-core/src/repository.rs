use crate::products::{NutritionalInfo, Product, ProductId, Review};

/// Read-only access to catalog records.
///
/// The query pipeline only talks to this trait, so the in-memory fixture can
/// be swapped for a real datastore without touching it.
pub trait CatalogRepository: Send + Sync {
    /// All products, in catalog order.
    fn find_all(&self) -> &[Product];

    fn find_by_id(&self, id: ProductId) -> Option<&Product>;

    fn find_nutrition_by_product_id(&self, id: ProductId) -> Option<&NutritionalInfo>;

    /// Reviews for one product, in catalog order. Empty when there are none.
    fn find_reviews_by_product_id(&self, id: ProductId) -> Vec<&Review>;
}

/// `Vec`-backed repository holding the whole catalog in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    nutrition: Vec<NutritionalInfo>,
    reviews: Vec<Review>,
}

impl InMemoryCatalog {
    /// Build a catalog from raw records without any integrity checks.
    ///
    /// Loaders that accept outside data should validate before calling this.
    #[must_use]
    pub fn new(
        products: Vec<Product>,
        nutrition: Vec<NutritionalInfo>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            products,
            nutrition,
            reviews,
        }
    }

    #[must_use]
    pub fn nutrition(&self) -> &[NutritionalInfo] {
        &self.nutrition
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn find_all(&self) -> &[Product] {
        &self.products
    }

    fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn find_nutrition_by_product_id(&self, id: ProductId) -> Option<&NutritionalInfo> {
        self.nutrition.iter().find(|n| n.product_id == id)
    }

    fn find_reviews_by_product_id(&self, id: ProductId) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.product_id == id).collect()
    }
}
