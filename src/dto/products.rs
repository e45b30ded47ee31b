/// Input for seeding a product into the store.
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image_url: String,
    pub thumbnail_urls: Vec<String>,
    pub is_active: bool,
}
