use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    dto::{categories::NewCategory, products::NewProduct},
    error::AppResult,
    repository::CatalogRepository,
};

const CATEGORIES: [(&str, &str); 3] = [
    ("Ropa", "ropa"),
    ("Electrónica", "electronica"),
    ("Hogar", "hogar"),
];

struct SampleProduct {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: i64,
    image_url: &'static str,
    stock: i32,
    category: &'static str,
}

const PRODUCTS: [SampleProduct; 3] = [
    SampleProduct {
        name: "Camiseta básica",
        slug: "camiseta-basica",
        description: "Camiseta de algodón 100%",
        price: 1499,
        image_url: "https://picsum.photos/seed/camiseta/800/600",
        stock: 50,
        category: "ropa",
    },
    SampleProduct {
        name: "Auriculares inalámbricos",
        slug: "auriculares-inalambricos",
        description: "Bluetooth 5.3, cancelación de ruido",
        price: 3999,
        image_url: "https://picsum.photos/seed/auriculares/800/600",
        stock: 25,
        category: "electronica",
    },
    SampleProduct {
        name: "Cafetera de filtro",
        slug: "cafetera-filtro",
        description: "12 tazas, temporizador programable",
        price: 5499,
        image_url: "https://picsum.photos/seed/cafetera/800/600",
        stock: 15,
        category: "hogar",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
}

/// Upsert the fixed categories and sample products. Safe to run repeatedly.
pub async fn seed_catalog(catalog: &dyn CatalogRepository) -> AppResult<SeedReport> {
    let mut category_ids: HashMap<&str, Uuid> = HashMap::new();
    for (name, slug) in CATEGORIES {
        let category = catalog
            .upsert_category(NewCategory {
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await?;
        tracing::debug!(slug, id = %category.id, "category ensured");
        category_ids.insert(slug, category.id);
    }

    for sample in &PRODUCTS {
        let product = catalog
            .upsert_product(NewProduct {
                name: sample.name.to_string(),
                slug: sample.slug.to_string(),
                description: Some(sample.description.to_string()),
                price: sample.price,
                image_url: Some(sample.image_url.to_string()),
                stock: sample.stock,
                category_id: category_ids.get(sample.category).copied(),
            })
            .await?;
        tracing::debug!(slug = sample.slug, id = %product.id, "product ensured");
    }

    let report = SeedReport {
        categories: CATEGORIES.len(),
        products: PRODUCTS.len(),
    };
    tracing::info!(
        categories = report.categories,
        products = report.products,
        "catalog seeded"
    );
    Ok(report)
}
