use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    pub description: Option<String>,
    /// Price in cents.
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
    pub category_id: Option<Uuid>,
}

impl NewProduct {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }
}

/// Partial update of a product.
///
/// Absent fields are left untouched. The nullable columns accept an explicit
/// `null` to clear the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Option<Uuid>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }

    /// Field rules plus the URL check on the nullable `image_url`.
    pub fn check(&self) -> AppResult<()> {
        if self.is_empty() {
            return Err(AppError::BadRequest("no fields to update".into()));
        }

        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if let Some(Some(url)) = &self.image_url {
            if !url.validate_url() {
                errors.add("image_url", ValidationError::new("url"));
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// Lowercase ASCII letters and digits in hyphen-separated groups.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && slug.len() <= 120
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        });

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug");
        err.message = Some("slug must be lowercase letters, digits and single hyphens".into());
        Err(err)
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slug_rules() {
        assert!(validate_slug("camiseta-basica").is_ok());
        assert!(validate_slug("mesa-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Mesa").is_err());
        assert!(validate_slug("mesa--roble").is_err());
        assert!(validate_slug("-mesa").is_err());
        assert!(validate_slug("mesa roble").is_err());
    }

    #[test]
    fn new_product_rejects_unknown_fields() {
        let body = json!({ "name": "Silla", "slug": "silla", "price": 100, "discount": 5 });
        assert!(serde_json::from_value::<NewProduct>(body).is_err());
    }

    #[test]
    fn new_product_defaults_stock_and_validates_ranges() {
        let product: NewProduct =
            serde_json::from_value(json!({ "name": "Silla", "slug": "silla", "price": 100 }))
                .unwrap();
        assert_eq!(product.stock, 0);
        assert!(product.check().is_ok());

        let negative: NewProduct =
            serde_json::from_value(json!({ "name": "Silla", "slug": "silla", "price": -1 }))
                .unwrap();
        match negative.check() {
            Err(AppError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("price"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let no_stock: NewProduct = serde_json::from_value(
            json!({ "name": "Silla", "slug": "silla", "price": 1, "stock": -2 }),
        )
        .unwrap();
        assert!(matches!(no_stock.check(), Err(AppError::Validation(_))));
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let patch: ProductPatch =
            serde_json::from_value(json!({ "description": null, "stock": 3 })).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.image_url, None);
        assert_eq!(patch.stock, Some(3));
        assert!(patch.check().is_ok());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let patch: ProductPatch = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(patch.check(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn patch_checks_nullable_image_url() {
        let patch: ProductPatch =
            serde_json::from_value(json!({ "image_url": "not a url" })).unwrap();
        assert!(matches!(patch.check(), Err(AppError::Validation(_))));

        let cleared: ProductPatch = serde_json::from_value(json!({ "image_url": null })).unwrap();
        assert!(cleared.check().is_ok());
    }

    #[test]
    fn patch_rejects_negative_price_and_stock() {
        let patch: ProductPatch = serde_json::from_value(json!({ "price": -5 })).unwrap();
        match patch.check() {
            Err(AppError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("price"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let patch: ProductPatch = serde_json::from_value(json!({ "stock": -1 })).unwrap();
        assert!(matches!(patch.check(), Err(AppError::Validation(_))));
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let body = json!({ "created_at": "2024-01-01T00:00:00Z" });
        assert!(serde_json::from_value::<ProductPatch>(body).is_err());
    }
}
