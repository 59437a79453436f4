//! Product catalog
//!
//! Product ids are unique across all categories, not only within one.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCategory};
use shared::util::unique_prefixed_id;
use std::collections::HashSet;

fn category_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::CategoryNotFound, format!("Category {id} not found"))
        .with_detail("id", id)
}

fn product_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
        .with_detail("id", id)
}

/// Find a product in any category
pub fn find_product<'a>(categories: &'a [ProductCategory], id: &str) -> Option<&'a Product> {
    categories
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|p| p.id == id)
}

/// Products flagged for the home page, in catalog order
pub fn home_products(categories: &[ProductCategory]) -> Vec<&Product> {
    categories
        .iter()
        .flat_map(|c| c.items.iter())
        .filter(|p| p.show_on_home)
        .collect()
}

pub fn product_count(categories: &[ProductCategory]) -> usize {
    categories.iter().map(|c| c.items.len()).sum()
}

/// Reject catalogs where a product id appears twice
pub fn ensure_unique_product_ids(categories: &[ProductCategory]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for product in categories.iter().flat_map(|c| c.items.iter()) {
        if !seen.insert(product.id.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::ProductIdExists,
                format!("Product id {} is used more than once", product.id),
            )
            .with_detail("id", product.id.as_str()));
        }
    }
    Ok(())
}

/// Replace an existing category (matched by id) including its items
pub fn save_category(
    categories: &[ProductCategory],
    category: ProductCategory,
) -> AppResult<Vec<ProductCategory>> {
    let mut next = categories.to_vec();
    let slot = next
        .iter_mut()
        .find(|c| c.id == category.id)
        .ok_or_else(|| category_not_found(&category.id))?;
    *slot = category;
    ensure_unique_product_ids(&next)?;
    Ok(next)
}

pub fn delete_category(categories: &[ProductCategory], id: &str) -> Vec<ProductCategory> {
    categories.iter().filter(|c| c.id != id).cloned().collect()
}

/// Prepend a blank product to a category; returns the new catalog and the product
pub fn add_product(
    categories: &[ProductCategory],
    category_id: &str,
) -> AppResult<(Vec<ProductCategory>, Product)> {
    let id = unique_prefixed_id("prod", |candidate| {
        find_product(categories, candidate).is_some()
    });
    let product = Product::blank(id);

    let mut next = categories.to_vec();
    let category = next
        .iter_mut()
        .find(|c| c.id == category_id)
        .ok_or_else(|| category_not_found(category_id))?;
    category.items.insert(0, product.clone());
    Ok((next, product))
}

/// Replace a product wherever it lives
pub fn save_product(
    categories: &[ProductCategory],
    product: Product,
) -> AppResult<Vec<ProductCategory>> {
    let mut next = categories.to_vec();
    let slot = next
        .iter_mut()
        .flat_map(|c| c.items.iter_mut())
        .find(|p| p.id == product.id)
        .ok_or_else(|| product_not_found(&product.id))?;
    *slot = product;
    Ok(next)
}

pub fn delete_product(categories: &[ProductCategory], product_id: &str) -> Vec<ProductCategory> {
    categories
        .iter()
        .cloned()
        .map(|mut c| {
            c.items.retain(|p| p.id != product_id);
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_add_product_prepends_blank() {
        let cats = seed::product_categories();
        let (next, product) = add_product(&cats, "home").unwrap();
        assert!(product.id.starts_with("prod-"));
        assert_eq!(next[1].items[0], product);
        assert_eq!(next[1].items.len(), 3);
        assert_eq!(product_count(&next), product_count(&cats) + 1);

        let err = add_product(&cats, "garden").unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[test]
    fn test_save_product_anywhere() {
        let cats = seed::product_categories();
        let mut panel = find_product(&cats, "a-panel").unwrap().clone();
        panel.show_price = Some(false);
        let next = save_product(&cats, panel).unwrap();
        assert_eq!(find_product(&next, "a-panel").unwrap().displayed_price(), None);

        let err = save_product(&cats, Product::blank("ghost")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_save_category_rejects_duplicate_product_id() {
        let cats = seed::product_categories();
        let mut home = cats[1].clone();
        home.items.push(Product::blank("s1"));
        let err = save_category(&cats, home).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductIdExists);
    }

    #[test]
    fn test_home_products_and_delete() {
        let cats = seed::product_categories();
        assert_eq!(home_products(&cats).len(), 6);

        let next = delete_product(&cats, "m2");
        assert!(find_product(&next, "m2").is_none());
        assert_eq!(next[0].items.len(), 2);

        let next = delete_category(&next, "accessories");
        assert_eq!(next.len(), 2);
    }
}
