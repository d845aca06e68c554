//! Mock catalog data seeded at startup.
//!
//! There is no backend; these records stand in for a product feed. Listed
//! newest-first, which is also the default listing order.

use crate::catalog::{Product, Seller, ShippingInfo, Variants};
use crate::ids::{ProductId, SellerId};
use std::collections::BTreeMap;

const FLASH_SALE_END: i64 = 1_735_689_599; // 2024-12-31T23:59:59Z

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

fn techworld() -> Seller {
    Seller {
        id: SellerId::new(1),
        name: "TechWorld Store".to_string(),
        rating: 4.9,
        response_time: "within 2 hours".to_string(),
        location: "United States".to_string(),
        verified: true,
    }
}

/// The demo product set.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "iPhone 15 Pro Max".to_string(),
            description: "The most advanced iPhone with titanium design and A17 Pro chip."
                .to_string(),
            price: 1199.0,
            original_price: Some(1299.0),
            currency: "USD".to_string(),
            images: vec![
                "images/iphone-15.avif".to_string(),
                "images/iphone-15-2.jpeg".to_string(),
            ],
            category: "Electronics".to_string(),
            subcategory: Some("Smartphones".to_string()),
            brand: "Apple".to_string(),
            rating: 4.8,
            reviews: 1247,
            in_stock: true,
            stock_count: 50,
            seller: techworld(),
            specifications: specs(&[
                ("Display", "6.7-inch Super Retina XDR"),
                ("Chip", "A17 Pro"),
                ("Storage", "256GB"),
            ]),
            tags: tags(&["smartphone", "apple", "ios", "premium"]),
            discount: Some(8),
            is_flash_sale: true,
            flash_sale_end_time: Some(FLASH_SALE_END),
            shipping_info: ShippingInfo {
                free_shipping: true,
                estimated_days: "2-3 days".to_string(),
                cost: None,
            },
            variants: Some(Variants {
                color: tags(&["Natural Titanium", "Blue Titanium", "Black Titanium"]),
                size: tags(&["256GB", "512GB", "1TB"]),
            }),
            created_at: 1_705_312_800, // 2024-01-15T10:00:00Z
            updated_at: 1_705_764_600, // 2024-01-20T15:30:00Z
        },
        Product {
            id: ProductId::new(3),
            name: "MacBook Air M3".to_string(),
            description: "Supercharged by the M3 chip. Ultra-portable and powerful.".to_string(),
            price: 1299.0,
            original_price: Some(1399.0),
            currency: "USD".to_string(),
            images: vec!["images/macbook-air-m3.jpeg".to_string()],
            category: "Electronics".to_string(),
            subcategory: Some("Laptops".to_string()),
            brand: "Apple".to_string(),
            rating: 4.9,
            reviews: 567,
            in_stock: true,
            stock_count: 25,
            seller: techworld(),
            specifications: specs(&[
                ("Display", "13.6-inch Liquid Retina"),
                ("Chip", "Apple M3"),
                ("Memory", "8GB unified memory"),
            ]),
            tags: tags(&["laptop", "apple", "macbook", "m3"]),
            discount: Some(7),
            is_flash_sale: true,
            flash_sale_end_time: None,
            shipping_info: ShippingInfo {
                free_shipping: true,
                estimated_days: "2-4 days".to_string(),
                cost: None,
            },
            variants: Some(Variants {
                color: tags(&["Midnight", "Starlight", "Space Gray", "Silver"]),
                size: tags(&["256GB", "512GB", "1TB", "2TB"]),
            }),
            created_at: 1_705_053_600, // 2024-01-12T10:00:00Z
            updated_at: 1_705_678_200, // 2024-01-19T15:30:00Z
        },
        Product {
            id: ProductId::new(2),
            name: "Samsung Galaxy S24 Ultra".to_string(),
            description: "Next-generation Galaxy with AI-powered features and S Pen.".to_string(),
            price: 1199.0,
            original_price: Some(1299.0),
            currency: "USD".to_string(),
            images: vec!["images/galaxy-s24.jpeg".to_string()],
            category: "Electronics".to_string(),
            subcategory: Some("Smartphones".to_string()),
            brand: "Samsung".to_string(),
            rating: 4.7,
            reviews: 892,
            in_stock: true,
            stock_count: 30,
            seller: Seller {
                id: SellerId::new(2),
                name: "Samsung Official Store".to_string(),
                rating: 4.8,
                response_time: "within 1 hour".to_string(),
                location: "South Korea".to_string(),
                verified: true,
            },
            specifications: specs(&[
                ("Display", "6.8-inch Dynamic AMOLED 2X"),
                ("Processor", "Snapdragon 8 Gen 3"),
                ("Battery", "5000mAh"),
            ]),
            tags: tags(&["smartphone", "samsung", "android", "s-pen"]),
            discount: Some(8),
            is_flash_sale: true,
            flash_sale_end_time: None,
            shipping_info: ShippingInfo {
                free_shipping: true,
                estimated_days: "3-5 days".to_string(),
                cost: None,
            },
            variants: Some(Variants {
                color: tags(&["Titanium Gray", "Titanium Black", "Titanium Violet"]),
                size: tags(&["256GB", "512GB", "1TB"]),
            }),
            created_at: 1_704_880_800, // 2024-01-10T10:00:00Z
            updated_at: 1_705_591_800, // 2024-01-18T15:30:00Z
        },
        Product {
            id: ProductId::new(4),
            name: "Sony WH-1000XM5 Headphones".to_string(),
            description: "Industry-leading noise canceling with premium audio quality."
                .to_string(),
            price: 349.0,
            original_price: Some(399.0),
            currency: "USD".to_string(),
            images: vec!["images/sony-wh1000xm5.jpeg".to_string()],
            category: "Electronics".to_string(),
            subcategory: Some("Audio".to_string()),
            brand: "Sony".to_string(),
            rating: 4.6,
            reviews: 324,
            in_stock: true,
            stock_count: 75,
            seller: Seller {
                id: SellerId::new(3),
                name: "Audio Excellence".to_string(),
                rating: 4.7,
                response_time: "within 3 hours".to_string(),
                location: "Japan".to_string(),
                verified: true,
            },
            specifications: specs(&[
                ("Type", "Over-ear, Wireless"),
                ("Battery Life", "Up to 30 hours"),
                ("Connectivity", "Bluetooth 5.2, USB-C"),
            ]),
            tags: tags(&["headphones", "wireless", "noise-canceling", "sony"]),
            discount: Some(13),
            is_flash_sale: true,
            flash_sale_end_time: Some(FLASH_SALE_END),
            shipping_info: ShippingInfo {
                free_shipping: true,
                estimated_days: "5-7 days".to_string(),
                cost: None,
            },
            variants: Some(Variants {
                color: tags(&["Black", "Silver"]),
                size: Vec::new(),
            }),
            created_at: 1_704_708_000, // 2024-01-08T10:00:00Z
            updated_at: 1_705_419_000, // 2024-01-16T15:30:00Z
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_invariants() {
        let products = seed_products();
        assert!(!products.is_empty());

        for p in &products {
            assert!(p.price >= 0.0);
            assert!(p.rating >= 0.0 && p.rating <= 5.0);
            if let Some(original) = p.original_price {
                assert!(original >= p.price, "{} discount must be non-negative", p.name);
            }
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_is_newest_first() {
        let products = seed_products();
        for pair in products.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
