use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User model (maps to users table)
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// User profile as returned to the caller. Never includes the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Cart model (maps to carts table, one per user)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cart {
    pub cart_id: Uuid,
    pub user_id: Uuid,
}

/// Cart item model (maps to cart_items table)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartItem {
    pub cart_item_id: Uuid,
    pub cart_id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub size: String,
    pub quantity: i32,
    /// Unit price in minor currency units
    pub unit_price: i64,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// Rating model (maps to ratings table)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub rating_id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Review model (maps to reviews table)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

/// Stored payment information (maps to payment_information table)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentInformation {
    pub payment_id: Uuid,
    pub user_id: Uuid,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub created_at: DateTime<Utc>,
}

/// Cart view returned by the cart endpoint: the cart row plus its items and
/// totals computed from them.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub cart_id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub total_price: i64,
}

impl CartView {
    pub fn new(cart: Cart, items: Vec<CartItem>) -> Self {
        let total_items = items.iter().map(|i| i64::from(i.quantity)).sum();
        let total_price = items.iter().map(CartItem::line_total).sum();
        Self {
            cart_id: cart.cart_id,
            user_id: cart.user_id,
            items,
            total_items,
            total_price,
        }
    }
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub status: bool,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: true,
        }
    }
}

/// Session token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

// Request DTOs

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: Uuid,
    pub size: String,
    pub quantity: i32,
    pub unit_price: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub product_id: Uuid,
    pub rating: f64,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub product_id: Uuid,
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiration_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, unit_price: i64) -> CartItem {
        CartItem {
            cart_item_id: Uuid::new_v4(),
            cart_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            size: "M".to_string(),
            quantity,
            unit_price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_view_totals() {
        let cart = Cart {
            cart_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        };
        let view = CartView::new(cart, vec![item(2, 1500), item(1, 4999)]);

        assert_eq!(view.total_items, 3);
        assert_eq!(view.total_price, 2 * 1500 + 4999);
    }

    #[test]
    fn test_empty_cart_view_totals() {
        let cart = Cart {
            cart_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        };
        let view = CartView::new(cart, vec![]);

        assert_eq!(view.total_items, 0);
        assert_eq!(view.total_price, 0);
    }
}
