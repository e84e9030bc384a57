//! Form submissions.
//!
//! These forms reach no back end: the service validates them, logs them and
//! acknowledges them. Validation messages are the ones shown to the operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    #[schema(example = "Farine T65")]
    pub product: String,
    #[schema(example = 25)]
    pub quantity: u32,
}

/// Product order placed by a baker, or by a sales rep for a client.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderDto {
    #[validate(
        length(min = 1, message = "Select at least one product"),
        custom(function = "validate_order_lines")
    )]
    pub lines: Vec<OrderLine>,
    /// Client bakery, when the order is entered by a sales rep.
    #[validate(length(min = 1, max = 200, message = "Client name is invalid"))]
    pub client: Option<String>,
    #[validate(length(max = 1000, message = "Notes must not exceed 1000 characters"))]
    pub notes: Option<String>,
}

fn validate_order_lines(lines: &[OrderLine]) -> Result<(), ValidationError> {
    if lines.iter().any(|line| line.product.trim().is_empty()) {
        return Err(ValidationError::new("product")
            .with_message("Every line needs a product".into()));
    }
    if lines.iter().any(|line| line.quantity == 0) {
        return Err(ValidationError::new("quantity")
            .with_message("Quantities must be at least 1".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderAcknowledgement {
    pub reference: Uuid,
    #[schema(example = "boulanger")]
    pub placed_by_role: String,
    pub client: Option<String>,
    pub line_count: usize,
    pub total_quantity: u64,
    pub received_at: DateTime<Utc>,
}

impl OrderAcknowledgement {
    pub fn new(dto: &CreateOrderDto, placed_by_role: impl Into<String>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            placed_by_role: placed_by_role.into(),
            client: dto.client.clone(),
            line_count: dto.lines.len(),
            total_quantity: dto.lines.iter().map(|line| u64::from(line.quantity)).sum(),
            received_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
