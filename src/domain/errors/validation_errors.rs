/// Validation errors for domain entities and value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // CapturedFrame validation errors
    EmptyCapturedFrame,
    InvalidFrameEncoding,

    // ProductType validation errors
    UnknownProductType(String),

    // Order validation errors
    MissingField {
        field: String,
    },
    InvalidQuantity {
        actual: u32,
    },
    UnknownProduct(String),

    // Product validation errors
    NegativePrice {
        value: String,
    },

    // Image generation validation errors
    MissingPromptAndSeed,

    // Video upload validation errors
    EmptyUpload,

    // Shopify query validation errors
    EmptyQuery,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyCapturedFrame => {
                write!(f, "Captured frame cannot be empty")
            }
            ValidationError::InvalidFrameEncoding => {
                write!(f, "Captured frame data URL is not valid base64")
            }
            ValidationError::UnknownProductType(value) => {
                write!(f, "Unknown product type: '{}'", value)
            }
            ValidationError::MissingField { field } => {
                write!(f, "Missing required field: '{}'", field)
            }
            ValidationError::InvalidQuantity { actual } => {
                write!(f, "Quantity must be greater than zero (got: {})", actual)
            }
            ValidationError::UnknownProduct(id) => {
                write!(f, "Unknown product: '{}'", id)
            }
            ValidationError::NegativePrice { value } => {
                write!(f, "Product price cannot be negative: {}", value)
            }
            ValidationError::MissingPromptAndSeed => {
                write!(f, "Either a prompt or seed image data is required")
            }
            ValidationError::EmptyUpload => {
                write!(f, "Video upload cannot be empty")
            }
            ValidationError::EmptyQuery => {
                write!(f, "GraphQL query cannot be empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
