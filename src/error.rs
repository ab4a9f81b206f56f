use thiserror::Error;

/// Errors raised when free text cannot be turned into a display name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Input '{raw}' contains no letters after cleanup")]
    Empty { raw: String },
}

/// An entry type string that is neither `ingredient` nor `recipe`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown entry type '{0}'")]
pub struct UnknownKindError(pub String);

/// Errors that reject a candidate entry before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entry '{name}' has an unknown type '{kind}', expected 'ingredient' or 'recipe'")]
    InvalidKind { name: String, kind: String },

    #[error("An entry named '{0}' already exists")]
    DuplicateName(String),

    #[error("Recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequirement { recipe: String, item: String },

    #[error("Ingredient '{name}' has a negative cook time ({cook_time})")]
    NegativeCookTime { name: String, cook_time: i64 },

    #[error("Ingredient '{0}' is missing a cook time")]
    MissingCookTime(String),

    #[error("Recipe '{recipe}' requires {quantity} of '{item}', quantities must be positive")]
    NonPositiveQuantity {
        recipe: String,
        item: String,
        quantity: i64,
    },
}

/// Errors that can occur while flattening a recipe's requirement tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Required item '{0}' does not exist in the cookbook")]
    UnknownIngredient(String),

    #[error("Recipe '{0}' requires itself, directly or through another recipe")]
    CyclicRecipe(String),

    #[error("Quantity of '{0}' overflowed while expanding nested recipes")]
    QuantityOverflow(String),

    #[error("Recipe '{name}' is nested deeper than the limit of {limit}")]
    DepthExceeded { name: String, limit: usize },
}

/// Errors returned when building the summary of a recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("No entry named '{0}' exists")]
    NotFound(String),

    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Resolved item '{0}' is not an ingredient in the cookbook")]
    MissingIngredient(String),

    #[error("Total cook time overflowed while adding '{0}'")]
    CookTimeOverflow(String),
}

impl NormalizationError {
    /// Stable identifier a transport can map to a response.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty_name",
        }
    }
}

impl ValidationError {
    /// Stable identifier a transport can map to a response.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKind { .. } => "invalid_kind",
            Self::DuplicateName(_) => "duplicate_name",
            Self::DuplicateRequirement { .. } => "duplicate_requirement",
            Self::NegativeCookTime { .. } => "negative_cook_time",
            Self::MissingCookTime(_) => "missing_cook_time",
            Self::NonPositiveQuantity { .. } => "non_positive_quantity",
        }
    }
}

impl ResolutionError {
    /// Stable identifier a transport can map to a response.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownIngredient(_) => "unknown_ingredient",
            Self::CyclicRecipe(_) => "cyclic_recipe",
            Self::QuantityOverflow(_) => "quantity_overflow",
            Self::DepthExceeded { .. } => "depth_exceeded",
        }
    }
}

impl SummaryError {
    /// Stable identifier a transport can map to a response.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::NotARecipe(_) => "not_a_recipe",
            Self::Resolution(inner) => inner.kind(),
            Self::MissingIngredient(_) => "missing_ingredient",
            Self::CookTimeOverflow(_) => "cook_time_overflow",
        }
    }
}
