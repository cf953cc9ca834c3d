/// Remainders below this many currency units are routed entirely to the buffer
pub const SMALL_REMAINDER_THRESHOLD: f64 = 20.0;

/// Share of the discretionary excess moved into savings by the soft-cap guard
pub const DISCRETIONARY_SKIM_RATIO: f64 = 0.6;

/// Groceries above this share of the grocery cap trigger the meal-planning tip
pub const GROCERY_TIP_THRESHOLD: f64 = 0.9;

/// Maximum number of advisory tips returned with a budget
pub const MAX_TIPS: usize = 3;

/// Note attached to every debt minimum line
pub const MINIMUM_PAYMENT_NOTE: &str = "Minimum payment";

/// Variable bucket names, in output order
pub const GROCERIES: &str = "Groceries";
pub const TRANSPORT: &str = "Transport";
pub const DISCRETIONARY: &str = "Discretionary";
pub const BUFFER: &str = "Buffer";

/// Weeks per year used to convert weekly contributions to monthly ones
pub const WEEKS_PER_YEAR: u32 = 52;

/// Longest projection horizon accepted, in years
pub const MAX_PROJECTION_YEARS: u32 = 60;

/// Decimal precision for displayed money values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
