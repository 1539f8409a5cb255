use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minimum number of identical (description, amount) occurrences for a
/// transaction group to be considered recurring.
pub const RECURRING_MIN_OCCURRENCES: usize = 3;

/// An expense is unusual when its amount exceeds this multiple of its
/// category's mean expense amount.
pub const UNUSUAL_EXPENSE_MULTIPLIER: Decimal = dec!(3);

/// Number of future months projected by the cash-flow forecast.
pub const DEFAULT_FORECAST_HORIZON: u32 = 3;

/// Delimiter separating the source and target account names inside a
/// transfer transaction description (`<label> - <source> - <target>`).
pub const TRANSFER_DESCRIPTION_DELIMITER: &str = " - ";

/// Default category holding transfer transactions.
pub const DEFAULT_TRANSFER_CATEGORY: &str = "Transfers";

/// Default category holding investment transactions.
pub const DEFAULT_INVESTMENT_CATEGORY: &str = "Investments";

/// Default description marker identifying crypto-asset transactions inside
/// the investment category.
pub const DEFAULT_CRYPTO_MARKER: &str = "crypto";

/// Default category names treated as fixed (non-discretionary) expenses.
pub const DEFAULT_FIXED_EXPENSE_CATEGORIES: [&str; 3] = ["Rent", "Utilities", "Insurance"];

/// Number of leading expense categories surfaced by the report facade.
pub const DEFAULT_TOP_CATEGORY_LIMIT: usize = 3;

/// Decimal precision for display-oriented derived values (percentages,
/// averages). Monetary sums are never rounded.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
