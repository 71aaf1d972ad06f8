use crate::domain::{Condition, ListingField};

pub const USER_PROMPT: &str = "Please analyze this furniture image and provide listing details.";

pub const TITLE_MAX_CHARS: usize = 150;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;

/// System instruction describing the five fields and the exact reply layout.
pub fn system_prompt() -> String {
    let conditions = Condition::ALL
        .iter()
        .map(Condition::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let layout = ListingField::ALL
        .iter()
        .map(|f| format!("{}: [{}]", f.as_str(), f.as_str().to_lowercase()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a furniture listing expert. Analyze the furniture image and provide the following details in a structured format:
1. Title (up to {TITLE_MAX_CHARS} characters)
2. Suggested price in USD (whole number)
3. Condition (choose from: {conditions})
4. Detailed description: Make sure to include the dimensions of the furniture. Also add that I can deliver for a fee (up to {DESCRIPTION_MAX_CHARS} characters)
5. Category (use format: Furniture/[Subcategory])

Return the data in this exact format:
{layout}"
    )
}
