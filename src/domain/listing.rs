use std::collections::HashMap;

/// The five labels a listing reply is made of, in CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    Title,
    Price,
    Condition,
    Description,
    Category,
}

impl ListingField {
    pub const ALL: [ListingField; 5] = [
        ListingField::Title,
        ListingField::Price,
        ListingField::Condition,
        ListingField::Description,
        ListingField::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingField::Title => "TITLE",
            ListingField::Price => "PRICE",
            ListingField::Condition => "CONDITION",
            ListingField::Description => "DESCRIPTION",
            ListingField::Category => "CATEGORY",
        }
    }

    /// Exact match of a trimmed, upper-cased label against the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_uppercase();
        Self::ALL.into_iter().find(|f| f.as_str() == label)
    }
}

/// Conditions the model is asked to pick from. Replies are not checked against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    UsedLikeNew,
    UsedGood,
    UsedFair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::UsedLikeNew,
        Condition::UsedGood,
        Condition::UsedFair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::UsedLikeNew => "Used - Like New",
            Condition::UsedGood => "Used - Good",
            Condition::UsedFair => "Used - Fair",
        }
    }
}

/// Structured result for one image. Fields the model never mentioned stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    fields: HashMap<ListingField, String>,
}

impl ListingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ListingField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Starts (or restarts) a field with its header value.
    pub fn set(&mut self, field: ListingField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Appends a continuation line, space-separated.
    pub fn append(&mut self, field: ListingField, text: &str) {
        let value = self.fields.entry(field).or_default();
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(text);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Values in CSV column order; missing fields render as empty cells.
    pub fn to_row(&self) -> [&str; 5] {
        ListingField::ALL.map(|f| self.get(f).unwrap_or(""))
    }
}
