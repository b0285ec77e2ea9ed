use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleItem {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl SampleItem {
    fn new(id: u32, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SampleDataResponse {
    pub data: Vec<SampleItem>,
    pub total: usize,
    pub message: String,
}

/// The fixed dataset served by `GET /api/data`, in id order.
pub fn sample_items() -> Vec<SampleItem> {
    vec![
        SampleItem::new(1, "Item 1", "First sample item"),
        SampleItem::new(2, "Item 2", "Second sample item"),
        SampleItem::new(3, "Item 3", "Third sample item"),
    ]
}
