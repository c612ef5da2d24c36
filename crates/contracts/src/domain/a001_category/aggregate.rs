use serde::{Deserialize, Serialize};

// ============================================================================
// Parent reference
// ============================================================================

/// Ссылка на родительскую категорию.
///
/// The backend sends either a populated `{ "_id", "name" }` object or a bare
/// id string; both decode into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ParentRepr")]
pub struct ParentRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParentRepr {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl From<ParentRepr> for ParentRef {
    fn from(repr: ParentRepr) -> Self {
        match repr {
            ParentRepr::Populated { id, name } => Self { id, name },
            ParentRepr::Id(id) => Self { id, name: None },
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товаров (read model, owned by the REST backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Category {
    /// Display name of the parent, or the main-category marker.
    pub fn parent_display_name(&self) -> String {
        self.parent
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("None (Main Category)")
            .to_string()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent
            .as_ref()
            .map(|p| p.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_response::ApiResponse;

    #[test]
    fn test_decode_main_category() {
        let json = r#"{
            "data": {
                "_id": "abc123",
                "name": "Electronics",
                "is_active": true,
                "parent": null,
                "images": [],
                "created_at": "2024-03-15T14:02:26.123Z",
                "updated_at": "2024-03-16T09:00:00.000Z"
            }
        }"#;
        let resp: ApiResponse<Category> = serde_json::from_str(json).unwrap();
        let category = resp.data;
        assert_eq!(category.id, "abc123");
        assert_eq!(category.name, "Electronics");
        assert!(category.is_active);
        assert!(category.parent.is_none());
        assert_eq!(category.parent_display_name(), "None (Main Category)");
        assert_eq!(category.parent_id(), None);
        assert!(!category.has_description());
    }

    #[test]
    fn test_decode_populated_parent() {
        let json = r#"{
            "_id": "c2",
            "name": "Phones",
            "description": "Smartphones and accessories",
            "images": ["https://cdn.example.com/a.jpg"],
            "parent": { "_id": "c1", "name": "Electronics" },
            "is_active": false
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.parent_display_name(), "Electronics");
        assert_eq!(category.parent_id(), Some("c1"));
        assert_eq!(category.images.len(), 1);
        assert!(category.has_description());
        assert!(category.created_at.is_none());
    }

    #[test]
    fn test_decode_bare_parent_id() {
        let json = r#"{ "_id": "c3", "name": "Cases", "parent": "c2", "is_active": true }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.parent_id(), Some("c2"));
        // unpopulated parent has no name to show
        assert_eq!(category.parent_display_name(), "None (Main Category)");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let category: Category = serde_json::from_str(r#"{ "_id": "x", "name": "X" }"#).unwrap();
        assert!(category.images.is_empty());
        assert!(!category.is_active);
        assert!(!category.is_deleted);
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let json = r#"{ "_id": "x", "name": "X", "description": "" }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.description.as_deref(), Some(""));
        assert!(!category.has_description());
    }
}
