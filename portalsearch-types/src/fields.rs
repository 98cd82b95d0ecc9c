//! The fixed field dictionary advertised in layer metadata.

use serde::Serialize;

/// Attribute type of a dictionary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    String,
    Date,
    Integer,
    Double,
}

/// One attribute field: name, type and optional display alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<&'static str>,
}

impl FieldDefinition {
    const fn aliased(name: &'static str, field_type: FieldType, alias: &'static str) -> Self {
        Self {
            name,
            field_type,
            alias: Some(alias),
        }
    }

    const fn plain(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            alias: None,
        }
    }

    const fn string(name: &'static str) -> Self {
        Self::aliased(name, FieldType::String, name)
    }
}

/// Every known portal item attribute plus the derived `itemIdHash`.
pub static FIELD_DICTIONARY: &[FieldDefinition] = &[
    FieldDefinition::string("id"),
    FieldDefinition::string("owner"),
    FieldDefinition::aliased("created", FieldType::Date, "created"),
    FieldDefinition::aliased("modified", FieldType::Date, "modified"),
    FieldDefinition::string("guid"),
    FieldDefinition::string("name"),
    FieldDefinition::string("title"),
    FieldDefinition::string("type"),
    FieldDefinition::aliased("typekeywords", FieldType::String, "typeKeywords"),
    FieldDefinition::string("description"),
    FieldDefinition::string("tags"),
    FieldDefinition::string("snippet"),
    FieldDefinition::string("thumbnail"),
    FieldDefinition::string("documentation"),
    FieldDefinition::string("extent"),
    FieldDefinition::string("categories"),
    FieldDefinition::string("spatialReference"),
    FieldDefinition::string("accessInformation"),
    FieldDefinition::string("licenseInfo"),
    FieldDefinition::string("culture"),
    FieldDefinition::string("properties"),
    FieldDefinition::string("url"),
    FieldDefinition::string("proxyFilter"),
    FieldDefinition::string("access"),
    FieldDefinition::aliased("size", FieldType::Integer, "size"),
    FieldDefinition::string("appCategories"),
    FieldDefinition::string("industries"),
    FieldDefinition::string("languages"),
    FieldDefinition::string("largeThumbnail"),
    FieldDefinition::string("banner"),
    FieldDefinition::string("screenshots"),
    FieldDefinition::string("listed"),
    FieldDefinition::aliased("numComments", FieldType::Integer, "numComments"),
    FieldDefinition::aliased("numRatings", FieldType::Integer, "numRatings"),
    FieldDefinition::aliased("avgRating", FieldType::Double, "avgRating"),
    FieldDefinition::aliased("numViews", FieldType::Integer, "numViews"),
    FieldDefinition::plain("scoreCompleteness", FieldType::Integer),
    FieldDefinition::plain("groupDesignations", FieldType::String),
    FieldDefinition::plain("itemIdHash", FieldType::Integer),
];

