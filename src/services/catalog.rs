use crate::models::Property;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the property dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate property id: {0}")]
    DuplicateId(String),
}

/// Immutable property dataset with an id index
///
/// Loaded once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
    index: HashMap<String, usize>,
}

impl PropertyCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(properties.len());

        for (pos, property) in properties.iter().enumerate() {
            if index.insert(property.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
        }

        Ok(Self { properties, index })
    }

    /// Parse a JSON array of properties
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(json)?;
        Self::new(properties)
    }

    /// Load the dataset file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::debug!("Loaded {} properties from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.index.get(id).map(|&pos| &self.properties[pos])
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PROPERTIES: &str = r#"[
        {"id":"a","ProjectName":"A","Developer":"D","PropertyType":"Villa","AssetType":"Residential",
         "SizeRange":"1","StartingPrice":"1","Micromarket":"M","Majormarket":"N","Status":"S",
         "PlantationType":"P","RERAID":"R","TotalUnits":"1","WebsiteLink":"W",
         "vibeDescriptors":[],"vibeSummary":""},
        {"id":"b","ProjectName":"B","Developer":"D","PropertyType":"Plot","AssetType":"Land",
         "SizeRange":"1","StartingPrice":"1","Micromarket":"M","Majormarket":"N","Status":"S",
         "PlantationType":"P","RERAID":"R","TotalUnits":"1","WebsiteLink":"W",
         "vibeDescriptors":["green"],"vibeSummary":"farmland"}
    ]"#;

    #[test]
    fn test_lookup_by_id() {
        let catalog = PropertyCatalog::from_json(TWO_PROPERTIES).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").unwrap().project_name, "B");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog = PropertyCatalog::from_json(TWO_PROPERTIES).unwrap();
        let mut properties = catalog.properties().to_vec();
        properties.push(properties[0].clone());

        let err = PropertyCatalog::new(properties).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PropertyCatalog::from_json("{\"id\": 1}"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = PropertyCatalog::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
