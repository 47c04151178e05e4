use serde::{Deserialize, Serialize};

use dealership_core::ModelId;

/// A catalog entry customers pick before choosing specific units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: ModelId,
    pub name: String,
}

impl CarModel {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ModelId::new(id),
            name: name.into(),
        }
    }
}

/// Fixed list of car models, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    models: Vec<CarModel>,
}

impl Catalog {
    pub fn new(models: Vec<CarModel>) -> Self {
        Self { models }
    }

    /// The dealership's standard line-up.
    pub fn standard() -> Self {
        Self::new(vec![
            CarModel::new(1, "Sedan"),
            CarModel::new(2, "SUV"),
            CarModel::new(3, "Truck"),
            CarModel::new(4, "Electric"),
        ])
    }

    pub fn list_models(&self) -> &[CarModel] {
        &self.models
    }

    /// Look a model up by the raw id an operator typed.
    pub fn find_model(&self, id: i64) -> Option<&CarModel> {
        let id = ModelId::from_raw(id)?;
        self.models.iter().find(|model| model.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
