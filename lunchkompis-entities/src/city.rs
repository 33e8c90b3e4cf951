use crate::id::Id;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct City {
    pub id: Id,
    pub name: String,
}

impl City {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn name_contains(&self, text: &str) -> bool {
        self.name.to_lowercase().contains(&text.to_lowercase())
    }
}
