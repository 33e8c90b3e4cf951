use std::fmt;

/// A free-form label such as a cuisine, a feature or an allergen.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Tag {
    fn from(from: &str) -> Self {
        Self { name: from.into() }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}
