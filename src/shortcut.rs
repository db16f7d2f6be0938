use crate::{vector::Vector, Result, VectorError, SHORTCUT_NAMES};

impl Vector {
    pub fn x(&self) -> Result<f64> {
        self.attr("x")
    }

    pub fn y(&self) -> Result<f64> {
        self.attr("y")
    }

    pub fn z(&self) -> Result<f64> {
        self.attr("z")
    }

    pub fn t(&self) -> Result<f64> {
        self.attr("t")
    }

    /// Reads a shortcut component by name.
    ///
    /// A shortcut beyond the vector's arity reports
    /// [`VectorError::AttributeNotFound`], the same as an unknown name.
    pub fn attr(&self, name: &str) -> Result<f64> {
        shortcut_position(name)
            .and_then(|position| self.components.get(position).copied())
            .ok_or_else(|| VectorError::AttributeNotFound(name.to_string()))
    }

    /// Rejects every attribute write; components are read-only.
    ///
    /// Any single lowercase letter, ASCII or not, is reserved.
    pub fn set_attr(&self, name: &str, _value: f64) -> Result<()> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if SHORTCUT_NAMES.contains(c) => Err(VectorError::ReadOnlyAttribute(name.to_string())),
            (Some(c), None) if c.is_lowercase() => Err(VectorError::ProtectedNamespace(name.to_string())),
            _ => Err(VectorError::AttributeNotFound(name.to_string())),
        }
    }
}

fn shortcut_position(name: &str) -> Option<usize> {
    if name.chars().count() != 1 {
        return None;
    }
    SHORTCUT_NAMES.find(name)
}
