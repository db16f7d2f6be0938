use crate::{utils::abbreviate_components, Result, VectorError, REPR_MAX_COMPONENTS};
use log::debug;
use ndarray::{iter::Iter, Array1, Ix1};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An n-dimensional vector of `f64` components.
///
/// The arity is fixed at construction and the components are never mutated
/// afterwards; slicing and decoding always produce a new instance.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    pub(crate) components: Array1<f64>,
}

impl Vector {
    /// Builds a vector from any sequence of values that widen losslessly to `f64`.
    ///
    /// ```
    /// use ndvector::Vector;
    ///
    /// let v = Vector::new([3, 4]);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn new<I, T>(components: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self {
            components: components.into_iter().map(Into::<f64>::into).collect(),
        }
    }

    /// Builds a vector from 64-bit integers, which `new` cannot accept because
    /// they do not widen losslessly. Magnitudes above 2^53 round to the
    /// nearest `f64`.
    ///
    /// ```
    /// use ndvector::Vector;
    ///
    /// assert_eq!(Vector::from_i64s(vec![1i64, -2]), [1.0, -2.0]);
    /// ```
    pub fn from_i64s<I>(components: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        components.into_iter().map(|c| c as f64).collect()
    }

    /// Builds a vector from dynamically typed values.
    ///
    /// Numbers are coerced to `f64` and booleans count as `1.0`/`0.0`. Any other
    /// value fails with [`VectorError::InvalidInput`].
    pub fn try_from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let components = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| match value {
                Value::Number(ref n) => n.as_f64().ok_or_else(|| {
                    VectorError::InvalidInput(format!("number {} at position {} is not representable as f64", n, position))
                }),
                Value::Bool(flag) => Ok(if flag { 1.0 } else { 0.0 }),
                other => {
                    debug!("rejecting non-numeric component {} at position {}", other, position);
                    Err(VectorError::InvalidInput(format!(
                        "must be real number, not {} (position {})",
                        json_type_name(&other),
                        position
                    )))
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self::from(components))
    }

    /// Parses a JSON array such as `[1, 2.5, 3]` into a vector.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| VectorError::InvalidInput(format!("Failed to parse vector JSON: {}", e)))?;

        match value {
            Value::Array(values) => Self::try_from_values(values),
            other => Err(VectorError::InvalidInput(format!(
                "expected a JSON array, found {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.components
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    /// Iterates over the components in storage order. Every call starts over.
    pub fn iter(&self) -> std::iter::Copied<Iter<'_, f64, Ix1>> {
        self.components.iter().copied()
    }

    /// Euclidean norm; `0.0` for the empty vector.
    pub fn magnitude(&self) -> f64 {
        self.components.dot(&self.components).sqrt()
    }

    /// False only when the magnitude is exactly zero.
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// XOR-fold of the component hashes, starting from zero.
    pub fn hash_value(&self) -> u64 {
        self.iter().map(component_hash).fold(0, |acc, h| acc ^ h)
    }

    fn eq_components(&self, other: &[f64]) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == *b)
    }
}

// -0.0 and 0.0 compare equal, so they must hash equal too.
fn component_hash(value: f64) -> u64 {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    let mut hasher = DefaultHasher::new();
    bits.hash(&mut hasher);
    hasher.finish()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.eq_components(other)
    }
}

impl PartialEq<&[f64]> for Vector {
    fn eq(&self, other: &&[f64]) -> bool {
        self.eq_components(other)
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.eq_components(other)
    }
}

impl PartialEq<Vec<f64>> for Vector {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.eq_components(other)
    }
}

impl PartialEq<Vector> for [f64] {
    fn eq(&self, other: &Vector) -> bool {
        other.eq_components(self)
    }
}

impl<const N: usize> PartialEq<Vector> for [f64; N] {
    fn eq(&self, other: &Vector) -> bool {
        other.eq_components(self)
    }
}

impl PartialEq<Vector> for Vec<f64> {
    fn eq(&self, other: &Vector) -> bool {
        other.eq_components(self)
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({})", abbreviate_components(self.iter(), REPR_MAX_COMPONENTS))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|x| format!("{:?}", x)).collect();
        match rendered.as_slice() {
            [single] => write!(f, "({},)", single),
            _ => write!(f, "({})", rendered.join(", ")),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self {
            components: Array1::from_vec(components),
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self::from(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::from(components.to_vec())
    }
}

impl From<Array1<f64>> for Vector {
    fn from(components: Array1<f64>) -> Self {
        Self { components }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.to_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<Iter<'a, f64, Ix1>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}
