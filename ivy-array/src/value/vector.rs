use std::ops::{Index, IndexMut};

use crate::Value;

/// An owned, mutable, ordered sequence of values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector(Vec<Value>);

#[allow(clippy::same_name_method)]
impl Vector {
    pub fn new(elems: Vec<Value>) -> Self {
        Self(elems)
    }

    /// A vector of exact integers.
    pub fn from_ints<I: IntoIterator<Item = i64>>(ints: I) -> Self {
        ints.into_iter().map(Value::from).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Index<usize> for Vector {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl From<Vec<Value>> for Vector {
    fn from(value: Vec<Value>) -> Self {
        Self(value)
    }
}

impl FromIterator<Value> for Vector {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
