use itertools::Itertools;
use ivy_error::{IvyResult, ivy_bail};

use crate::Vector;

/// A dense array together with its shape.
///
/// The product of the shape always equals the number of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    shape: Vec<usize>,
    data: Vector,
}

impl Matrix {
    pub fn try_new(shape: Vec<usize>, data: Vector) -> IvyResult<Self> {
        let size = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim));
        if size != Some(data.len()) {
            ivy_bail!(
                "shape [{}] does not match {} elements",
                shape.iter().join(", "),
                data.len()
            );
        }
        Ok(Self { shape, data })
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn data(&self) -> &Vector {
        &self.data
    }

    pub fn into_parts(self) -> (Vec<usize>, Vector) {
        (self.shape, self.data)
    }
}
