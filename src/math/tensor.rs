use crate::error::{Error, Result};

/// N-dimensional `f32` array stored flat in row-major order.
///
/// Invariant: `data.len() == shape.iter().product()` and `shape` is non-empty
/// with every dimension at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl Tensor {
    /// Allocates a tensor of the given shape.
    ///
    /// The contents are unspecified; call [`Tensor::zero`] before relying on
    /// them.
    pub fn new(shape: &[usize]) -> Result<Tensor> {
        let size = element_count(shape)?;
        Ok(Tensor {
            shape: shape.to_vec(),
            data: vec![0.0; size],
        })
    }

    /// Wraps existing values; `data` must hold exactly `product(shape)` elements.
    pub fn from_data(shape: &[usize], data: Vec<f32>) -> Result<Tensor> {
        let size = element_count(shape)?;
        if data.len() != size {
            return Err(Error::Shape(format!(
                "shape {:?} needs {} elements, got {}",
                shape, size, data.len()
            )));
        }
        Ok(Tensor { shape: shape.to_vec(), data })
    }

    pub fn zero(&mut self) {
        self.fill(0.0);
    }

    pub fn fill(&mut self, value: f32) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    pub fn map<F>(&self, functor: F) -> Tensor
    where
        F: Fn(f32) -> f32,
    {
        Tensor {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a valid tensor; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Product of `shape`, rejecting empty shapes, zero dimensions and overflow.
fn element_count(shape: &[usize]) -> Result<usize> {
    if shape.is_empty() {
        return Err(Error::Allocation("tensor shape must have at least one dimension".into()));
    }
    if let Some(pos) = shape.iter().position(|&d| d == 0) {
        return Err(Error::Allocation(format!(
            "tensor dimension {} is zero in shape {:?}",
            pos, shape
        )));
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)).ok_or_else(|| {
        Error::Allocation(format!("tensor shape {:?} overflows the element count", shape))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_product_of_shape() {
        let t = Tensor::new(&[2, 3, 4]).unwrap();
        assert_eq!(t.shape(), &[2, 3, 4]);
        assert_eq!(t.dims(), 3);
        assert_eq!(t.len(), 24);
    }

    #[test]
    fn new_rejects_empty_shape() {
        assert!(matches!(Tensor::new(&[]), Err(Error::Allocation(_))));
    }

    #[test]
    fn new_rejects_zero_dimension() {
        assert!(matches!(Tensor::new(&[3, 0]), Err(Error::Allocation(_))));
    }

    #[test]
    fn new_rejects_overflowing_shape() {
        assert!(matches!(Tensor::new(&[usize::MAX, 2]), Err(Error::Allocation(_))));
    }

    #[test]
    fn zero_clears_data_and_keeps_shape() {
        let mut t = Tensor::from_data(&[2, 2], vec![1.0, -2.0, 3.5, 4.0]).unwrap();
        t.zero();
        assert_eq!(t.data(), &[0.0; 4]);
        assert_eq!(t.shape(), &[2, 2]);
    }

    #[test]
    fn from_data_checks_length() {
        let err = Tensor::from_data(&[2, 2], vec![1.0; 3]).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn map_applies_elementwise() {
        let t = Tensor::from_data(&[3], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(t.map(|x| x * 2.0).data(), &[2.0, 4.0, 6.0]);
    }
}
