use ndarray::Array1;

pub(crate) fn average_vectors<'a, I>(vectors: I, dim: usize) -> Array1<f32>
where
    I: IntoIterator<Item = &'a Array1<f32>>,
{
    let mut sum = Array1::zeros(dim);
    let mut count = 0usize;
    for vector in vectors {
        sum += vector;
        count += 1;
    }
    if count == 0 {
        return sum;
    }
    sum / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_average_of_duplicates() {
        let a = array![1.0_f32, 2.0, 3.0];
        let b = array![3.0_f32, 4.0, 5.0];
        let mean = average_vectors([&a, &b], 3);
        assert_eq!(mean, array![2.0_f32, 3.0, 4.0]);
    }

    #[test]
    fn test_single_vector_is_identity() {
        let a = array![0.5_f32, -0.5];
        assert_eq!(average_vectors([&a], 2), a);
    }

    #[test]
    fn test_empty_input_yields_zeros() {
        let mean = average_vectors(std::iter::empty::<&Array1<f32>>(), 4);
        assert_eq!(mean, Array1::<f32>::zeros(4));
    }

    #[test]
    fn test_order_independence() {
        let a = array![0.1_f32, 0.7, 1.3];
        let b = array![2.9_f32, -0.3, 0.0];
        let c = array![1.0_f32, 1.0, 1.0];
        let forward = average_vectors([&a, &b, &c], 3);
        let reversed = average_vectors([&c, &b, &a], 3);
        for (x, y) in forward.iter().zip(reversed.iter()) {
            assert!((x - y).abs() < 1e-6);
        }
    }
}
