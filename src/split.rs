use std::error::Error;
use rand::{Rng, SeedableRng, StdRng};

/// Row indices of a shuffled train/test partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffles `0..n_rows` with a seeded rng and puts the first
/// `ceil(n_rows * test_size)` indices in the test partition.
pub fn train_test_split(n_rows: usize, test_size: f64, seed: usize) -> Result<Split, Box<dyn Error>> {

    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(format!("test_size must be in (0, 1), got {}", test_size).into())
    }
    if n_rows < 2 {
        return Err(format!("cannot split {} rows into train and test", n_rows).into())
    }

    let n_test = ((n_rows as f64 * test_size).ceil() as usize).min(n_rows - 1);

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng: StdRng = SeedableRng::from_seed(&[seed][..]);
    rng.shuffle(indices.as_mut_slice());

    let train = indices.split_off(n_test);

    Ok(Split { train: train, test: indices })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn split_is_partition() {
        let split = train_test_split(150, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 30);
        assert_eq!(split.train.len(), 120);

        let mut all: Vec<usize> = split.train.iter().chain(split.test.iter()).cloned().collect();
        all.sort();
        assert_eq!(all, (0..150).collect::<Vec<usize>>());
    }

    #[test]
    fn split_is_seeded() {
        assert_eq!(train_test_split(50, 0.3, 7).unwrap(), train_test_split(50, 0.3, 7).unwrap());
        assert_ne!(train_test_split(50, 0.3, 7).unwrap(), train_test_split(50, 0.3, 8).unwrap());
    }

    #[test]
    fn split_rounds_test_up() {
        let split = train_test_split(11, 0.2, 1).unwrap();
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);
        /* never leaves the train side empty */
        let split = train_test_split(2, 0.9, 1).unwrap();
        assert_eq!((split.train.len(), split.test.len()), (1, 1));
    }

    #[test]
    fn split_rejects_bad_input() {
        assert!(train_test_split(10, 0.0, 1).is_err());
        assert!(train_test_split(10, 1.0, 1).is_err());
        assert!(train_test_split(10, f64::NAN, 1).is_err());
        assert!(train_test_split(1, 0.5, 1).is_err());
    }
}
