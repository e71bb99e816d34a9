use std::error::Error;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::naive_bayes::gaussian::{GaussianNB, GaussianNBParameters};
use smartcore::naive_bayes::multinomial::{MultinomialNB, MultinomialNBParameters};
use smartcore::svm::svc::{SVC, SVCParameters};
use smartcore::svm::Kernels;

/// Gaussian Naive Bayes on continuous features: fit on `train_x`, predict `test_x`.
pub fn gaussian_nb(train_x: &[Vec<f64>], train_y: &[u32], test_x: &[Vec<f64>]) -> Result<Vec<u32>, Box<dyn Error>> {

    let x = DenseMatrix::from_2d_vec(&train_x.to_vec())?;
    let y = train_y.to_vec();
    let model = GaussianNB::fit(&x, &y, GaussianNBParameters::default())?;

    let x_test = DenseMatrix::from_2d_vec(&test_x.to_vec())?;
    Ok(model.predict(&x_test)?)
}

/// Multinomial Naive Bayes on integer-coded features (bucket ids, token counts).
pub fn multinomial_nb(train_x: &[Vec<u32>], train_y: &[u32], test_x: &[Vec<u32>]) -> Result<Vec<u32>, Box<dyn Error>> {

    let x = DenseMatrix::from_2d_vec(&train_x.to_vec())?;
    let y = train_y.to_vec();
    let model = MultinomialNB::fit(&x, &y, MultinomialNBParameters::default())?;

    let x_test = DenseMatrix::from_2d_vec(&test_x.to_vec())?;
    Ok(model.predict(&x_test)?)
}

/// Linear-kernel SVM on count features, soft margin `C = 1`.
///
/// The SVM trains on -1/+1 targets; labels come in and go out as 0/1.
pub fn linear_svc(train_x: &[Vec<u32>], train_y: &[u32], test_x: &[Vec<u32>]) -> Result<Vec<u32>, Box<dyn Error>> {

    let x = DenseMatrix::from_2d_vec(&to_f64(train_x))?;
    let y: Vec<i32> = train_y.iter().map(|&y| if y == 1 { 1 } else { -1 }).collect();
    let params = SVCParameters::default().with_c(1.0).with_kernel(Kernels::linear());
    let model = SVC::fit(&x, &y, &params)?;

    let x_test = DenseMatrix::from_2d_vec(&to_f64(test_x))?;
    let y_hat: Vec<f64> = model.predict(&x_test)?;

    Ok(y_hat.iter().map(|&y| if y > 0.0 { 1 } else { 0 }).collect())
}

fn to_f64(rows: &[Vec<u32>]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| row.iter().map(|&v| v as f64).collect()).collect()
}

pub fn to_u32(ids: &[Vec<usize>]) -> Vec<Vec<u32>> {
    ids.iter().map(|row| row.iter().map(|&id| id as u32).collect()).collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn gaussian_separates_clusters() {
        let train_x = vec![
            vec![0.0, 0.1], vec![0.2, -0.1], vec![-0.1, 0.0], vec![0.1, 0.2],
            vec![5.0, 5.1], vec![5.2, 4.9], vec![4.9, 5.0], vec![5.1, 5.2],
        ];
        let train_y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        let pred = gaussian_nb(&train_x, &train_y, &[vec![0.05, 0.05], vec![5.05, 5.0]]).unwrap();
        assert_eq!(pred, vec![0, 1]);
    }

    #[test]
    fn multinomial_on_bucket_ids() {
        let train_x = vec![vec![0, 0], vec![0, 1], vec![0, 0], vec![2, 2], vec![2, 1], vec![2, 2]];
        let train_y = vec![0, 0, 0, 1, 1, 1];
        let pred = multinomial_nb(&train_x, &train_y, &[vec![3, 0], vec![0, 0]]).unwrap();
        assert_eq!(pred[0], 1);
    }

    #[test]
    fn linear_svc_on_token_counts() {
        let train_x = vec![
            vec![3, 0, 0], vec![2, 1, 0], vec![4, 0, 1], vec![3, 1, 0],
            vec![0, 0, 3], vec![0, 1, 2], vec![1, 0, 4], vec![0, 0, 3],
        ];
        let train_y = vec![1, 1, 1, 1, 0, 0, 0, 0];
        let pred = linear_svc(&train_x, &train_y, &[vec![5, 0, 0], vec![0, 0, 5]]).unwrap();
        assert_eq!(pred, vec![1, 0]);
    }

    #[test]
    fn ids_widen_to_u32() {
        assert_eq!(to_u32(&[vec![0, 3], vec![1, 2]]), vec![vec![0u32, 3], vec![1, 2]]);
    }
}
