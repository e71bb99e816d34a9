use smartcore::metrics;

pub fn accuracy(y_true: &[u32], y_pred: &[u32]) -> f64 {
    metrics::accuracy(&y_true.to_vec(), &y_pred.to_vec())
}

/// F1 of the positive class (label 1). 0.0 when there are no true positives,
/// where precision or recall would be undefined.
pub fn f1(y_true: &[u32], y_pred: &[u32]) -> f64 {
    let true_positives = y_true.iter().zip(y_pred.iter()).filter(|&(&t, &p)| t == 1 && p == 1).count();
    if true_positives == 0 {
        return 0.0
    }
    let y_true: Vec<f64> = y_true.iter().map(|&y| y as f64).collect();
    let y_pred: Vec<f64> = y_pred.iter().map(|&y| y as f64).collect();
    metrics::f1(&y_true, &y_pred, 1.0)
}

/// Share of `y_true` equal to the label predicted for everything by a
/// model that only knows the class prior of `y_train`.
pub fn majority_baseline(y_train: &[u32], y_true: &[u32]) -> f64 {
    let positives = y_train.iter().filter(|&&y| y == 1).count();
    let majority = if positives * 2 > y_train.len() { 1 } else { 0 };
    y_true.iter().filter(|&&y| y == majority).count() as f64 / y_true.len() as f64
}
