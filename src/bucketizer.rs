use std::collections::HashMap;
use thiserror::Error;
use super::dataset::Table;

#[derive(Error, Debug, PartialEq)]
pub enum BucketizeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no boundaries learned for feature '{0}'")]
    MissingFeature(String),
}

/// Thresholds separating adjacent buckets, learned once from a reference column.
///
/// There is no way to build or mutate a `Boundaries` from the column it is
/// applied to: `apply` only reads the thresholds, so evaluation data never
/// moves them.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    thresholds: Vec<f64>,
}

impl Boundaries {

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn num_buckets(&self) -> usize {
        self.thresholds.len() + 1
    }

    /* count leading thresholds the value meets or exceeds */
    pub fn bucket_of(&self, val: f64) -> usize {
        let mut i = 0;
        while i < self.thresholds.len() && val >= self.thresholds[i] {
            i += 1;
        }
        i
    }
}

/// Learns uniform-width boundaries over `[min, max]` of `column`.
///
/// On a constant column the width is zero and every threshold equals the
/// column value, so all of that column lands in the last bucket.
pub fn learn(column: &[f64], num_buckets: usize) -> Result<Boundaries, BucketizeError> {

    if num_buckets < 1 {
        return Err(BucketizeError::InvalidArgument("num_buckets must be >= 1".to_string()))
    }
    if column.is_empty() {
        return Err(BucketizeError::InvalidArgument("cannot learn boundaries from an empty column".to_string()))
    }
    if let Some(bad) = column.iter().find(|x| !x.is_finite()) {
        return Err(BucketizeError::InvalidArgument(format!("non-finite value {} in learning column", bad)))
    }

    let min_val = column.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let bucket_width = (max_val - min_val) / num_buckets as f64;

    let thresholds = (0..num_buckets - 1)
        .map(|i| min_val + (i + 1) as f64 * bucket_width)
        .collect();

    Ok(Boundaries { thresholds })
}

pub fn apply(column: &[f64], boundaries: &Boundaries) -> Vec<usize> {
    column.iter().map(|&x| boundaries.bucket_of(x)).collect()
}

pub fn learn_and_apply(column: &[f64], num_buckets: usize) -> Result<(Vec<usize>, Boundaries), BucketizeError> {
    let boundaries = learn(column, num_buckets)?;
    let ids = apply(column, &boundaries);
    Ok((ids, boundaries))
}

/// Boundaries for every feature of a reference table, keyed by feature name.
#[derive(Debug, Clone)]
pub struct FeatureBuckets {
    num_buckets: usize,
    by_feature: HashMap<String, Boundaries>,
}

impl FeatureBuckets {

    pub fn learn(reference: &Table, num_buckets: usize) -> Result<FeatureBuckets, BucketizeError> {

        let mut by_feature = HashMap::new();
        for (name, column) in reference.feature_names().iter().zip(reference.columns().iter()) {
            by_feature.insert(name.clone(), learn(column, num_buckets)?);
        }

        Ok(FeatureBuckets { num_buckets, by_feature })
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn boundaries(&self, feature: &str) -> Option<&Boundaries> {
        self.by_feature.get(feature)
    }

    /// Bucket ids for `table`, one row per sample, features in the table's order.
    pub fn apply(&self, table: &Table) -> Result<Vec<Vec<usize>>, BucketizeError> {

        let mut bucketized_cols = Vec::with_capacity(table.columns().len());
        for (name, column) in table.feature_names().iter().zip(table.columns().iter()) {
            let boundaries = self.by_feature.get(name)
                .ok_or_else(|| BucketizeError::MissingFeature(name.clone()))?;
            bucketized_cols.push(apply(column, boundaries));
        }

        let n_rows = table.n_rows();
        let rows = (0..n_rows)
            .map(|r| bucketized_cols.iter().map(|col| col[r]).collect())
            .collect();

        Ok(rows)
    }
}
