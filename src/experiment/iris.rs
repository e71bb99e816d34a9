use std::error::Error;
use super::Context;
use super::super::bucketizer::FeatureBuckets;
use super::super::{classifier, dataset, io, metrics, split};

#[derive(Debug, Clone, PartialEq)]
pub struct BucketResult {
    pub num_buckets: usize,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IrisReport {
    pub n_train: usize,
    pub n_test: usize,
    pub gaussian_accuracy: f64,
    /// Accuracy of always predicting the training majority class.
    pub majority_baseline: f64,
    pub bucketized: Vec<BucketResult>,
}

pub fn run(ctx: &Context) -> Result<(), Box<dyn Error>> {

    let report = evaluate(ctx)?;

    println!("Accuracy (GaussianNB): {}", report.gaussian_accuracy);
    for result in report.bucketized.iter() {
        println!("Accuracy (MultinomialNB, # buckets={}): {}", result.num_buckets, result.accuracy);
    }

    Ok(())
}

/// Binary task (`label == positive_label`) on continuous features: Gaussian NB
/// on the raw measurements, then Multinomial NB on bucketized features for each
/// configured bucket count.
pub fn evaluate(ctx: &Context) -> Result<IrisReport, Box<dyn Error>> {

    if let Some(url) = &ctx.data.url {
        io::download_if_not_present(url, &ctx.data.path)?;
    }

    let table = io::read_table(&ctx.data.path, &ctx.data.read)?;
    dataset::check_class_balance(&table.binary_labels(&ctx.data.positive_label))?;

    let split = split::train_test_split(table.n_rows(), ctx.split.test_size, ctx.split.seed)?;
    let train = table.select(&split.train);
    let test = table.select(&split.test);
    let y_train = train.binary_labels(&ctx.data.positive_label);
    let y_test = test.binary_labels(&ctx.data.positive_label);

    tracing::info!("{} train rows, {} test rows", train.n_rows(), test.n_rows());

    let y_gaussian = classifier::gaussian_nb(&train.rows(), &y_train, &test.rows())?;
    let gaussian_accuracy = metrics::accuracy(&y_test, &y_gaussian);

    let mut bucketized = Vec::with_capacity(ctx.bucketize.num_buckets.len());
    for &num_buckets in ctx.bucketize.num_buckets.iter() {

        /* boundaries come from the train split only and are reused for test */
        let buckets = FeatureBuckets::learn(&train, num_buckets)?;
        for name in train.feature_names().iter() {
            if let Some(boundaries) = buckets.boundaries(name) {
                tracing::debug!("{} buckets, {}: {}", num_buckets, name, serde_json::to_string(boundaries.thresholds())?);
            }
        }

        let train_ids = classifier::to_u32(&buckets.apply(&train)?);
        let test_ids = classifier::to_u32(&buckets.apply(&test)?);

        let y_pred = classifier::multinomial_nb(&train_ids, &y_train, &test_ids)?;
        bucketized.push(BucketResult { num_buckets: num_buckets, accuracy: metrics::accuracy(&y_test, &y_pred) });
    }

    Ok(IrisReport {
        n_train: train.n_rows(),
        n_test: test.n_rows(),
        gaussian_accuracy: gaussian_accuracy,
        majority_baseline: metrics::majority_baseline(&y_train, &y_test),
        bucketized: bucketized,
    })
}
