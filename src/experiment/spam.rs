use std::error::Error;
use super::Context;
use super::super::vocab::Vocabulary;
use super::super::{classifier, dataset, io, metrics, split};

#[derive(Debug, Clone, PartialEq)]
pub struct SpamReport {
    pub label_counts: Vec<(String, usize)>,
    pub longest_per_label: Vec<(String, String)>,
    pub vocab_len: usize,
    pub svm_accuracy: f64,
    pub svm_f1: f64,
    pub nb_accuracy: f64,
    pub nb_f1: f64,
}

pub fn run(ctx: &Context) -> Result<(), Box<dyn Error>> {

    let report = evaluate(ctx)?;

    println!("\n===== Label counts =====\n");
    for (label, count) in report.label_counts.iter() {
        println!("{}: {}", label, count);
    }
    for (label, text) in report.longest_per_label.iter() {
        println!("\nLongest {}: {}", label, text);
    }
    println!("\nSVM Accuracy: {:.6}", report.svm_accuracy);
    println!("SVM F1: {:.6}", report.svm_f1);
    println!("NB Accuracy: {:.6}", report.nb_accuracy);
    println!("NB F1: {:.6}", report.nb_f1);

    Ok(())
}

/// Bag-of-words linear SVM and Multinomial NB over a (label, text) file.
/// The vocabulary is fit on the train split only; test texts are
/// transformed with it.
pub fn evaluate(ctx: &Context) -> Result<SpamReport, Box<dyn Error>> {

    if let Some(url) = &ctx.data.url {
        io::download_if_not_present(url, &ctx.data.path)?;
    }

    let table = io::read_text_table(&ctx.data.path, &ctx.data.read)?;
    dataset::check_class_balance(&table.binary_labels(&ctx.data.positive_label))?;

    let split = split::train_test_split(table.n_rows(), ctx.split.test_size, ctx.split.seed)?;
    let train = table.select(&split.train);
    let test = table.select(&split.test);
    let y_train = train.binary_labels(&ctx.data.positive_label);
    let y_test = test.binary_labels(&ctx.data.positive_label);

    let vocab = Vocabulary::fit(train.texts(), &ctx.vocab)?;
    tracing::info!("vocabulary of {} tokens from {} train texts", vocab.len(), train.n_rows());

    let train_feat = vocab.transform(train.texts());
    let test_feat = vocab.transform(test.texts());

    let y_svm = classifier::linear_svc(&train_feat, &y_train, &test_feat)?;
    let y_nb = classifier::multinomial_nb(&train_feat, &y_train, &test_feat)?;

    Ok(SpamReport {
        label_counts: table.label_counts(),
        longest_per_label: table.longest_text_per_label(),
        vocab_len: vocab.len(),
        svm_accuracy: metrics::accuracy(&y_test, &y_svm),
        svm_f1: metrics::f1(&y_test, &y_svm),
        nb_accuracy: metrics::accuracy(&y_test, &y_nb),
        nb_f1: metrics::f1(&y_test, &y_nb),
    })
}
