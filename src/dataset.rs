use std::collections::HashMap;
use std::error::Error;
use itertools::Itertools;

/// Numeric feature columns plus a label column, stored column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    feature_names: Vec<String>,
    columns: Vec<Vec<f64>>,
    labels: Vec<String>,
}

impl Table {

    pub fn new(feature_names: Vec<String>, columns: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Table, Box<dyn Error>> {

        if feature_names.len() != columns.len() {
            return Err(format!("{} feature names for {} columns", feature_names.len(), columns.len()).into())
        }
        if let Some((name, col)) = feature_names.iter().zip(columns.iter()).find(|(_, col)| col.len() != labels.len()) {
            return Err(format!("column '{}' has {} values, expected {}", name, col.len(), labels.len()).into())
        }

        Ok(Table { feature_names, columns, labels })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.feature_names.iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /* row-major copy of the features, as the classifiers expect */
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows())
            .map(|r| self.columns.iter().map(|col| col[r]).collect())
            .collect()
    }

    /// New table holding the rows at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Table {
        Table {
            feature_names: self.feature_names.clone(),
            columns: self.columns.iter()
                .map(|col| indices.iter().map(|&i| col[i]).collect())
                .collect(),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }

    pub fn binary_labels(&self, positive: &str) -> Vec<u32> {
        binary_labels(&self.labels, positive)
    }

    pub fn label_counts(&self) -> Vec<(String, usize)> {
        label_counts(&self.labels)
    }
}

/// A text column plus a label column.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTable {
    texts: Vec<String>,
    labels: Vec<String>,
}

impl TextTable {

    pub fn new(texts: Vec<String>, labels: Vec<String>) -> Result<TextTable, Box<dyn Error>> {
        if texts.len() != labels.len() {
            return Err(format!("{} texts for {} labels", texts.len(), labels.len()).into())
        }
        Ok(TextTable { texts, labels })
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    pub fn select(&self, indices: &[usize]) -> TextTable {
        TextTable {
            texts: indices.iter().map(|&i| self.texts[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }

    pub fn binary_labels(&self, positive: &str) -> Vec<u32> {
        binary_labels(&self.labels, positive)
    }

    pub fn label_counts(&self) -> Vec<(String, usize)> {
        label_counts(&self.labels)
    }

    /// Longest text (in chars) for each label; the first one wins a tie.
    pub fn longest_text_per_label(&self) -> Vec<(String, String)> {

        let mut longest: HashMap<&str, &str> = HashMap::new();
        for (label, text) in self.labels.iter().zip(self.texts.iter()) {
            let entry = longest.entry(label.as_str()).or_insert(text.as_str());
            if text.chars().count() > entry.chars().count() {
                *entry = text.as_str();
            }
        }

        longest.into_iter()
            .map(|(label, text)| (label.to_string(), text.to_string()))
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect()
    }
}

pub fn binary_labels(labels: &[String], positive: &str) -> Vec<u32> {
    labels.iter().map(|l| if l == positive { 1 } else { 0 }).collect()
}

/// Occurrences of each label, most common first (ties alphabetical).
pub fn label_counts(labels: &[String]) -> Vec<(String, usize)> {

    let mut counter: HashMap<&str, usize> = HashMap::new();
    for label in labels.iter() {
        *counter.entry(label.as_str()).or_insert(0) += 1;
    }

    counter.into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Errors unless both classes occur in `labels`.
pub fn check_class_balance(labels: &[u32]) -> Result<f64, Box<dyn Error>> {

    if labels.is_empty() {
        return Err("no labels".into())
    }
    let rate = labels.iter().filter(|&&y| y == 1).count() as f64 / labels.len() as f64;
    if rate <= 0.0 || rate >= 1.0 {
        return Err(format!("expected points in each class, positive rate is {}", rate).into())
    }

    Ok(rate)
}
