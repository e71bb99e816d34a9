use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use regex::Regex;
use itertools::Itertools;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

#[derive(Debug, Clone)]
pub struct VocabOptions {
    pub lowercase: bool,
    pub max_features: Option<usize>,
}

impl Default for VocabOptions {
    fn default() -> Self {
        VocabOptions { lowercase: true, max_features: None }
    }
}

/// Token-to-column mapping learned from training texts only.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    lowercase: bool,
    token_re: Regex,
}

fn tokenize<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    re.find_iter(text).map(|m| m.as_str())
}

impl Vocabulary {

    pub fn fit(texts: &[String], options: &VocabOptions) -> Result<Vocabulary, Box<dyn Error>> {

        let token_re = Regex::new(TOKEN_PATTERN)?;

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for text in texts.iter() {
            let text = if options.lowercase { text.to_lowercase() } else { text.clone() };
            for token in tokenize(&token_re, &text) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return Err("empty vocabulary: training texts contain no tokens".into())
        }

        let kept: Vec<String> = match options.max_features {
            Some(max) => counts.into_iter()
                .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
                .take(max)
                .map(|(token, _)| token)
                .sorted()
                .collect(),
            None => counts.into_iter().map(|(token, _)| token).collect(),
        };

        let index = kept.into_iter().enumerate().map(|(i, token)| (token, i)).collect();

        Ok(Vocabulary { index, lowercase: options.lowercase, token_re })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).cloned()
    }

    /// Token counts per text over the learned vocabulary. Unseen tokens are dropped.
    pub fn transform(&self, texts: &[String]) -> Vec<Vec<u32>> {

        texts.iter().map(|text| {
            let text = if self.lowercase { text.to_lowercase() } else { text.clone() };
            let mut row = vec![0u32; self.index.len()];
            for token in tokenize(&self.token_re, &text) {
                if let Some(&i) = self.index.get(token) {
                    row[i] += 1;
                }
            }
            row
        }).collect()
    }
}
