extern crate config;

use std::error::Error;
use serde::Deserialize;
use super::super::io::ReadOptions;
use super::super::vocab::VocabOptions;
use super::{Experiment, ExperimentKind, Context, Data, SplitSettings, BucketSettings, ExportSettings};

/* raw [split], [bucketize], [vocab] and [export] tables, checked below */
#[derive(Debug, Deserialize)]
struct SplitSection {
	test_size: f64,
	seed: i64,
}

#[derive(Debug, Default, Deserialize)]
struct BucketSection {
	#[serde(default)]
	num_buckets: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct VocabSection {
	lowercase: bool,
	max_features: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ExportSection {
	#[serde(default)]
	output: String,
	limit: i64,
	delimiter: String,
}

pub fn runtime_context(cfg_file: &String) -> Result<Context, Box<dyn Error>>  {

	let mut settings = config::Config::default();
	settings
		.set_default("data.delimiter", ",")?
		.set_default("data.has_headers", false)?
		.set_default("split.test_size", 0.2)?
		.set_default("split.seed", 42i64)?
		.set_default("vocab.lowercase", true)?
		.set_default("export.limit", 1000i64)?
		.set_default("export.delimiter", "\t")?;
	settings
		.merge(config::File::with_name(cfg_file.as_str()))?
		.merge(config::Environment::with_prefix("APP"))?;

	/* experiment settings */
	let name: String = settings.get_str("experiment.name")?;
	/* data settings */
	let path: String = settings.get_str("data.path")?;
	let url: Option<String> = optional(&settings, "data.url")?;
	let delimiter: String = settings.get_str("data.delimiter")?;
	let has_headers: bool = settings.get_bool("data.has_headers")?;
	let names: Vec<String> = optional(&settings, "data.names")?.unwrap_or_default();
	let label: String = settings.get_str("data.label")?;
	let features: Vec<String> = optional(&settings, "data.features")?.unwrap_or_default();
	let positive_label: String = optional(&settings, "data.positive_label")?.unwrap_or_default();
	/* split, bucketize, vocab and export sections */
	let split: SplitSection = settings.get("split")?;
	let bucketize: BucketSection = optional(&settings, "bucketize")?.unwrap_or_default();
	let vocab: VocabSection = settings.get("vocab")?;
	let export: ExportSection = settings.get("export")?;

	let experiment = parse_experiment_settings(&name)?;
	let read = ReadOptions {
		delimiter: parse_delimiter(&delimiter)?,
		has_headers: has_headers,
		names: names,
		label: label,
		features: features,
	};
	let data = Data { url: url, path: path, read: read, positive_label: positive_label };
	let split = parse_split_settings(split.test_size, split.seed)?;
	let bucketize = parse_bucket_settings(&bucketize.num_buckets)?;
	let vocab = parse_vocab_settings(vocab.lowercase, vocab.max_features)?;
	let export = ExportSettings {
		output: export.output,
		limit: parse_count(export.limit, "export.limit")?,
		delimiter: parse_delimiter(&export.delimiter)?,
	};

	validate(&experiment, &data, &bucketize, &export)?;

	tracing::info!("done parsing cfg");

	Ok(Context { experiment: experiment, data: data, split: split, bucketize: bucketize, vocab: vocab, export: export })
}

fn optional<'de, T: Deserialize<'de>>(settings: &config::Config, key: &'de str) -> Result<Option<T>, Box<dyn Error>> {

	match settings.get::<T>(key) {
		Ok(val) => Ok(Some(val)),
		Err(config::ConfigError::NotFound(_)) => Ok(None),
		Err(e) => Err(e.into()),
	}
}

fn parse_experiment_settings(name: &String) -> Result<Experiment, Box<dyn Error>> {

	let kind: ExperimentKind;
	let callable: fn(&Context) -> Result<(), Box<dyn Error>>;

	if name == "iris" {
		kind = ExperimentKind::Iris;
		callable = super::iris::run;
	} else if name == "spam" {
		kind = ExperimentKind::Spam;
		callable = super::spam::run;
	} else if name == "export" {
		kind = ExperimentKind::Export;
		callable = super::export::run;
	} else {
		return Err(format!("invalid or unimplemented experiment.name '{}'", name).into())
	}

	Ok(Experiment { kind: kind, callable: callable })
}

pub fn parse_delimiter(delimiter: &String) -> Result<u8, Box<dyn Error>> {

	match delimiter.as_str() {
		"tab" | "\\t" => Ok(b'\t'),
		d if d.len() == 1 => Ok(d.as_bytes()[0]),
		_ => Err(format!("delimiter must be a single byte, got '{}'", delimiter).into()),
	}
}

fn parse_count(val: i64, key: &str) -> Result<usize, Box<dyn Error>> {

	if val < 0 {
		return Err(format!("{} cannot be negative", key).into())
	}

	Ok(val as usize)
}

fn parse_split_settings(test_size: f64, seed: i64) -> Result<SplitSettings, Box<dyn Error>> {

	if !(test_size > 0.0 && test_size < 1.0) {
		return Err("split.test_size must be in (0, 1)".into())
	}

	Ok(SplitSettings { test_size: test_size, seed: parse_count(seed, "split.seed")? })
}

fn parse_bucket_settings(num_buckets: &Vec<i64>) -> Result<BucketSettings, Box<dyn Error>> {

	let mut counts = Vec::with_capacity(num_buckets.len());
	for &n in num_buckets.iter() {
		if n < 1 {
			return Err(format!("bucketize.num_buckets entries must be >= 1, got {}", n).into())
		}
		counts.push(n as usize);
	}

	Ok(BucketSettings { num_buckets: counts })
}

fn parse_vocab_settings(lowercase: bool, max_features: Option<i64>) -> Result<VocabOptions, Box<dyn Error>> {

	let max_features = match max_features {
		Some(n) if n < 1 => return Err("vocab.max_features must be >= 1".into()),
		Some(n) => Some(n as usize),
		None => None,
	};

	Ok(VocabOptions { lowercase: lowercase, max_features: max_features })
}

fn validate(experiment: &Experiment, data: &Data, bucketize: &BucketSettings, export: &ExportSettings) -> Result<(), Box<dyn Error>> {

	if !data.read.has_headers && data.read.names.is_empty() && experiment.kind != ExperimentKind::Export {
		return Err("data.names must be given when data.has_headers is false".into())
	}

	match experiment.kind {
		ExperimentKind::Iris => {
			if data.read.features.is_empty() {
				return Err("iris experiment needs data.features".into())
			}
			if bucketize.num_buckets.is_empty() {
				return Err("iris experiment needs bucketize.num_buckets".into())
			}
			if data.positive_label.is_empty() {
				return Err("iris experiment needs data.positive_label".into())
			}
		},
		ExperimentKind::Spam => {
			if data.read.features.len() != 1 {
				return Err("spam experiment needs exactly one text column in data.features".into())
			}
			if data.positive_label.is_empty() {
				return Err("spam experiment needs data.positive_label".into())
			}
		},
		ExperimentKind::Export => {
			if export.output.is_empty() {
				return Err("export experiment needs export.output".into())
			}
		},
	}

	Ok(())
}

#[cfg(test)]
mod tests {

	use super::*;
	use std::fs;

	#[test]
	fn parse_iris_cfg() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = dir.path().join("iris.toml");
		fs::write(&cfg, r#"
[experiment]
name = "iris"

[data]
path = "data/iris/iris.data"
names = ["sepal_len", "sepal_wid", "petal_len", "petal_wid", "species"]
label = "species"
features = ["sepal_len", "sepal_wid", "petal_len", "petal_wid"]
positive_label = "Iris-setosa"

[bucketize]
num_buckets = [1, 2, 3]
"#).unwrap();

		let ctx = runtime_context(&cfg.to_str().unwrap().to_string()).unwrap();
		assert_eq!(ctx.experiment.kind, ExperimentKind::Iris);
		assert_eq!(ctx.data.read.delimiter, b',');
		assert_eq!(ctx.data.read.features.len(), 4);
		assert!(ctx.data.url.is_none());
		assert_eq!(ctx.split.seed, 42);
		assert!((ctx.split.test_size - 0.2).abs() < 1e-12);
		assert_eq!(ctx.bucketize.num_buckets, vec![1, 2, 3]);
		/* untouched sections fall back to their defaults */
		assert!(ctx.vocab.lowercase);
		assert_eq!(ctx.vocab.max_features, None);
		assert_eq!(ctx.export.limit, 1000);
		assert_eq!(ctx.export.delimiter, b'\t');
		assert!(ctx.export.output.is_empty());
	}

	#[test]
	fn parse_sections() {
		let dir = tempfile::tempdir().unwrap();
		let cfg = dir.path().join("export.toml");
		fs::write(&cfg, r#"
[experiment]
name = "export"

[data]
path = "data/sms/sms.tsv"
label = "label"

[split]
seed = 7

[vocab]
lowercase = false
max_features = 50

[export]
output = "out.csv"
limit = 25
delimiter = ","
"#).unwrap();

		let ctx = runtime_context(&cfg.to_str().unwrap().to_string()).unwrap();
		assert_eq!(ctx.split.seed, 7);
		assert!((ctx.split.test_size - 0.2).abs() < 1e-12);
		assert!(ctx.bucketize.num_buckets.is_empty());
		assert!(!ctx.vocab.lowercase);
		assert_eq!(ctx.vocab.max_features, Some(50));
		assert_eq!(ctx.export.output, "out.csv");
		assert_eq!(ctx.export.limit, 25);
		assert_eq!(ctx.export.delimiter, b',');
	}

	#[test]
	fn reject_bad_cfg() {
		let dir = tempfile::tempdir().unwrap();

		let cfg = dir.path().join("unknown.toml");
		fs::write(&cfg, "[experiment]\nname = \"tagging\"\n[data]\npath = \"x\"\nlabel = \"y\"\nnames = [\"y\"]\n").unwrap();
		assert!(runtime_context(&cfg.to_str().unwrap().to_string()).is_err());

		let cfg = dir.path().join("zero.toml");
		fs::write(&cfg, r#"
[experiment]
name = "iris"
[data]
path = "x"
names = ["a", "y"]
label = "y"
features = ["a"]
positive_label = "p"
[bucketize]
num_buckets = [0]
"#).unwrap();
		assert!(runtime_context(&cfg.to_str().unwrap().to_string()).is_err());

		let cfg = dir.path().join("typed.toml");
		fs::write(&cfg, "[experiment]\nname = \"export\"\n[data]\npath = \"x\"\nlabel = \"y\"\n[export]\noutput = \"o\"\nlimit = \"many\"\n").unwrap();
		assert!(runtime_context(&cfg.to_str().unwrap().to_string()).is_err());

		let cfg = dir.path().join("features.toml");
		fs::write(&cfg, "[experiment]\nname = \"export\"\n[data]\npath = \"x\"\nlabel = \"y\"\n[export]\noutput = \"o\"\n[vocab]\nmax_features = 0\n").unwrap();
		assert!(runtime_context(&cfg.to_str().unwrap().to_string()).is_err());
	}

	#[test]
	fn delimiters() {
		assert_eq!(parse_delimiter(&String::from(",")).unwrap(), b',');
		assert_eq!(parse_delimiter(&String::from("\t")).unwrap(), b'\t');
		assert_eq!(parse_delimiter(&String::from("tab")).unwrap(), b'\t');
		assert!(parse_delimiter(&String::from(",,")).is_err());
	}
}
