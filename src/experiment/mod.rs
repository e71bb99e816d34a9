use std::error::Error;
use std::fmt;
use super::io::ReadOptions;
use super::vocab::VocabOptions;

pub mod init;
pub mod iris;
pub mod spam;
pub mod export;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperimentKind {
	Iris,
	Spam,
	Export,
}

pub struct Experiment {
	pub kind: ExperimentKind,
	pub callable: fn(&Context) -> Result<(), Box<dyn Error>>,
}

/* where the data lives and how to parse it */
pub struct Data {
	pub url: Option<String>,
	pub path: String,
	pub read: ReadOptions,
	pub positive_label: String,
}

pub struct SplitSettings {
	pub test_size: f64,
	pub seed: usize,
}

pub struct BucketSettings {
	pub num_buckets: Vec<usize>,
}

pub struct ExportSettings {
	pub output: String,
	pub limit: usize,
	pub delimiter: u8,
}

pub struct Context {
	pub experiment: Experiment,
	pub data: Data,
	pub split: SplitSettings,
	pub bucketize: BucketSettings,
	pub vocab: VocabOptions,
	pub export: ExportSettings,
}

pub fn run( cfg_file : String ) -> Result<(), Box<dyn Error>> {

	let ctx = init::runtime_context( &cfg_file )?;

	tracing::info!("runtime context initialized\n\n{}\n", &ctx);

	(ctx.experiment.callable)( &ctx )?;

	Ok(())
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "experiment:   {:?}", self.experiment.kind)?;
		writeln!(f, "data.path:    {}", self.data.path)?;
		writeln!(f, "data.url:     {}", self.data.url.as_ref().map(String::as_str).unwrap_or("-"))?;
		writeln!(f, "data.label:   {} (positive: {})", self.data.read.label, self.data.positive_label)?;
		writeln!(f, "data.features: {}", self.data.read.features.join(","))?;
		writeln!(f, "split:        test_size={} seed={}", self.split.test_size, self.split.seed)?;
		writeln!(f, "bucketize:    {:?}", self.bucketize.num_buckets)?;
		write!(f, "vocab:        lowercase={} max_features={:?}", self.vocab.lowercase, self.vocab.max_features)
	}
}
