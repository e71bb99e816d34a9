use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tracing::Level;

/* formats the config crate can read, by extension */
const CFG_EXTENSIONS: [&str ; 6] = ["toml", "json", "yaml", "yml", "hjson", "ini"];

/* Initial command line arguments */
#[derive(Debug)]
pub struct Args {

	pub cfg_file: String,
	pub log_level: Level,
}

pub fn argparse(args: Vec<String>) -> Result<Args, Box<dyn Error>> {

	let mut cfg_file  = String::new();
	let mut log_level = Level::INFO;

	for arg in args[1..].iter() {

		let (key, val) = match arg.split('=').next_tuple() {
			Some(tup) => tup,
			None => return Err( format!("missing key=val fmt for arg: '{}'", &arg).into() ),
		};

		match key {
			"log" => match val.parse::<Level>() {
						Ok(level) => log_level = level,
						Err(_) => return Err( format!("cannot parse '{}' into a log level (trace|debug|info|warn|error)", &val).into() ),
					},

			"cfg" => cfg_file = parse_cfg_path(val)?,

			_ => return Err( format!("unrecognized cmd line arg: {}", &arg).into() ),
		}
	}

	if cfg_file.is_empty() {
		return Err( "cfg filepath must be specified".into() );
	}

	Ok(Args {
		cfg_file  : cfg_file,
		log_level : log_level,
	})
}

fn parse_cfg_path(val: &str) -> Result<String, Box<dyn Error>> {

	let path = Path::new(val);
	if !path.is_file() {
		return Err( format!("file path '{}' not found", val).into() );
	}

	match path.extension().and_then(|ext| ext.to_str()) {
		Some(ext) if CFG_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => Ok(String::from(val)),
		_ => Err( format!("cfg file '{}' must end in one of: {}", val, CFG_EXTENSIONS.join(", ")).into() ),
	}
}
