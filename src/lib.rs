extern crate itertools;
use std::error::Error;

pub mod bucketizer;
pub mod classifier;
pub mod dataset;
pub mod experiment;
pub mod init;
pub mod io;
pub mod metrics;
pub mod split;
pub mod vocab;

pub fn run( args: init::Args ) -> Result<(), Box<dyn Error>> {

	experiment::run( args.cfg_file )?;

	Ok(())
}
