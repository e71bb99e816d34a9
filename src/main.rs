extern crate featurebin;

use std::error::Error;
use std::env;

fn main() -> Result<(), Box<dyn Error>> {

	let args = featurebin::init::argparse( env::args().collect() )?;

	tracing_subscriber::fmt()
		.with_max_level(args.log_level)
		.init();

	featurebin::run( args )?;

    Ok(())
}
