use clap::Parser;

use shelf::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	shelf::run(args)
}
