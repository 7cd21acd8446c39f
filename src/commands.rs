use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use hueedit::hues::{DEFAULT_MAX_HUES, HUE_GROUP_SIZE};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Inspects, merges and converts hue files",
after_help = "The color channels in the csv range from 0-31 (5 bit channels).")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long = "maxnum", global = true, default_value_t = DEFAULT_MAX_HUES,
	help = "The largest number of hue entries supported, rounded up to a multiple of 8. Remember hue id 0 is an entry!")]
	pub maxnum: usize,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct MergeArgs {
	#[arg(help = "The base hue file.")]
	pub base: PathBuf,
	#[arg(help = "The hue file with the additions.")]
	pub addition: PathBuf,
	#[arg(help = "The output file.")]
	pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExtractArgs {
	#[arg(help = "The hue file.")]
	pub input: PathBuf,
	#[arg(help = "The output csv file.")]
	pub output: PathBuf,

	#[arg(long, help = "Only extracts these hue ids. Format 1-5,9.")]
	pub ids: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct EmptyArgs {
	#[arg(help = "The hue file.")]
	pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CompareArgs {
	#[arg(help = "The hue file to compare against.")]
	pub input: PathBuf,
	#[arg(help = "The hue file whose unique entries are listed.")]
	pub compare: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CreateArgs {
	#[arg(help = "The output hue file.")]
	pub output: PathBuf,
	#[arg(help = "The csv file to read.")]
	pub input: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Merges the entries from the addition file into the base file and saves the result to the output file. \
	This does not preserve addition ids, entries go into blank entries or are appended to the end.")]
	Merge(MergeArgs),

	#[command(about = "Extracts the entries from a hue file to a csv text file.")]
	Extract(ExtractArgs),

	#[command(about = "Prints the hue ids that are empty.")]
	Empty(EmptyArgs),

	#[command(about = "Prints the hue ids that are in the second file but not present in the first.")]
	Compare(CompareArgs),

	#[command(about = "Creates a hue file from a csv file.")]
	Create(CreateArgs),
}

impl Cli {
	/// The configured maximum, rounded up to whole groups of 8 entries.
	pub(crate) fn max_hues(&self) -> usize {
		self.maxnum.next_multiple_of(HUE_GROUP_SIZE)
	}
}
