use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::MeasureRange;
use crate::data::model::SeriesOrder;
use crate::error::SeriesError;
use crate::pipeline::PlotConfig;

/// Plot one column of a `;`-delimited measurement file against its first column
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file; the first row is the header, column 0 the measure
    pub filename: PathBuf,

    /// Measure range START-END (START inclusive, END exclusive, either side may be empty)
    #[arg(short, long, value_name = "START-END", allow_hyphen_values = true)]
    pub measures: Option<String>,

    /// Column to plot against the measure
    #[arg(short, long, default_value = "measure")]
    pub parameter: String,

    /// Sort points by measure and keep only the last row for repeated measures
    #[arg(long)]
    pub dedup: bool,
}

impl TryFrom<Cli> for PlotConfig {
    type Error = SeriesError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let range = match cli.measures.as_deref() {
            Some(s) => s.parse::<MeasureRange>()?,
            None => MeasureRange::default(),
        };
        let order = if cli.dedup {
            SeriesOrder::SortedUnique
        } else {
            SeriesOrder::Input
        };
        Ok(PlotConfig {
            path: cli.filename,
            range,
            parameter: cli.parameter,
            order,
        })
    }
}
