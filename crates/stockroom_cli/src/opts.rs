use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::StockDirectionArg;
use stock::part::PartCode;
use stockroom_app::{Event, StockDirection};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(bin_name = "stockroom")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    /// Start with an empty inventory instead of the sample parts
    #[arg(long)]
    pub(crate) empty: bool,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

// One line of shell input, tokenized like a shell would.
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Stockroom commands, one per line. Quote names and locations that contain spaces.")]
#[command(no_binary_name = true, disable_version_flag = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Error, Debug)]
pub enum ShellLineError {
    #[error("Error: Invalid quoting. cause: {0}")]
    Quoting(#[from] shell_words::ParseError),

    #[error("{0}")]
    Command(#[from] clap::Error),
}

impl ShellLine {
    pub(crate) fn parse_line(line: &str) -> Result<Command, ShellLineError> {
        let words = shell_words::split(line)?;
        let shell_line = ShellLine::try_parse_from(words)?;

        Ok(shell_line.command)
    }
}

#[derive(Subcommand, Debug, PartialEq)]
#[command(arg_required_else_help(true))]
pub(crate) enum Command {
    /// Add a part
    Add {
        /// Name of the part, e.g. 'Parafuso M8'
        #[arg(long, allow_hyphen_values = true)]
        name: String,

        /// Unique part code, e.g. '1001'
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,

        /// Initial quantity
        #[arg(long)]
        quantity: u32,

        /// Storage location, e.g. 'A1-01'
        #[arg(long, allow_hyphen_values = true)]
        location: String,
    },
    /// Remove a part
    Remove {
        /// Part code
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,

        /// Remove without asking for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Adjust the stock of a part
    Adjust {
        /// Part code
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,

        /// Direction, 'in' adds stock, 'out' removes stock
        #[arg(long)]
        direction: StockDirectionArg,

        /// Amount of stock to move
        #[arg(long)]
        amount: u32,
    },
    /// Record a stock-in
    StockIn {
        /// Part code
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,

        /// Amount received
        #[arg(long)]
        amount: u32,
    },
    /// Record a stock-out
    StockOut {
        /// Part code
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,

        /// Amount issued
        #[arg(long)]
        amount: u32,
    },
    /// Show a part
    Show {
        /// Part code
        #[arg(long, value_parser = clap::value_parser!(PartCode), value_name = "CODE")]
        code: PartCode,
    },
    /// List all parts
    List,
    /// End the session
    #[command(alias = "quit")]
    Exit,
}

#[derive(Error, Debug, PartialEq)]
pub enum EventError {
    #[error("Command has no event. command: {0}")]
    NoEvent(&'static str),
}

impl TryFrom<Command> for Event {
    type Error = EventError;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Add { name, code, quantity, location } =>
                Ok(Event::AddPart { name, code, quantity, location }),
            Command::Remove { code, .. } =>
                Ok(Event::RemovePart { code }),
            Command::Adjust { code, direction, amount } =>
                Ok(Event::AdjustStock { code, direction: direction.into(), amount }),
            Command::StockIn { code, amount } =>
                Ok(Event::AdjustStock { code, direction: StockDirection::In, amount }),
            Command::StockOut { code, amount } =>
                Ok(Event::AdjustStock { code, direction: StockDirection::Out, amount }),
            Command::Show { code } =>
                Ok(Event::SelectPart { code }),
            // re-rendering the view lists the parts
            Command::List =>
                Ok(Event::None),
            Command::Exit =>
                Err(EventError::NoEvent("exit")),
        }
    }
}
