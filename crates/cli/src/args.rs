use clap::ValueEnum;
use stockroom_app::StockDirection;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
#[value(rename_all = "lower")]
pub enum StockDirectionArg {
    In,
    Out,
}

impl From<StockDirectionArg> for StockDirection {
    fn from(value: StockDirectionArg) -> Self {
        match value {
            StockDirectionArg::In => Self::In,
            StockDirectionArg::Out => Self::Out,
        }
    }
}
