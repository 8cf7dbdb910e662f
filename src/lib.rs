pub mod agent;
pub mod board;
pub(crate) mod error;
pub mod options;
pub mod protocol;
pub mod strategy;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        board::*,
        error::{Error, Kind, Result},
        options::*,
        protocol::{Server, ServerOptions, StrategyKind},
        strategy::*,
    };
}
