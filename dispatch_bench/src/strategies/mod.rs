//! 価格計算のディスパッチ戦略
//!
//! 同じ価格式を異なる呼び出し機構で実装し、機構のコストだけを比較する

pub mod closed;
pub mod delegated;
pub mod fat_interface;
pub mod inspection;
pub mod monomorphized;
pub mod open;
pub mod static_cast;

pub use closed::ClosedDispatch;
pub use delegated::{Delegated, DelegatedDispatch, DelegatingRecord, RecordPricer};
pub use fat_interface::{FatInterfaceDispatch, KindPricer, OptionPricer, StockPricer};
pub use inspection::InspectionDispatch;
pub use monomorphized::{MonomorphizedDispatch, StaticPrice, StaticPricer};
pub use open::OpenDispatch;
pub use static_cast::StaticCastDispatch;

use crate::core::PricingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 実行時に選択可能な戦略の種類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Open,
    Closed,
    Monomorphized,
    Inspection,
    StaticCast,
    FatInterface,
    Delegated,
}

impl StrategyKind {
    /// 全戦略（レポートの表示順）
    pub const ALL: [StrategyKind; 7] = [
        Self::Open,
        Self::Closed,
        Self::Monomorphized,
        Self::Inspection,
        Self::StaticCast,
        Self::FatInterface,
        Self::Delegated,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => OpenDispatch::NAME,
            Self::Closed => ClosedDispatch::NAME,
            Self::Monomorphized => MonomorphizedDispatch::NAME,
            Self::Inspection => InspectionDispatch::NAME,
            Self::StaticCast => StaticCastDispatch::NAME,
            Self::FatInterface => FatInterfaceDispatch::NAME,
            Self::Delegated => DelegatedDispatch::NAME,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Open => OpenDispatch::DESCRIPTION,
            Self::Closed => ClosedDispatch::DESCRIPTION,
            Self::Monomorphized => MonomorphizedDispatch::DESCRIPTION,
            Self::Inspection => InspectionDispatch::DESCRIPTION,
            Self::StaticCast => StaticCastDispatch::DESCRIPTION,
            Self::FatInterface => FatInterfaceDispatch::DESCRIPTION,
            Self::Delegated => DelegatedDispatch::DESCRIPTION,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("Unknown strategy: {s}"))
    }
}
