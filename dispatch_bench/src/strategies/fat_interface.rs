//! ファットインターフェースによるディスパッチ
//!
//! 基底トレイトが全種別のフィールドアクセサを持ち、種別タグを
//! インデックスとして種別ごとの価格計算器テーブルを引く。
//! レコードから価格計算器への参照は保持しない。

use crate::core::{BenchResult, PricingStrategy};
use crate::instruments::{option_price, stock_price, Dataset, Instrument, InstrumentKind};

/// 種別ごとの価格計算器
pub trait KindPricer: Send + Sync {
    fn price(&self, instrument: &dyn Instrument) -> f64;
}

/// 株式用: `price_factor` アクセサのみ参照
#[derive(Debug, Default, Clone, Copy)]
pub struct StockPricer;

impl KindPricer for StockPricer {
    #[inline]
    fn price(&self, instrument: &dyn Instrument) -> f64 {
        stock_price(instrument.price_factor(), instrument.common_factor())
    }
}

/// オプション用: `volatility` アクセサのみ参照
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionPricer;

impl KindPricer for OptionPricer {
    #[inline]
    fn price(&self, instrument: &dyn Instrument) -> f64 {
        option_price(instrument.volatility(), instrument.common_factor())
    }
}

/// 種別タグで価格計算器テーブルを引く戦略
pub struct FatInterfaceDispatch {
    pricers: [Box<dyn KindPricer>; 2],
}

impl FatInterfaceDispatch {
    pub fn new() -> Self {
        // 並びは InstrumentKind::index に従う
        let pricers: [Box<dyn KindPricer>; 2] = [Box::new(StockPricer), Box::new(OptionPricer)];
        Self { pricers }
    }

    fn pricer_for(&self, kind: InstrumentKind) -> &dyn KindPricer {
        self.pricers[kind.index()].as_ref()
    }
}

impl Default for FatInterfaceDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FatInterfaceDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FatInterfaceDispatch")
            .field("pricers", &self.pricers.len())
            .finish()
    }
}

impl PricingStrategy for FatInterfaceDispatch {
    type Item = Box<dyn Instrument>;

    const NAME: &'static str = "fat-interface";
    const DESCRIPTION: &'static str =
        "Base trait exposes every variant's fields; per-kind pricer looked up by tag";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.to_instruments()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        Ok(self.pricer_for(item.kind()).price(item.as_ref()))
    }
}
