//! 外部からの型検査によるディスパッチ
//!
//! 独立した価格計算器が `&dyn Any` へのダウンキャストでレコードの
//! 具象型を調べる。既知のどの型にも一致しなければ `UnknownVariant`。

use crate::core::{BenchError, BenchResult, PricingStrategy};
use crate::instruments::{option_price, stock_price, Dataset, Instrument, OptionContract, Stock};

/// 実行時型検査で価格を計算する戦略
#[derive(Debug, Default, Clone, Copy)]
pub struct InspectionDispatch;

impl InspectionDispatch {
    pub fn new() -> Self {
        Self
    }

    /// 具象型を順に検査して価格を計算
    #[inline]
    pub fn inspect(&self, instrument: &dyn Instrument) -> BenchResult<f64> {
        let any = instrument.as_any();

        if let Some(stock) = any.downcast_ref::<Stock>() {
            return Ok(stock_price(stock.price_factor, stock.common_factor()));
        }
        if let Some(option) = any.downcast_ref::<OptionContract>() {
            return Ok(option_price(option.volatility, option.common_factor()));
        }

        Err(BenchError::unknown_variant(Self::NAME, instrument.type_name()))
    }
}

impl PricingStrategy for InspectionDispatch {
    type Item = Box<dyn Instrument>;

    const NAME: &'static str = "inspection";
    const DESCRIPTION: &'static str =
        "Separate pricer downcasts each record through `dyn Any` (dynamic_cast equivalent)";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.to_instruments()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        self.inspect(item.as_ref())
    }
}
