//! 種別タグによる分岐後のキャスト
//!
//! 仮想呼び出しで種別タグを取得し、タグが指す具象型へ1回だけ
//! ダウンキャストする。型の総当たり検査は行わない。

use crate::core::{BenchError, BenchResult, PricingStrategy};
use crate::instruments::{
    option_price, stock_price, Dataset, Instrument, InstrumentKind, OptionContract, Stock,
};

/// タグ分岐 + キャストで価格を計算する戦略
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCastDispatch;

impl StaticCastDispatch {
    pub fn new() -> Self {
        Self
    }

    /// タグに対応する型へキャストして価格を計算
    ///
    /// タグと具象型が食い違う場合は `UnknownVariant`
    #[inline]
    pub fn cast_price(&self, instrument: &dyn Instrument) -> BenchResult<f64> {
        let any = instrument.as_any();

        let price = match instrument.kind() {
            InstrumentKind::Stock => any
                .downcast_ref::<Stock>()
                .map(|stock| stock_price(stock.price_factor, stock.common_factor())),
            InstrumentKind::Option => any
                .downcast_ref::<OptionContract>()
                .map(|option| option_price(option.volatility, option.common_factor())),
        };

        price.ok_or_else(|| BenchError::unknown_variant(Self::NAME, instrument.type_name()))
    }
}

impl PricingStrategy for StaticCastDispatch {
    type Item = Box<dyn Instrument>;

    const NAME: &'static str = "static-cast";
    const DESCRIPTION: &'static str =
        "Virtual kind-tag check, then a single cast to the tagged concrete type";

    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item> {
        dataset.to_instruments()
    }

    #[inline]
    fn price(&self, item: &Self::Item) -> BenchResult<f64> {
        self.cast_price(item.as_ref())
    }
}
