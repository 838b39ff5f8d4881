//! 価格計算対象の合成金融商品
//!
//! 株式とオプションの2種類のレコードと、トレイトオブジェクト経由で
//! 扱うための `Instrument` トレイトを提供

pub mod dataset;

pub use dataset::{generate, Dataset};

use std::any::Any;
use std::fmt;

/// 全商品共通の係数
pub const COMMON_FACTOR: f64 = 0.5;

/// 株式価格の乗数
pub const STOCK_MULTIPLIER: f64 = 1.1;

/// オプション価格の乗数
pub const OPTION_MULTIPLIER: f64 = 2.5;

/// ジェネレーターが使う株式の価格係数
pub const DEFAULT_PRICE_FACTOR: f64 = 1.2;

/// ジェネレーターが使うオプションのボラティリティ
pub const DEFAULT_VOLATILITY: f64 = 0.8;

/// 株式の価格式: `price_factor * 1.1 + common_factor`
#[inline]
pub fn stock_price(price_factor: f64, common_factor: f64) -> f64 {
    price_factor * STOCK_MULTIPLIER + common_factor
}

/// オプションの価格式: `volatility * 2.5 + common_factor`
#[inline]
pub fn option_price(volatility: f64, common_factor: f64) -> f64 {
    volatility * OPTION_MULTIPLIER + common_factor
}

/// レコードの種別タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    Stock,
    Option,
}

impl InstrumentKind {
    /// テーブル参照用のインデックス
    pub const fn index(self) -> usize {
        match self {
            Self::Stock => 0,
            Self::Option => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Option => "option",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 株式レコード
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stock {
    pub price_factor: f64,
}

impl Stock {
    pub const fn new(price_factor: f64) -> Self {
        Self { price_factor }
    }

    pub const fn common_factor(&self) -> f64 {
        COMMON_FACTOR
    }
}

/// オプションレコード
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    pub volatility: f64,
}

impl OptionContract {
    pub const fn new(volatility: f64) -> Self {
        Self { volatility }
    }

    pub const fn common_factor(&self) -> f64 {
        COMMON_FACTOR
    }
}

/// 株式またはオプションのタグ付き共用体
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Stock(Stock),
    Option(OptionContract),
}

impl Record {
    pub const fn stock(price_factor: f64) -> Self {
        Self::Stock(Stock::new(price_factor))
    }

    pub const fn option(volatility: f64) -> Self {
        Self::Option(OptionContract::new(volatility))
    }

    pub const fn kind(&self) -> InstrumentKind {
        match self {
            Self::Stock(_) => InstrumentKind::Stock,
            Self::Option(_) => InstrumentKind::Option,
        }
    }

    /// 網羅的なmatchによる価格計算（他の戦略の基準値）
    #[inline]
    pub fn price(&self) -> f64 {
        match self {
            Self::Stock(stock) => stock_price(stock.price_factor, stock.common_factor()),
            Self::Option(option) => option_price(option.volatility, option.common_factor()),
        }
    }

    /// ヒープ上のトレイトオブジェクトに変換
    pub fn to_instrument(&self) -> Box<dyn Instrument> {
        match *self {
            Self::Stock(stock) => Box::new(stock),
            Self::Option(option) => Box::new(option),
        }
    }
}

/// トレイトオブジェクトとして扱う商品
///
/// `price_factor` と `volatility` は全種別のフィールドを基底に並べた
/// ファットインターフェースで、該当しない種別では 0.0 を返す。
pub trait Instrument: fmt::Debug {
    /// 種別タグ
    fn kind(&self) -> InstrumentKind;

    /// 仮想呼び出しによる価格計算
    fn price(&self) -> f64;

    fn common_factor(&self) -> f64 {
        COMMON_FACTOR
    }

    fn price_factor(&self) -> f64 {
        0.0
    }

    fn volatility(&self) -> f64 {
        0.0
    }

    /// 実行時の型検査用
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Instrument for Stock {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Stock
    }

    #[inline]
    fn price(&self) -> f64 {
        stock_price(self.price_factor, Stock::common_factor(self))
    }

    fn price_factor(&self) -> f64 {
        self.price_factor
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Instrument for OptionContract {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Option
    }

    #[inline]
    fn price(&self) -> f64 {
        option_price(self.volatility, OptionContract::common_factor(self))
    }

    fn volatility(&self) -> f64 {
        self.volatility
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
