// 合成データセットの生成

use super::{Instrument, Record, DEFAULT_PRICE_FACTOR, DEFAULT_VOLATILITY};

/// 固定長・読み取り専用のレコード列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// 株式とオプションを交互に `count` 件生成（株式が先頭）
    ///
    /// 乱数は使わないため、同じ `count` からは常に同じ列が得られる
    pub fn generate(count: usize) -> Self {
        let records = (0..count)
            .map(|i| {
                if i % 2 == 0 {
                    Record::stock(DEFAULT_PRICE_FACTOR)
                } else {
                    Record::option(DEFAULT_VOLATILITY)
                }
            })
            .collect();

        Self { records }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// レコードごとにヒープ確保したトレイトオブジェクト列
    pub fn to_instruments(&self) -> Vec<Box<dyn Instrument>> {
        self.records.iter().map(Record::to_instrument).collect()
    }

    /// 網羅的matchで計算した基準価格列
    pub fn reference_prices(&self) -> Vec<f64> {
        self.records.iter().map(Record::price).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `Dataset::generate` の便利関数
pub fn generate(count: usize) -> Dataset {
    Dataset::generate(count)
}
