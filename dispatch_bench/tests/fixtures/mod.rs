// テストユーティリティとモック実装
// 統合テスト用の独自商品・戦略・出力先

pub mod mocks;

// 公開API
pub use mocks::*;
