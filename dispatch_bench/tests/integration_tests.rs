// 統合テストのエントリポイント

mod fixtures;
mod integration;
