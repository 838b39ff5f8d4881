use crate::strategies::StrategyKind;

/// 戦略ごとの表示行
pub fn strategy_listing() -> Vec<String> {
    StrategyKind::ALL
        .iter()
        .map(|kind| format!("{:<16} {}", kind.name(), kind.description()))
        .collect()
}

/// List available dispatch strategies
pub fn execute_list() {
    println!("📋 利用可能なディスパッチ戦略:");
    for line in strategy_listing() {
        println!("   {line}");
    }
}
