use serde::{Deserialize, Serialize};

use super::pst::{WeightTable, POS_WEIGHT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

/// 評価関数の設定。同一インスタンス内では不変なので探索結果は再現可能。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// 位置重み項の係数
    pub positional_factor: i32,
    /// 石差項の係数
    pub disc_factor: i32,
    /// モビリティ項の係数
    pub mobility_factor: i32,
    /// 位置評価テーブル
    pub weights: WeightTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 基本探索深さ
    pub depth: u8,
    /// 空きマスがこの数以下なら終盤として深く読む
    pub endgame_threshold: u8,
    /// 終盤ブースト後の深さ上限
    pub endgame_max_depth: u8,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig {
                positional_factor: 4,
                disc_factor: 2,
                mobility_factor: 8,
                weights: POS_WEIGHT,
            },
            search: SearchConfig {
                depth: 3,
                endgame_threshold: 14,
                endgame_max_depth: 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let config = AIConfig::default();
        assert_eq!(config.evaluation.positional_factor, 4);
        assert_eq!(config.evaluation.disc_factor, 2);
        assert_eq!(config.evaluation.mobility_factor, 8);
        assert_eq!(config.evaluation.weights, POS_WEIGHT);
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.endgame_threshold, 14);
        assert_eq!(config.search.endgame_max_depth, 5);
    }

    #[test]
    fn config_json_round_trip() {
        let config = AIConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored: AIConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.evaluation.weights, config.evaluation.weights);
        assert_eq!(restored.search.depth, config.search.depth);
    }
}
