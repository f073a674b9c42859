// ==========================================
// 工位排班基础数据 - 产线与工作站领域模型
// ==========================================
// 约束: Station.line_id 创建后不可变更
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductionLine - 产线
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    pub id: String,
    pub name: String,
    /// 工作站ID序列（插入顺序即显示顺序）
    #[serde(default)]
    pub stations: Vec<String>,
}

impl ProductionLine {
    /// 创建空产线
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            stations: Vec::new(),
        }
    }

    /// 从序列中移除工作站ID，返回是否有移除
    pub fn detach_station(&mut self, station_id: &str) -> bool {
        let before = self.stations.len();
        self.stations.retain(|id| id != station_id);
        self.stations.len() != before
    }
}

// ==========================================
// Station - 工作站
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    pub line_id: String,
    #[serde(default)]
    pub high_priority: bool, // 不受人数限制
    #[serde(default)]
    pub priority_assign: bool, // 人员不足时优先分配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>, // 显示/结果排序用
}

impl Station {
    pub fn new(
        id: String,
        name: String,
        line_id: String,
        high_priority: bool,
        priority_assign: bool,
    ) -> Self {
        Self {
            id,
            name,
            line_id,
            high_priority,
            priority_assign,
            order: None,
        }
    }

    /// 排序值（未设定视为 0）
    pub fn effective_order(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}
