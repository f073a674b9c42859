// ==========================================
// 工位排班基础数据 - 人员工作站能力摘要
// ==========================================
// 规则:
// - 按人员设定的顺序遍历，跳过已不存在的工作站
// - 只列出具备能力的工作站
// - 偏好非"一般"的工作站额外列为"特殊偏好"
// ==========================================

use serde::Serialize;

use crate::domain::{Person, Station};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StationSummary {
    /// 可工作站点名称
    pub enabled_stations: Vec<String>,
    /// 特殊偏好，格式 "名称(high)"
    pub preferences: Vec<String>,
}

impl StationSummary {
    pub fn has_ability(&self) -> bool {
        !self.enabled_stations.is_empty()
    }
}

pub fn station_summary(person: &Person, stations: &[Station]) -> StationSummary {
    let mut summary = StationSummary::default();

    for (station_id, setting) in &person.station_settings {
        let Some(station) = stations.iter().find(|s| &s.id == station_id) else {
            continue;
        };
        if !setting.ability {
            continue;
        }

        summary.enabled_stations.push(station.name.clone());
        if !setting.preference.is_normal() {
            summary
                .preferences
                .push(format!("{}({})", station.name, setting.preference));
        }
    }

    summary
}
