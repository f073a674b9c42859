// ==========================================
// 工位排班基础数据 - 人员领域模型
// ==========================================
// 职责: 人员、人员工作站设定
// 序列化: camelCase，与浏览器端导出的设定档格式一致
// ==========================================

use crate::domain::types::Preference;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 人员对各工作站的设定（key = 工作站ID，保持插入顺序）
pub type StationSettings = IndexMap<String, StationSetting>;

// ==========================================
// StationSetting - 单个工作站设定
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StationSetting {
    #[serde(default)]
    pub ability: bool, // 是否具备工作能力
    #[serde(default)]
    pub preference: Preference, // 偏好程度
}

impl StationSetting {
    pub fn new(ability: bool, preference: Preference) -> Self {
        Self {
            ability,
            preference,
        }
    }
}

// ==========================================
// Person - 人员
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub station_settings: StationSettings,
    #[serde(default)]
    pub on_leave: bool, // 休假中
}

impl Person {
    /// 创建新人员（空设定、非休假）
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            station_settings: StationSettings::new(),
            on_leave: false,
        }
    }

    /// 查询对某工作站的设定
    pub fn setting_for(&self, station_id: &str) -> Option<&StationSetting> {
        self.station_settings.get(station_id)
    }

    /// 是否能胜任某工作站
    pub fn can_work(&self, station_id: &str) -> bool {
        self.setting_for(station_id)
            .map(|s| s.ability)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_json_shape() {
        let mut person = Person::new("p1".to_string(), "王小明".to_string());
        person
            .station_settings
            .insert("s1".to_string(), StationSetting::new(true, Preference::High));

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["onLeave"], false);
        assert_eq!(value["stationSettings"]["s1"]["ability"], true);
        assert_eq!(value["stationSettings"]["s1"]["preference"], "high");
    }

    #[test]
    fn test_person_missing_optional_fields() {
        // 旧版设定档可能没有 onLeave 字段
        let person: Person = serde_json::from_str(r#"{"id":"1","name":"A"}"#).unwrap();
        assert!(!person.on_leave);
        assert!(person.station_settings.is_empty());
        assert!(!person.can_work("s1"));
    }
}
