// ==========================================
// 工位排班基础数据 - 人员工作站设定表单
// ==========================================
// 职责: 为某人员生成按产线分组的完整设定表单
// 规则:
// - 只包含至少有一个工作站的产线（按 line_id 从工作站集合筛选）
// - 尚未设定的工作站使用默认值 {ability: false, preference: normal}
// - 表单整体提交时即为该人员的完整设定（整体覆写语义）
// ==========================================

use serde::Serialize;

use crate::domain::{Person, ProductionLine, Station, StationSetting, StationSettings};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSettingField {
    pub station_id: String,
    pub station_name: String,
    pub setting: StationSetting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSettingGroup {
    pub line_id: String,
    pub line_name: String,
    pub fields: Vec<StationSettingField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsForm {
    pub person_id: String,
    pub person_name: String,
    pub groups: Vec<LineSettingGroup>,
}

impl SettingsForm {
    /// 将表单当前值收集为完整设定
    pub fn to_settings(&self) -> StationSettings {
        self.groups
            .iter()
            .flat_map(|g| g.fields.iter())
            .map(|f| (f.station_id.clone(), f.setting))
            .collect()
    }

    /// 修改表单中某工作站的值，返回是否找到该字段
    pub fn set_field(&mut self, station_id: &str, setting: StationSetting) -> bool {
        match self
            .groups
            .iter_mut()
            .flat_map(|g| g.fields.iter_mut())
            .find(|f| f.station_id == station_id)
        {
            Some(field) => {
                field.setting = setting;
                true
            }
            None => false,
        }
    }
}

pub fn settings_form(person: &Person, lines: &[ProductionLine], stations: &[Station]) -> SettingsForm {
    let groups = lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<StationSettingField> = stations
                .iter()
                .filter(|s| s.line_id == line.id)
                .map(|s| StationSettingField {
                    station_id: s.id.clone(),
                    station_name: s.name.clone(),
                    setting: person.setting_for(&s.id).copied().unwrap_or_default(),
                })
                .collect();

            if fields.is_empty() {
                None
            } else {
                Some(LineSettingGroup {
                    line_id: line.id.clone(),
                    line_name: line.name.clone(),
                    fields,
                })
            }
        })
        .collect();

    SettingsForm {
        person_id: person.id.clone(),
        person_name: person.name.clone(),
        groups,
    }
}
