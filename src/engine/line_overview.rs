// ==========================================
// 工位排班基础数据 - 产线总览
// ==========================================
// 职责: 产线及其工作站（按产线序列顺序解析）
// 规则: 序列中找不到的工作站ID（导入损坏数据）直接略过
// ==========================================

use serde::Serialize;

use crate::domain::{ProductionLine, Station};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOverview<'a> {
    pub line: &'a ProductionLine,
    pub stations: Vec<&'a Station>,
}

pub fn line_overview<'a>(lines: &'a [ProductionLine], stations: &'a [Station]) -> Vec<LineOverview<'a>> {
    lines
        .iter()
        .map(|line| LineOverview {
            line,
            stations: line
                .stations
                .iter()
                .filter_map(|id| stations.iter().find(|s| &s.id == id))
                .collect(),
        })
        .collect()
}

/// 工作站所属产线名称（产线不存在时返回 None）
pub fn line_name_of<'a>(station: &Station, lines: &'a [ProductionLine]) -> Option<&'a str> {
    lines
        .iter()
        .find(|l| l.id == station.line_id)
        .map(|l| l.name.as_str())
}
