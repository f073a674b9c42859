// ==========================================
// 工位排班基础数据 - 排程结果投影
// ==========================================
// 职责: 将分配结果按产线名称分组，组内按工作站顺序排序
// 规则:
// - 分组顺序 = 产线名称首次出现的顺序
// - 组内稳定排序，station.order 升序，未设定视为 0
// - 顺序相同的分配保持原有相对顺序
// ==========================================

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{Assignment, ScheduleResult};

/// 产线名称 → 该产线的分配（已排序）
pub type LineGroups = IndexMap<String, Vec<Assignment>>;

/// 交给视图渲染的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub timestamp: String,
    pub groups: LineGroups,
}

impl ScheduleReport {
    pub fn total_assignments(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// 按产线分组并排序
pub fn group_by_line(assignments: Vec<Assignment>) -> LineGroups {
    let mut groups: LineGroups = IndexMap::new();
    for assignment in assignments {
        groups
            .entry(assignment.line.name.clone())
            .or_default()
            .push(assignment);
    }

    for group in groups.values_mut() {
        // sort_by_key 为稳定排序
        group.sort_by_key(|a| a.station.effective_order());
    }

    groups
}

/// 投影完整排程结果
pub fn project_result(result: ScheduleResult) -> ScheduleReport {
    ScheduleReport {
        timestamp: result.timestamp,
        groups: group_by_line(result.assignments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Person, ProductionLine, Station};

    fn assignment(person: &str, line: &str, order: Option<i32>) -> Assignment {
        let mut station = Station::new(
            format!("s-{}", person),
            format!("站-{}", person),
            format!("l-{}", line),
            false,
            false,
        );
        station.order = order;
        Assignment {
            person: Person::new(format!("p-{}", person), person.to_string()),
            station,
            line: ProductionLine::new(format!("l-{}", line), line.to_string()),
        }
    }

    fn names(group: &[Assignment]) -> Vec<&str> {
        group.iter().map(|a| a.person.name.as_str()).collect()
    }

    #[test]
    fn test_group_by_line_sorts_by_order() {
        let groups = group_by_line(vec![
            assignment("a", "L1", Some(2)),
            assignment("b", "L1", Some(1)),
            assignment("c", "L2", Some(0)),
        ]);

        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec!["L1".to_string(), "L2".to_string()]);
        assert_eq!(names(&groups["L1"]), vec!["b", "a"]);
        assert_eq!(names(&groups["L2"]), vec!["c"]);
    }

    #[test]
    fn test_missing_order_treated_as_zero_and_stable() {
        let groups = group_by_line(vec![
            assignment("a", "L1", Some(1)),
            assignment("b", "L1", None),
            assignment("c", "L1", Some(0)),
            assignment("d", "L1", Some(1)),
        ]);
        // b 与 c 同为 0，a 与 d 同为 1，均保持原相对顺序
        assert_eq!(names(&groups["L1"]), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_project_result_keeps_timestamp() {
        let report = project_result(ScheduleResult {
            timestamp: "2026-10-15T09:00:00".to_string(),
            assignments: vec![assignment("a", "L2", None), assignment("b", "L1", None)],
        });
        assert_eq!(report.timestamp, "2026-10-15T09:00:00");
        assert_eq!(report.total_assignments(), 2);
        // 分组顺序跟随首次出现
        assert_eq!(report.groups.get_index(0).map(|(k, _)| k.as_str()), Some("L2"));
    }

    #[test]
    fn test_empty_result() {
        assert!(group_by_line(vec![]).is_empty());
    }
}
