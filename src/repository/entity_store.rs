// ==========================================
// 工位排班基础数据 - 实体仓储 (内存)
// ==========================================
// 职责: 持有人员/产线/工作站三个集合，维护引用完整性
// 约束:
// - 工作站创建时必须引用已存在的产线
// - 删除产线级联删除其所有工作站
// - 各集合内ID唯一
// 说明: 查询均为线性扫描，规模为数十至数百个实体
// ==========================================

use std::sync::Arc;

use crate::domain::{Person, ProductionLine, Station, WorkplaceSnapshot};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::id_generator::{IdGenerator, UuidIdGenerator};

/// 生成器连续撞号时的重试上限
const MAX_ID_ATTEMPTS: usize = 16;

pub struct EntityStore {
    personnel: Vec<Person>,
    production_lines: Vec<ProductionLine>,
    stations: Vec<Station>,
    id_generator: Arc<dyn IdGenerator>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

impl std::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("personnel", &self.personnel.len())
            .field("production_lines", &self.production_lines.len())
            .field("stations", &self.stations.len())
            .finish()
    }
}

impl EntityStore {
    /// 创建空仓储
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            personnel: Vec::new(),
            production_lines: Vec::new(),
            stations: Vec::new(),
            id_generator,
        }
    }

    // ==========================================
    // 集合访问
    // ==========================================

    pub fn personnel(&self) -> &[Person] {
        &self.personnel
    }

    pub fn production_lines(&self) -> &[ProductionLine] {
        &self.production_lines
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.personnel.is_empty() && self.production_lines.is_empty() && self.stations.is_empty()
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn find_person(&self, id: &str) -> Option<&Person> {
        self.personnel.iter().find(|p| p.id == id)
    }

    pub fn find_person_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.personnel.iter_mut().find(|p| p.id == id)
    }

    pub fn find_line(&self, id: &str) -> Option<&ProductionLine> {
        self.production_lines.iter().find(|l| l.id == id)
    }

    pub fn find_line_mut(&mut self, id: &str) -> Option<&mut ProductionLine> {
        self.production_lines.iter_mut().find(|l| l.id == id)
    }

    pub fn find_station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn find_station_mut(&mut self, id: &str) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| s.id == id)
    }

    // ==========================================
    // 人员
    // ==========================================

    /// 新增人员（名称需已校验）
    pub fn insert_person(&mut self, name: String) -> Person {
        let id = self.fresh_id(|store, id| store.find_person(id).is_some());
        let person = Person::new(id, name);
        self.personnel.push(person.clone());
        person
    }

    /// 删除人员，不级联
    pub fn remove_person(&mut self, id: &str) -> Option<Person> {
        let index = self.personnel.iter().position(|p| p.id == id)?;
        Some(self.personnel.remove(index))
    }

    // ==========================================
    // 产线
    // ==========================================

    /// 新增空产线（名称需已校验）
    pub fn insert_line(&mut self, name: String) -> ProductionLine {
        let id = self.fresh_id(|store, id| store.find_line(id).is_some());
        let line = ProductionLine::new(id, name);
        self.production_lines.push(line.clone());
        line
    }

    /// 删除产线并级联删除所有 line_id 指向该产线的工作站
    ///
    /// # 返回
    /// - Some((产线, 被级联删除的工作站))
    /// - None: 产线不存在（集合不变）
    pub fn remove_line(&mut self, id: &str) -> Option<(ProductionLine, Vec<Station>)> {
        let index = self.production_lines.iter().position(|l| l.id == id)?;

        let (removed_stations, kept): (Vec<Station>, Vec<Station>) = std::mem::take(&mut self.stations)
            .into_iter()
            .partition(|s| s.line_id == id);
        self.stations = kept;

        let line = self.production_lines.remove(index);
        Some((line, removed_stations))
    }

    // ==========================================
    // 工作站
    // ==========================================

    /// 新增工作站并追加到所属产线序列
    ///
    /// # 错误
    /// - NotFound: line_id 不存在（两个集合均不变）
    pub fn insert_station(
        &mut self,
        line_id: &str,
        name: String,
        high_priority: bool,
        priority_assign: bool,
    ) -> RepositoryResult<Station> {
        if self.find_line(line_id).is_none() {
            return Err(RepositoryError::not_found("ProductionLine", line_id));
        }

        let id = self.fresh_id(|store, id| store.find_station(id).is_some());
        let station = Station::new(id, name, line_id.to_string(), high_priority, priority_assign);

        if let Some(line) = self.find_line_mut(line_id) {
            line.stations.push(station.id.clone());
        }
        self.stations.push(station.clone());
        Ok(station)
    }

    /// 删除工作站：先从所属产线序列移除（产线仍存在时），再从集合移除
    pub fn remove_station(&mut self, id: &str) -> Option<Station> {
        let index = self.stations.iter().position(|s| s.id == id)?;
        let station = self.stations.remove(index);

        if let Some(line) = self.find_line_mut(&station.line_id) {
            line.detach_station(id);
        }
        Some(station)
    }

    // ==========================================
    // 整体替换
    // ==========================================

    /// 用快照内容整体替换三个集合（不合并）
    pub fn replace_with(&mut self, snapshot: WorkplaceSnapshot) {
        self.personnel = snapshot.personnel;
        self.production_lines = snapshot.production_lines;
        self.stations = snapshot.stations;
    }

    /// 分配在目标集合内不冲突的ID
    fn fresh_id<F>(&self, taken: F) -> String
    where
        F: Fn(&Self, &str) -> bool,
    {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if !taken(self, &id) {
                return id;
            }
            tracing::debug!(id = %id, "生成的ID已被占用，重新生成");
        }

        // 生成器持续撞号（例如导入了同前缀的数据），退回 UUID
        loop {
            let id = UuidIdGenerator.next_id();
            if !taken(self, &id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::id_generator::SequentialIdGenerator;

    fn store() -> EntityStore {
        EntityStore::new(Arc::new(SequentialIdGenerator::new("id-")))
    }

    #[test]
    fn test_insert_station_unknown_line_rejected() {
        let mut store = store();
        store.insert_line("A线".to_string());

        let result = store.insert_station("missing", "焊接".to_string(), false, false);
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert!(store.stations().is_empty());
        assert!(store.production_lines()[0].stations.is_empty());
    }

    #[test]
    fn test_remove_line_cascades_only_its_stations() {
        let mut store = store();
        let a = store.insert_line("A线".to_string());
        let b = store.insert_line("B线".to_string());
        let s1 = store.insert_station(&a.id, "焊接".to_string(), false, false).unwrap();
        let s2 = store.insert_station(&b.id, "组装".to_string(), false, false).unwrap();
        let s3 = store.insert_station(&a.id, "检验".to_string(), false, false).unwrap();

        let (line, removed) = store.remove_line(&a.id).unwrap();
        assert_eq!(line.id, a.id);
        let removed_ids: Vec<_> = removed.iter().map(|s| s.id.clone()).collect();
        assert_eq!(removed_ids, vec![s1.id, s3.id]);

        assert_eq!(store.production_lines().len(), 1);
        assert_eq!(store.stations().len(), 1);
        assert_eq!(store.stations()[0].id, s2.id);
        assert!(store.remove_line(&a.id).is_none());
    }

    #[test]
    fn test_remove_station_with_missing_line() {
        let mut store = store();
        store.replace_with(WorkplaceSnapshot {
            personnel: vec![],
            production_lines: vec![],
            stations: vec![Station::new(
                "s1".to_string(),
                "孤立".to_string(),
                "gone".to_string(),
                false,
                false,
            )],
            version: None,
            saved_at: None,
        });

        assert!(store.remove_station("s1").is_some());
        assert!(store.stations().is_empty());
        assert!(store.remove_station("s1").is_none());
    }

    #[test]
    fn test_fresh_id_skips_taken_ids() {
        let mut store = store();
        // 导入的数据已占用 id-1、id-2
        store.replace_with(WorkplaceSnapshot {
            personnel: vec![
                Person::new("id-1".to_string(), "甲".to_string()),
                Person::new("id-2".to_string(), "乙".to_string()),
            ],
            production_lines: vec![],
            stations: vec![],
            version: None,
            saved_at: None,
        });

        let person = store.insert_person("丙".to_string());
        assert_eq!(person.id, "id-3");
    }

    #[test]
    fn test_ids_unique_per_collection_only() {
        let mut store = store();
        let person = store.insert_person("甲".to_string());
        let line = store.insert_line("A线".to_string());
        assert_ne!(person.id, line.id);
        assert!(store.find_person(&person.id).is_some());
        assert!(store.find_line(&line.id).is_some());
    }
}
