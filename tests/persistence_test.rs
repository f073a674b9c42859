// ==========================================
// 持久化集成测试
// ==========================================
// 测试范围:
// 1. 导出 → 导入往返，实体集合一致
// 2. 格式错误的设定档导入中止，仓储与快照不变
// 3. SQLite 本地存储跨重启恢复
// 4. 损坏的本地快照：以空数据启动
// ==========================================


use test_helpers::*;
use workplace_setup::persistence::EXPORT_FILE_PREFIX;
use workplace_setup::repository::{KeyValueStore, SqliteKeyValueRepository};
use workplace_setup::{ApiError, LoadOutcome, Preference, StationSetting, StationSettings};

fn populate(api: &mut workplace_setup::WorkplaceApi) {
    let person = api.add_person("Ann").unwrap();
    let line = api.add_line("Line A").unwrap();
    let weld = api.add_station(&line.id, "Weld", true, false).unwrap();
    api.edit_station(&weld.id, "Weld", 3, true, false).unwrap();

    let mut settings = StationSettings::new();
    settings.insert(weld.id.clone(), StationSetting::new(true, Preference::High));
    api.set_person_station_settings(&person.id, settings).unwrap();
    api.toggle_leave(&person.id).unwrap();
}

// ==========================================
// 导入导出
// ==========================================

#[test]
fn test_导出再导入_集合一致() {
    let (_kv, mut source) = in_memory_api();
    populate(&mut source);

    let exported = source.export_snapshot().expect("导出失败");
    assert!(exported.file_name.starts_with(EXPORT_FILE_PREFIX));
    assert!(exported.file_name.ends_with(".json"));

    let json: serde_json::Value = serde_json::from_slice(&exported.bytes).unwrap();
    assert_eq!(json["version"], "1.0");

    let (kv, mut target) = in_memory_api();
    target.add_person("会被覆盖").unwrap();
    target.import_snapshot(&exported.bytes).expect("导入失败");

    assert_eq!(target.list_personnel(), source.list_personnel());
    assert_eq!(target.list_lines(), source.list_lines());
    assert_eq!(target.list_stations(), source.list_stations());

    // 导入后立即写入本地快照
    let saved = saved_snapshot(kv.as_ref()).unwrap();
    assert_eq!(saved["personnel"][0]["name"], "Ann");
}

#[test]
fn test_导入格式错误_仓储不变() {
    let (kv, mut api) = in_memory_api();
    populate(&mut api);
    let before_people = api.list_personnel().to_vec();
    let before_snapshot = saved_snapshot(kv.as_ref());

    let bad_inputs: [&[u8]; 4] = [
        b"not json",
        b"[1, 2, 3]",
        br#"{"personnel": [], "productionLines": []}"#,
        br#"{"personnel": null, "productionLines": [], "stations": []}"#,
    ];

    for bytes in bad_inputs {
        let result = api.import_snapshot(bytes);
        assert!(
            matches!(result, Err(ApiError::ImportError(_))),
            "应该拒绝: {}",
            String::from_utf8_lossy(bytes)
        );
        assert_eq!(api.list_personnel(), before_people.as_slice());
        assert_eq!(saved_snapshot(kv.as_ref()), before_snapshot);
    }
}

#[test]
fn test_导入旧版设定档_缺省字段() {
    let (_kv, mut api) = in_memory_api();
    let legacy = br#"{
        "personnel": [{"id": "p1", "name": "Bob"}],
        "productionLines": [{"id": "l1", "name": "A", "stations": ["s1"]}],
        "stations": [{"id": "s1", "name": "Weld", "lineId": "l1"}]
    }"#;

    api.import_snapshot(legacy).expect("导入失败");
    let person = &api.list_personnel()[0];
    assert!(!person.on_leave);
    assert!(person.station_settings.is_empty());

    let station = &api.list_stations()[0];
    assert!(!station.high_priority);
    assert!(!station.priority_assign);
    assert_eq!(station.order, None);
}

#[test]
fn test_导入设定档_版本号为数字() {
    let (_kv, mut api) = in_memory_api();
    let numbered = br#"{
        "personnel": [{"id": "p1", "name": "Bob"}],
        "productionLines": [],
        "stations": [],
        "version": 1,
        "savedAt": "2026-10-15T08:00:00.000Z"
    }"#;

    api.import_snapshot(numbered).expect("导入失败");
    assert_eq!(api.list_personnel().len(), 1);

    // 重新导出时写回当前版本号
    let exported: serde_json::Value =
        serde_json::from_slice(&api.export_snapshot().expect("导出失败").bytes).unwrap();
    assert_eq!(exported["version"], workplace_setup::domain::EXPORT_VERSION);
}

// ==========================================
// 本地存储恢复
// ==========================================

#[test]
fn test_sqlite_跨重启恢复() {
    let (_temp_file, db_path) = create_test_db().expect("无法创建测试数据库");

    let expected = {
        let mut api = sqlite_api(&db_path).unwrap();
        assert_eq!(api.restore(), LoadOutcome::Missing);
        populate(&mut api);
        (
            api.list_personnel().to_vec(),
            api.list_lines().to_vec(),
            api.list_stations().to_vec(),
        )
    };

    let mut reopened = sqlite_api(&db_path).unwrap();
    assert_eq!(
        reopened.restore(),
        LoadOutcome::Restored {
            personnel: 1,
            production_lines: 1,
            stations: 1,
        }
    );
    assert_eq!(reopened.list_personnel(), expected.0.as_slice());
    assert_eq!(reopened.list_lines(), expected.1.as_slice());
    assert_eq!(reopened.list_stations(), expected.2.as_slice());
}

#[test]
fn test_本地快照损坏_以空数据启动() {
    let (_temp_file, db_path) = create_test_db().expect("无法创建测试数据库");
    SqliteKeyValueRepository::new(&db_path)
        .unwrap()
        .set("workplaceSettings", r#"{"personnel": "oops"}"#)
        .unwrap();

    let mut api = sqlite_api(&db_path).unwrap();
    assert!(matches!(api.restore(), LoadOutcome::Failed(_)));
    assert!(api.store().is_empty());

    // 之后的修改正常保存，覆盖损坏的快照
    api.add_line("Line A").unwrap();
    let mut reopened = sqlite_api(&db_path).unwrap();
    assert!(matches!(reopened.restore(), LoadOutcome::Restored { .. }));
    assert_eq!(reopened.list_lines()[0].name, "Line A");
}
