// ==========================================
// 管理页预览 集成测试
// ==========================================
// 测试范围:
// 1. 三来源合并与权威顺序（预定义 < 农历 < 数据库）
// 2. 未知年份时农历来源为空贡献
// 3. 预览来源与排班判定的隔离（resolve 只认数据库）
// ==========================================

mod test_helpers;

use test_helpers::{d, ApiTestEnv};

use clinic_roster::domain::types::{HolidayKind, HolidaySource};

#[test]
fn test_preview_合并三来源() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.repo
        .insert_if_absent(d("2025-02-04"), "春节", HolidayKind::Holiday, false)
        .expect("预置失败");

    let preview = env.holiday_api.preview_all(2025);

    // 预定义固定节假日
    assert_eq!(preview["2025-01-01"].source, HolidaySource::Predefined);
    // 农历来源
    assert_eq!(preview["2025-01-29"].name, "春节");
    assert_eq!(preview["2025-01-29"].source, HolidaySource::Festival);
    // 数据库记录
    assert_eq!(preview["2025-02-04"].source, HolidaySource::Database);
}

#[test]
fn test_preview_数据库覆盖同日其他来源() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 10-01 同时在预定义表中；数据库记录应胜出
    env.repo
        .insert_if_absent(
            d("2025-10-01"),
            "国庆节（诊所调整）",
            HolidayKind::Holiday,
            false,
        )
        .expect("预置失败");

    let preview = env.holiday_api.preview_all(2025);
    let entry = &preview["2025-10-01"];
    assert_eq!(entry.name, "国庆节（诊所调整）");
    assert_eq!(entry.source, HolidaySource::Database);

    // 未被覆盖的同节日其他日期仍来自预定义
    assert_eq!(preview["2025-10-02"].source, HolidaySource::Predefined);
}

#[test]
fn test_preview_未知年份仅预定义() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 2030 年无农历数据也无数据库记录
    let preview = env.holiday_api.preview_all(2030);
    assert!(!preview.is_empty());
    assert!(preview
        .values()
        .all(|info| info.source == HolidaySource::Predefined));
}

#[test]
fn test_preview来源不参与排班判定() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let preview = env.holiday_api.preview_all(2025);
    // 预览里 10-01 是国庆节、1-29 是春节
    assert!(preview.contains_key("2025-10-01"));
    assert!(preview.contains_key("2025-01-29"));

    // 但数据库为空时 resolve 按周历默认: 两天都是周三 → 工作日
    assert!(env.holiday_api.resolve(d("2025-10-01")).is_working_day);
    assert!(env.holiday_api.resolve(d("2025-01-29")).is_working_day);
}

#[test]
fn test_preview_年份钳制() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 低于下限的请求按下限年返回
    let preview = env.holiday_api.preview_all(2020);
    assert!(preview.keys().all(|k| k.starts_with("2025")));
}
