// ==========================================
// 诊所医生排班系统 - 节假日初始化数据
// ==========================================
// 用法: seed_holidays [数据库路径]
// 写入 2025/2026 两年的法定节假日与调休安排，已存在的日期跳过
//
// 2025年: 节假日28天 + 调休5天
// 2026年: 节假日33天 + 调休6天
// ==========================================

use chrono::NaiveDate;
use std::error::Error;

use clinic_roster::config::get_default_db_path;
use clinic_roster::domain::types::HolidayKind;
use clinic_roster::repository::holiday_repo::HolidayRepository;
use clinic_roster::logging;

/// 种子行: (年, 月, 日, 名称, 类型, 是否系统预设)
///
/// is_system 标记官方公布的法定安排；诊所自行跟休的边缘日与调休日
/// 标记为用户记录，允许各诊所删改
type SeedRow = (i32, u32, u32, &'static str, HolidayKind, bool);

const HOLIDAYS_2025: &[SeedRow] = &[
    // 元旦假期
    (2025, 1, 1, "元旦", HolidayKind::Holiday, true),
    // 春节调休
    (2025, 1, 26, "春节调休", HolidayKind::MakeupWorkday, false),
    // 春节假期
    (2025, 1, 28, "春节", HolidayKind::Holiday, true),
    (2025, 1, 29, "春节", HolidayKind::Holiday, true),
    (2025, 1, 30, "春节", HolidayKind::Holiday, true),
    (2025, 1, 31, "春节", HolidayKind::Holiday, true),
    (2025, 2, 1, "春节", HolidayKind::Holiday, true),
    (2025, 2, 2, "春节", HolidayKind::Holiday, true),
    (2025, 2, 3, "春节", HolidayKind::Holiday, true),
    (2025, 2, 4, "春节", HolidayKind::Holiday, false),
    // 春节调休
    (2025, 2, 8, "春节调休", HolidayKind::MakeupWorkday, false),
    // 清明节假期
    (2025, 4, 4, "清明节", HolidayKind::Holiday, false),
    (2025, 4, 5, "清明节", HolidayKind::Holiday, true),
    (2025, 4, 6, "清明节", HolidayKind::Holiday, true),
    // 劳动节调休
    (2025, 4, 27, "劳动节调休", HolidayKind::MakeupWorkday, false),
    // 劳动节假期
    (2025, 5, 1, "劳动节", HolidayKind::Holiday, true),
    (2025, 5, 2, "劳动节", HolidayKind::Holiday, true),
    (2025, 5, 3, "劳动节", HolidayKind::Holiday, true),
    (2025, 5, 4, "劳动节", HolidayKind::Holiday, false),
    (2025, 5, 5, "劳动节", HolidayKind::Holiday, false),
    // 端午节假期
    (2025, 5, 31, "端午节", HolidayKind::Holiday, true),
    (2025, 6, 1, "端午节", HolidayKind::Holiday, true),
    (2025, 6, 2, "端午节", HolidayKind::Holiday, true),
    // 国庆节调休
    (2025, 9, 28, "国庆节调休", HolidayKind::MakeupWorkday, false),
    // 国庆节假期
    (2025, 10, 1, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 2, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 3, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 4, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 5, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 6, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 7, "国庆节", HolidayKind::Holiday, true),
    (2025, 10, 8, "国庆节", HolidayKind::Holiday, false),
    // 国庆节调休
    (2025, 10, 11, "国庆节调休", HolidayKind::MakeupWorkday, false),
];

const HOLIDAYS_2026: &[SeedRow] = &[
    // 元旦假期
    (2026, 1, 1, "元旦", HolidayKind::Holiday, true),
    (2026, 1, 2, "元旦", HolidayKind::Holiday, true),
    (2026, 1, 3, "元旦", HolidayKind::Holiday, true),
    // 元旦调休
    (2026, 1, 4, "元旦调休", HolidayKind::MakeupWorkday, false),
    // 春节调休
    (2026, 2, 14, "春节调休", HolidayKind::MakeupWorkday, false),
    // 春节假期
    (2026, 2, 15, "春节", HolidayKind::Holiday, true),
    (2026, 2, 16, "春节", HolidayKind::Holiday, true),
    (2026, 2, 17, "春节", HolidayKind::Holiday, true),
    (2026, 2, 18, "春节", HolidayKind::Holiday, true),
    (2026, 2, 19, "春节", HolidayKind::Holiday, true),
    (2026, 2, 20, "春节", HolidayKind::Holiday, true),
    (2026, 2, 21, "春节", HolidayKind::Holiday, true),
    (2026, 2, 22, "春节", HolidayKind::Holiday, true),
    (2026, 2, 23, "春节", HolidayKind::Holiday, true),
    // 春节调休
    (2026, 2, 28, "春节调休", HolidayKind::MakeupWorkday, false),
    // 清明节假期
    (2026, 4, 4, "清明节", HolidayKind::Holiday, true),
    (2026, 4, 5, "清明节", HolidayKind::Holiday, true),
    (2026, 4, 6, "清明节", HolidayKind::Holiday, true),
    // 劳动节假期
    (2026, 5, 1, "劳动节", HolidayKind::Holiday, true),
    (2026, 5, 2, "劳动节", HolidayKind::Holiday, true),
    (2026, 5, 3, "劳动节", HolidayKind::Holiday, true),
    (2026, 5, 4, "劳动节", HolidayKind::Holiday, true),
    (2026, 5, 5, "劳动节", HolidayKind::Holiday, true),
    // 劳动节调休
    (2026, 5, 9, "劳动节调休", HolidayKind::MakeupWorkday, false),
    // 端午节假期
    (2026, 6, 19, "端午节", HolidayKind::Holiday, true),
    (2026, 6, 20, "端午节", HolidayKind::Holiday, true),
    (2026, 6, 21, "端午节", HolidayKind::Holiday, true),
    // 国庆节调休
    (2026, 9, 20, "国庆节调休", HolidayKind::MakeupWorkday, false),
    // 国庆节假期
    (2026, 9, 25, "国庆节", HolidayKind::Holiday, true),
    (2026, 9, 26, "国庆节", HolidayKind::Holiday, true),
    (2026, 9, 27, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 1, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 2, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 3, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 4, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 5, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 6, "国庆节", HolidayKind::Holiday, true),
    (2026, 10, 7, "国庆节", HolidayKind::Holiday, true),
    // 国庆节调休
    (2026, 10, 10, "国庆节调休", HolidayKind::MakeupWorkday, false),
];

fn seed_year(repo: &HolidayRepository, rows: &[SeedRow]) -> Result<usize, Box<dyn Error>> {
    let mut seeded = 0usize;
    for &(year, month, day, name, kind, is_system) in rows {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| format!("种子数据日期非法: {}-{}-{}", year, month, day))?;
        if repo.insert_if_absent(date, name, kind, is_system)? {
            tracing::info!("添加节假日: {} {} ({})", date, name, kind);
            seeded += 1;
        }
    }
    Ok(seeded)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let repo = HolidayRepository::new(&db_path)?;

    tracing::info!("正在初始化2025年节假日数据...");
    let seeded_2025 = seed_year(&repo, HOLIDAYS_2025)?;
    tracing::info!(
        "2025年完成，新增{}条，当前共{}条",
        seeded_2025,
        repo.count_by_year(2025)?
    );

    tracing::info!("正在初始化2026年节假日数据...");
    let seeded_2026 = seed_year(&repo, HOLIDAYS_2026)?;
    tracing::info!(
        "2026年完成，新增{}条，当前共{}条",
        seeded_2026,
        repo.count_by_year(2026)?
    );

    Ok(())
}
