// ==========================================
// 诊所医生排班系统 - 日历查询入口
// ==========================================
// 用法: clinic-roster [年份] [数据库路径]
// 输出: 该年的合并预览（含来源）与逐条数据库记录，
//       相当于管理页的命令行替身
// ==========================================

use chrono::Datelike;

use clinic_roster::app::AppState;
use clinic_roster::config::{get_default_db_path, CalendarConfig};
use clinic_roster::{logging, APP_NAME, VERSION};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("{} - 节假日日历 v{}", APP_NAME, VERSION);

    let config = CalendarConfig::from_env();
    let year = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or_else(|| chrono::Local::now().year());
    let year = config.clamp_year(year);

    let db_path = std::env::args().nth(2).unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let state = AppState::new(db_path, config)?;

    println!("===== {}年 节假日预览（预定义/农历/数据库合并）=====", year);
    for (date, info) in state.holiday_api.preview_all(year) {
        println!(
            "{}  {:10} type={:8} source={}",
            date, info.name, info.kind, info.source
        );
    }

    println!();
    println!("===== {}年 数据库记录（排班判定唯一依据）=====", year);
    for view in state.holiday_api.list_holidays(year)? {
        let resolved = state
            .holiday_api
            .is_working_day(&view.date)
            .map(|working| if working { "工作日" } else { "休息日" })?;
        println!(
            "{}  {:10} type={:8} is_system={}  判定: {}",
            view.date, view.name, view.kind, view.is_system, resolved
        );
    }

    Ok(())
}
