// ==========================================
// 诊所医生排班系统 - 应用层
// ==========================================
// 职责: 组装仓储/引擎/API，供入口程序与上层界面使用
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
