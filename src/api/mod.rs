// ==========================================
// 诊所医生排班系统 - API层
// ==========================================
// 职责: 面向管理界面的业务接口
// 约定: 校验/冲突/未找到属于预期业务结果，
//       以 {success, message} 负载返回，不作为未捕获异常穿透
// ==========================================

pub mod error;
pub mod holiday_api;

// 重导出
pub use error::{ApiError, ApiResult};
pub use holiday_api::{AddHolidayRequest, HolidayApi, HolidayView, OpResponse, RemoveHolidayRequest};
