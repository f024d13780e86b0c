//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`bookings`] - 预订管理接口 (生命周期操作)
//! - [`rooms`] - 客房管理接口
//! - [`room_types`] - 房型管理接口
//! - [`guests`] - 宾客管理接口
//! - [`payments`] - 支付确认回调 (外部协作方边界)

pub mod health;

pub mod bookings;
pub mod guests;
pub mod payments;
pub mod room_types;
pub mod rooms;
