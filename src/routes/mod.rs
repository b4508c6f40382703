pub mod announcements;

pub mod auth;

pub mod batches;

pub mod files;

pub mod frontend;

pub mod payments;

pub mod staff;

pub mod standards;

pub mod students;

pub mod subjects;

pub mod teachers;

pub use announcements::configure_announcements_routes;
pub use auth::configure_auth_routes;
pub use batches::configure_batches_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use payments::configure_payments_routes;
pub use staff::configure_staff_routes;
pub use standards::configure_standards_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use teachers::configure_teachers_routes;

use actix_web::web;

/// 注册全部 `/api` 路由，前端兜底路由需在其后单独注册
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_standards_routes)
        .configure(configure_subjects_routes)
        .configure(configure_teachers_routes)
        .configure(configure_staff_routes)
        .configure(configure_batches_routes)
        .configure(configure_students_routes)
        .configure(configure_announcements_routes)
        .configure(configure_payments_routes)
        .configure(configure_file_routes);
}
