//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::batch_students::{
    ActiveModel as BatchStudentActiveModel, Entity as BatchStudents, Model as BatchStudentModel,
};
pub use super::batches::{ActiveModel as BatchActiveModel, Entity as Batches, Model as BatchModel};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::payments::{
    ActiveModel as PaymentActiveModel, Entity as Payments, Model as PaymentModel,
};
pub use super::staff::{ActiveModel as StaffActiveModel, Entity as Staff, Model as StaffModel};
pub use super::standards::{
    ActiveModel as StandardActiveModel, Entity as Standards, Model as StandardModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
