//! Записи платформы: организация → центры → курсы/когорты → студенты и всё,
//! что к ним привязано.

pub mod common;

pub mod a001_organization {
    pub mod aggregate;
}
pub mod a002_center {
    pub mod aggregate;
}
pub mod a003_course {
    pub mod aggregate;
}
pub mod a004_cohort {
    pub mod aggregate;
}
pub mod a005_student {
    pub mod aggregate;
}
pub mod a006_enrollment {
    pub mod aggregate;
}
pub mod a007_enquiry {
    pub mod aggregate;
}
pub mod a008_feedback {
    pub mod aggregate;
}
pub mod a009_audit_log {
    pub mod aggregate;
}
