//! Страницы сущностей: список каждой записи платформы с её фильтрами.

pub mod a001_organization {
    pub mod ui {
        pub mod list;
    }
}
pub mod a002_center {
    pub mod ui {
        pub mod list;
    }
}
pub mod a003_course {
    pub mod ui {
        pub mod list;
    }
}
pub mod a004_cohort {
    pub mod ui {
        pub mod list;
    }
}
pub mod a005_student {
    pub mod ui {
        pub mod list;
    }
}
pub mod a006_enrollment {
    pub mod ui {
        pub mod list;
    }
}
pub mod a007_enquiry {
    pub mod ui {
        pub mod list;
    }
}
pub mod a008_feedback {
    pub mod ui {
        pub mod list;
    }
}
pub mod a009_audit_log {
    pub mod ui {
        pub mod list;
    }
}
