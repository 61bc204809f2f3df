pub mod combo;
pub mod game;
pub mod model;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "tienlen"
    }

    pub const fn codename() -> &'static str {
        "Thirteen"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "tienlen");
        assert_eq!(AppInfo::codename(), "Thirteen");
        assert!(!AppInfo::version().is_empty());
    }
}
