use serde::{Deserialize, Serialize};

/// One staff role group with its access grants.
///
/// Purely descriptive: the dashboard displays role groups, it does not
/// enforce permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGroup {
    pub role: String,
    pub headcount: u32,
    pub description: String,
    pub permissions: Vec<String>,
    pub location: String,
    pub shift_pattern: String,
    pub certification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_group_carries_permissions() {
        let group = RoleGroup {
            role: "Air Traffic Controllers".into(),
            headcount: 24,
            description: "Tower and approach control".into(),
            permissions: vec!["Flight Operations".into(), "ADS-B Tracking".into()],
            location: "Control Tower".into(),
            shift_pattern: "24/7 Coverage".into(),
            certification: "ATC License".into(),
        };
        assert_eq!(group.permissions.len(), 2);
    }
}
