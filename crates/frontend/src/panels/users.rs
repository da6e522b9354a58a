use crate::shared::components::StatCard;
use contracts::domain::users::RoleGroup;
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_roles() -> Vec<RoleGroup> {
    vec![
        RoleGroup {
            role: "Air Traffic Controllers".into(),
            headcount: 24,
            description: "Tower and approach control, runway sequencing".into(),
            permissions: vec![
                "Flight Operations".into(),
                "ADS-B Tracking".into(),
                "Weather Systems".into(),
            ],
            location: "Control Tower".into(),
            shift_pattern: "24/7 Coverage".into(),
            certification: "ATC License".into(),
        },
        RoleGroup {
            role: "Airport Operations Staff".into(),
            headcount: 45,
            description: "Daily operations coordination, resource allocation".into(),
            permissions: vec![
                "Airport Management".into(),
                "Resource Tracking".into(),
                "Flight Information".into(),
            ],
            location: "Operations Center".into(),
            shift_pattern: "Day/Night Shifts".into(),
            certification: "Airport Operations Certificate".into(),
        },
        RoleGroup {
            role: "Maintenance Engineers".into(),
            headcount: 18,
            description: "Aircraft maintenance, predictive analytics, IoT monitoring".into(),
            permissions: vec![
                "Maintenance Systems".into(),
                "IoT Sensors".into(),
                "Predictive Analytics".into(),
                "Aircraft Status".into(),
            ],
            location: "Maintenance Hangar".into(),
            shift_pattern: "Scheduled Maintenance".into(),
            certification: "Aircraft Maintenance License".into(),
        },
        RoleGroup {
            role: "Security Personnel".into(),
            headcount: 32,
            description: "Passenger screening, biometric systems, threat assessment".into(),
            permissions: vec![
                "Biometric Systems".into(),
                "Passenger Screening".into(),
                "Security Alerts".into(),
                "Access Control".into(),
            ],
            location: "Security Checkpoints".into(),
            shift_pattern: "24/7 Coverage".into(),
            certification: "Aviation Security Training".into(),
        },
        RoleGroup {
            role: "Weather Specialists".into(),
            headcount: 8,
            description: "Monitor weather conditions, issue safety alerts".into(),
            permissions: vec![
                "Weather Systems".into(),
                "Safety Alerts".into(),
                "Flight Planning Support".into(),
            ],
            location: "Weather Station".into(),
            shift_pattern: "24/7 Coverage".into(),
            certification: "Meteorology Certification".into(),
        },
    ]
}

/// Staff role groups and their access grants. Display only, nothing here
/// enforces permissions.
#[component]
pub fn UserManagement() -> impl IntoView {
    let roles = sample_roles();
    let total: u32 = roles.iter().map(|r| r.headcount).sum();

    view! {
        <div class="panel">
            <h2 class="panel__title">"User & Access Management"</h2>

            <div class="stat-grid">
                <StatCard
                    label="Total Staff"
                    value=total.to_string()
                    icon_name="users"
                    tone=StatusTone::Info
                />
                <StatCard label="Role Groups" value="5" icon_name="user-check" tone=StatusTone::Neutral />
                <StatCard label="On Shift Now" value="61" icon_name="clock" tone=StatusTone::Positive />
                <StatCard label="Pending Reviews" value="3" icon_name="alert-circle" tone=StatusTone::Caution />
            </div>

            <div class="card-grid">
                {roles
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="role-card">
                                <div class="role-card__head">
                                    <span class="role-card__role">{group.role}</span>
                                    <span class="role-card__count">
                                        {format!("{} staff", group.headcount)}
                                    </span>
                                </div>
                                <p class="role-card__description">{group.description}</p>
                                <div class="role-card__permissions">
                                    {group
                                        .permissions
                                        .into_iter()
                                        .map(|p| view! { <span class="role-card__permission">{p}</span> })
                                        .collect_view()}
                                </div>
                                <dl class="role-card__facts">
                                    <dt>"Location"</dt>
                                    <dd>{group.location}</dd>
                                    <dt>"Shifts"</dt>
                                    <dd>{group.shift_pattern}</dd>
                                    <dt>"Certification"</dt>
                                    <dd>{group.certification}</dd>
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headcounts_sum() {
        let total: u32 = sample_roles().iter().map(|r| r.headcount).sum();
        assert_eq!(total, 127);
    }
}
