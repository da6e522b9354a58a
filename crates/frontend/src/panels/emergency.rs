use crate::shared::components::{StatCard, StatusBadge};
use chrono::NaiveDate;
use contracts::domain::emergency::{ProcedureSheet, ReadinessSummary, ServiceContact, ServiceState};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn sample_contacts() -> Vec<ServiceContact> {
    vec![
        ServiceContact {
            service: "Fire & Rescue".into(),
            number: "+256-800-FIRE".into(),
            response_time: "2 min".into(),
            state: ServiceState::Ready,
        },
        ServiceContact {
            service: "Medical Emergency".into(),
            number: "+256-800-MEDICAL".into(),
            response_time: "3 min".into(),
            state: ServiceState::Ready,
        },
        ServiceContact {
            service: "Security".into(),
            number: "+256-800-SECURITY".into(),
            response_time: "1 min".into(),
            state: ServiceState::Active,
        },
        ServiceContact {
            service: "Air Traffic Control".into(),
            number: "+256-800-ATC".into(),
            response_time: "Immediate".into(),
            state: ServiceState::Active,
        },
        ServiceContact {
            service: "Airport Operations".into(),
            number: "+256-800-OPS".into(),
            response_time: "2 min".into(),
            state: ServiceState::Ready,
        },
        ServiceContact {
            service: "Uganda Police".into(),
            number: "999".into(),
            response_time: "5 min".into(),
            state: ServiceState::External,
        },
    ]
}

fn sample_procedures() -> Vec<ProcedureSheet> {
    vec![
        ProcedureSheet {
            category: "Aircraft Emergency".into(),
            steps: vec![
                "Immediately alert ATC and emergency services".into(),
                "Clear runway and taxiways of all traffic".into(),
                "Deploy fire and rescue equipment".into(),
                "Activate emergency medical services".into(),
                "Establish communication with aircraft crew".into(),
            ],
        },
        ProcedureSheet {
            category: "Medical Emergency".into(),
            steps: vec![
                "Contact medical emergency team immediately".into(),
                "Prepare ambulance and medical equipment".into(),
                "Coordinate with nearby hospitals".into(),
                "Clear access routes for emergency vehicles".into(),
            ],
        },
        ProcedureSheet {
            category: "Security Threat".into(),
            steps: vec![
                "Activate security alert protocols".into(),
                "Coordinate with Uganda Police and military".into(),
                "Implement passenger and baggage screening".into(),
                "Secure all access points to airport".into(),
                "Evacuate areas as necessary".into(),
            ],
        },
    ]
}

fn readiness() -> ReadinessSummary {
    ReadinessSummary {
        alert_level: "Normal".into(),
        active_incidents: 0,
        response_teams_ready: 4,
        last_drill: date(2024, 1, 15),
        next_drill: date(2024, 2, 15),
    }
}

/// Emergency contacts, procedures and readiness snapshot.
#[component]
pub fn EmergencyResponse() -> impl IntoView {
    let contacts = sample_contacts();
    let procedures = sample_procedures();
    let summary = readiness();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Emergency Response Center"</h2>

            <div class="stat-grid">
                <StatCard
                    label="Alert Level"
                    value=summary.alert_level.clone()
                    icon_name="shield"
                    tone=StatusTone::Positive
                />
                <StatCard
                    label="Active Incidents"
                    value=summary.active_incidents.to_string()
                    icon_name="alert-triangle"
                    tone=StatusTone::Positive
                />
                <StatCard
                    label="Teams Ready"
                    value=summary.response_teams_ready.to_string()
                    icon_name="users"
                    tone=StatusTone::Info
                />
                <StatCard
                    label="Next Drill"
                    value=summary.next_drill.format("%d %b").to_string()
                    icon_name="clock"
                    tone=StatusTone::Neutral
                />
            </div>

            <h3 class="panel__section-title">"Emergency Contacts"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Service"</th>
                        <th>"Number"</th>
                        <th>"Response Time"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {contacts
                        .into_iter()
                        .map(|contact| {
                            view! {
                                <tr>
                                    <td>{contact.service}</td>
                                    <td class="data-table__id">{contact.number}</td>
                                    <td>{contact.response_time}</td>
                                    <td>
                                        <StatusBadge
                                            label=contact.state.label()
                                            tone=contact.state.tone()
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h3 class="panel__section-title">"Response Procedures"</h3>
            <div class="card-grid">
                {procedures
                    .into_iter()
                    .map(|sheet| {
                        view! {
                            <div class="procedure-card">
                                <h4 class="procedure-card__category">{sheet.category}</h4>
                                <ol class="procedure-card__steps">
                                    {sheet
                                        .steps
                                        .into_iter()
                                        .map(|step| view! { <li>{step}</li> })
                                        .collect_view()}
                                </ol>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
