use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::airport::{GateAssignment, GateStatus, GroundResource, ResourceStatus};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_resources() -> Vec<GroundResource> {
    vec![
        GroundResource {
            name: "Ground Crew".into(),
            available: 24,
            scheduled: 18,
            utilization: 75,
            status: ResourceStatus::Optimal,
        },
        GroundResource {
            name: "Baggage Handlers".into(),
            available: 16,
            scheduled: 12,
            utilization: 75,
            status: ResourceStatus::Optimal,
        },
        GroundResource {
            name: "Security Personnel".into(),
            available: 32,
            scheduled: 28,
            utilization: 88,
            status: ResourceStatus::High,
        },
        GroundResource {
            name: "Maintenance Staff".into(),
            available: 8,
            scheduled: 6,
            utilization: 75,
            status: ResourceStatus::Optimal,
        },
        GroundResource {
            name: "Fuel Trucks".into(),
            available: 6,
            scheduled: 4,
            utilization: 67,
            status: ResourceStatus::Normal,
        },
        GroundResource {
            name: "Ground Support Vehicles".into(),
            available: 12,
            scheduled: 8,
            utilization: 67,
            status: ResourceStatus::Normal,
        },
    ]
}

fn sample_gates() -> Vec<GateAssignment> {
    vec![
        GateAssignment {
            id: "A1".into(),
            aircraft: Some("UG001".into()),
            status: GateStatus::Occupied,
            scheduled_departure: Some("08:30".into()),
            passengers: 156,
        },
        GateAssignment {
            id: "A2".into(),
            aircraft: Some("UG002".into()),
            status: GateStatus::Boarding,
            scheduled_departure: Some("14:20".into()),
            passengers: 283,
        },
        GateAssignment {
            id: "A3".into(),
            aircraft: None,
            status: GateStatus::Available,
            scheduled_departure: None,
            passengers: 0,
        },
        GateAssignment {
            id: "B1".into(),
            aircraft: Some("UG003".into()),
            status: GateStatus::Maintenance,
            scheduled_departure: Some("16:45".into()),
            passengers: 68,
        },
        GateAssignment {
            id: "B2".into(),
            aircraft: None,
            status: GateStatus::Cleaning,
            scheduled_departure: None,
            passengers: 0,
        },
        GateAssignment {
            id: "B3".into(),
            aircraft: None,
            status: GateStatus::Available,
            scheduled_departure: None,
            passengers: 0,
        },
    ]
}

/// Ground resources and gate assignments.
#[component]
pub fn AirportManagement() -> impl IntoView {
    let resources = sample_resources();
    let gates = sample_gates();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Airport Resource Management"</h2>

            <div class="stat-grid">
                <StatCard label="Daily Operations" value="47" icon_name="building" tone=StatusTone::Info />
                <StatCard label="Staff Efficiency" value="87%" icon_name="users" tone=StatusTone::Positive />
                <StatCard label="Gates in Use" value="4 / 6" icon_name="map-pin" tone=StatusTone::Neutral />
                <StatCard label="Terminal Capacity" value="81%" icon_name="activity" tone=StatusTone::Caution />
            </div>

            <h3 class="panel__section-title">"Ground Resources"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Resource"</th>
                        <th>"Available"</th>
                        <th>"Scheduled"</th>
                        <th>"Utilization"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {resources
                        .into_iter()
                        .map(|res| {
                            view! {
                                <tr>
                                    <td>{res.name}</td>
                                    <td>{res.available}</td>
                                    <td>{res.scheduled}</td>
                                    <td>{format!("{}%", res.utilization)}</td>
                                    <td>
                                        <StatusBadge
                                            label=res.status.label()
                                            tone=res.status.tone()
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h3 class="panel__section-title">"Gate Assignments"</h3>
            <div class="card-grid">
                {gates
                    .into_iter()
                    .map(|gate| {
                        view! {
                            <div class="gate-card">
                                <div class="gate-card__head">
                                    <span class="gate-card__id">{format!("Gate {}", gate.id)}</span>
                                    <StatusBadge
                                        label=gate.status.label()
                                        tone=gate.status.tone()
                                    />
                                </div>
                                <div class="gate-card__flight">
                                    {gate.aircraft.unwrap_or_else(|| "—".to_string())}
                                </div>
                                <div class="gate-card__departure">
                                    {match gate.scheduled_departure {
                                        Some(dep) => format!("Departs {}", dep),
                                        None => "No departure scheduled".to_string(),
                                    }}
                                </div>
                                <div class="gate-card__passengers">
                                    {format!("{} passengers", gate.passengers)}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
