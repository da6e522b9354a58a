use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::passengers::{CheckpointStats, OccupancyLevel, ZoneLoad};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_checkpoints() -> Vec<CheckpointStats> {
    vec![
        CheckpointStats {
            checkpoint: "Check-in".into(),
            processed: 156,
            average_time: "2.3 min".into(),
            success_rate: "98%".into(),
        },
        CheckpointStats {
            checkpoint: "Security".into(),
            processed: 142,
            average_time: "4.1 min".into(),
            success_rate: "96%".into(),
        },
        CheckpointStats {
            checkpoint: "Immigration".into(),
            processed: 138,
            average_time: "1.8 min".into(),
            success_rate: "99%".into(),
        },
        CheckpointStats {
            checkpoint: "Boarding".into(),
            processed: 134,
            average_time: "1.2 min".into(),
            success_rate: "100%".into(),
        },
    ]
}

fn sample_zones() -> Vec<ZoneLoad> {
    vec![
        ZoneLoad {
            zone: "Terminal Entrance".into(),
            occupancy: 45,
            capacity: 200,
            level: OccupancyLevel::Normal,
        },
        ZoneLoad {
            zone: "Check-in Area".into(),
            occupancy: 89,
            capacity: 150,
            level: OccupancyLevel::Moderate,
        },
        ZoneLoad {
            zone: "Security Screening".into(),
            occupancy: 134,
            capacity: 180,
            level: OccupancyLevel::High,
        },
        ZoneLoad {
            zone: "Departure Lounge".into(),
            occupancy: 267,
            capacity: 400,
            level: OccupancyLevel::Normal,
        },
        ZoneLoad {
            zone: "Gate Areas".into(),
            occupancy: 156,
            capacity: 300,
            level: OccupancyLevel::Normal,
        },
        ZoneLoad {
            zone: "Baggage Claim".into(),
            occupancy: 78,
            capacity: 150,
            level: OccupancyLevel::Normal,
        },
    ]
}

/// Passenger flow: biometric checkpoint throughput and terminal zone loads.
#[component]
pub fn PassengerExperience() -> impl IntoView {
    let checkpoints = sample_checkpoints();
    let zones = sample_zones();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Passenger Experience & Biometric Systems"</h2>

            <div class="stat-grid">
                <StatCard label="Passengers Today" value="3,247" icon_name="users" tone=StatusTone::Info />
                <StatCard label="Biometric Success" value="98.2%" icon_name="fingerprint" tone=StatusTone::Positive />
                <StatCard label="Avg Processing" value="2.4 min" icon_name="clock" tone=StatusTone::Neutral />
                <StatCard label="Security Alerts" value="0" icon_name="shield" tone=StatusTone::Positive />
            </div>

            <h3 class="panel__section-title">"Checkpoint Throughput"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Checkpoint"</th>
                        <th>"Processed"</th>
                        <th>"Avg Time"</th>
                        <th>"Success Rate"</th>
                    </tr>
                </thead>
                <tbody>
                    {checkpoints
                        .into_iter()
                        .map(|cp| {
                            view! {
                                <tr>
                                    <td>{cp.checkpoint}</td>
                                    <td>{cp.processed}</td>
                                    <td>{cp.average_time}</td>
                                    <td>{cp.success_rate}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h3 class="panel__section-title">"Terminal Zone Load"</h3>
            <div class="zone-list">
                {zones
                    .into_iter()
                    .map(|zone| {
                        let percent = zone.percent();
                        view! {
                            <div class="zone-row">
                                <div class="zone-row__head">
                                    <span class="zone-row__name">{zone.zone.clone()}</span>
                                    <StatusBadge
                                        label=zone.level.label()
                                        tone=zone.level.tone()
                                    />
                                </div>
                                <div class="zone-row__meter">
                                    <div
                                        class=format!(
                                            "zone-row__fill zone-row__fill--{}",
                                            zone.level.tone().code(),
                                        )
                                        style=format!("width: {}%", percent)
                                    ></div>
                                </div>
                                <span class="zone-row__figures">
                                    {format!("{} / {}", zone.occupancy, zone.capacity)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
