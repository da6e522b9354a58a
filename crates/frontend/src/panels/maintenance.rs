use crate::shared::components::{StatCard, StatusBadge};
use chrono::NaiveDate;
use contracts::domain::maintenance::{Airframe, AirframeStatus, SensorLevel, SensorReading};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn sample_fleet() -> Vec<Airframe> {
    vec![
        Airframe {
            id: "5X-UGA".into(),
            model: "Boeing 737-800".into(),
            status: AirframeStatus::Active,
            last_inspection: date(2024, 1, 15),
            next_maintenance: date(2024, 2, 15),
            flight_hours: 4250,
            open_issues: 0,
        },
        Airframe {
            id: "5X-UGB".into(),
            model: "Airbus A330".into(),
            status: AirframeStatus::InMaintenance,
            last_inspection: date(2024, 1, 20),
            next_maintenance: date(2024, 1, 25),
            flight_hours: 8750,
            open_issues: 3,
        },
        Airframe {
            id: "5X-UGC".into(),
            model: "DHC-8-400".into(),
            status: AirframeStatus::Active,
            last_inspection: date(2024, 1, 18),
            next_maintenance: date(2024, 2, 18),
            flight_hours: 2100,
            open_issues: 1,
        },
    ]
}

fn sample_sensors() -> Vec<SensorReading> {
    vec![
        SensorReading {
            name: "Engine Temperature".into(),
            value: "425°C".into(),
            threshold: "450°C".into(),
            level: SensorLevel::Normal,
        },
        SensorReading {
            name: "Fuel Pressure".into(),
            value: "3.2 PSI".into(),
            threshold: "2.5 PSI".into(),
            level: SensorLevel::Normal,
        },
        SensorReading {
            name: "Hydraulic System".into(),
            value: "2800 PSI".into(),
            threshold: "3000 PSI".into(),
            level: SensorLevel::Warning,
        },
        SensorReading {
            name: "Landing Gear".into(),
            value: "Operational".into(),
            threshold: "N/A".into(),
            level: SensorLevel::Normal,
        },
        SensorReading {
            name: "Avionics Systems".into(),
            value: "98% Health".into(),
            threshold: "95%".into(),
            level: SensorLevel::Normal,
        },
        SensorReading {
            name: "Cabin Pressure".into(),
            value: "8000 ft".into(),
            threshold: "8500 ft".into(),
            level: SensorLevel::Normal,
        },
    ]
}

/// Fleet maintenance board: airframe status plus live IoT sensor readings.
#[component]
pub fn MaintenanceSystem() -> impl IntoView {
    let fleet = sample_fleet();
    let sensors = sample_sensors();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Predictive Maintenance System"</h2>

            <div class="stat-grid">
                <StatCard label="Fleet Availability" value="2 / 3" icon_name="plane" tone=StatusTone::Info />
                <StatCard label="Open Issues" value="4" icon_name="alert-circle" tone=StatusTone::Caution />
                <StatCard label="Sensors Nominal" value="5 / 6" icon_name="activity" tone=StatusTone::Positive />
                <StatCard label="Hours to Next Check" value="120" icon_name="clock" tone=StatusTone::Neutral />
            </div>

            <h3 class="panel__section-title">"Aircraft Status"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Tail"</th>
                        <th>"Model"</th>
                        <th>"Status"</th>
                        <th>"Last Inspection"</th>
                        <th>"Next Maintenance"</th>
                        <th>"Flight Hours"</th>
                        <th>"Issues"</th>
                    </tr>
                </thead>
                <tbody>
                    {fleet
                        .into_iter()
                        .map(|frame| {
                            view! {
                                <tr>
                                    <td class="data-table__id">{frame.id}</td>
                                    <td>{frame.model}</td>
                                    <td>
                                        <StatusBadge
                                            label=frame.status.label()
                                            tone=frame.status.tone()
                                        />
                                    </td>
                                    <td>{frame.last_inspection.format("%d %b %Y").to_string()}</td>
                                    <td>{frame.next_maintenance.format("%d %b %Y").to_string()}</td>
                                    <td>{frame.flight_hours}</td>
                                    <td>{frame.open_issues}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h3 class="panel__section-title">"IoT Sensor Readings"</h3>
            <div class="card-grid">
                {sensors
                    .into_iter()
                    .map(|sensor| {
                        view! {
                            <div class="sensor-card">
                                <div class="sensor-card__head">
                                    <span class="sensor-card__name">{sensor.name}</span>
                                    <StatusBadge
                                        label=sensor.level.label()
                                        tone=sensor.level.tone()
                                    />
                                </div>
                                <div class="sensor-card__value">{sensor.value}</div>
                                <div class="sensor-card__threshold">
                                    "Threshold: " {sensor.threshold}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
