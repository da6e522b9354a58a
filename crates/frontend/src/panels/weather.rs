use crate::shared::components::{StatCard, StatusBadge};
use contracts::domain::weather::{AlertState, RiskLevel, SafetyAlert, StationReport};
use contracts::enums::StatusTone;
use leptos::prelude::*;

fn sample_stations() -> Vec<StationReport> {
    vec![
        StationReport {
            location: "Entebbe Intl Airport".into(),
            temperature: "24°C".into(),
            wind: "12 km/h NE".into(),
            visibility: "10 km".into(),
            conditions: "Clear".into(),
            risk: RiskLevel::Low,
        },
        StationReport {
            location: "Kampala".into(),
            temperature: "26°C".into(),
            wind: "8 km/h E".into(),
            visibility: "8 km".into(),
            conditions: "Partly Cloudy".into(),
            risk: RiskLevel::Low,
        },
        StationReport {
            location: "Gulu Airport".into(),
            temperature: "28°C".into(),
            wind: "15 km/h SW".into(),
            visibility: "6 km".into(),
            conditions: "Thunderstorms".into(),
            risk: RiskLevel::High,
        },
        StationReport {
            location: "Kasese Airstrip".into(),
            temperature: "22°C".into(),
            wind: "20 km/h W".into(),
            visibility: "12 km".into(),
            conditions: "Windy".into(),
            risk: RiskLevel::Medium,
        },
    ]
}

fn sample_alerts() -> Vec<SafetyAlert> {
    vec![
        SafetyAlert {
            kind: "Weather".into(),
            severity: RiskLevel::High,
            location: "Gulu Airport".into(),
            message: "Severe thunderstorm approaching - recommend flight delays".into(),
            time: "14:35".into(),
            state: AlertState::Active,
        },
        SafetyAlert {
            kind: "Wind".into(),
            severity: RiskLevel::Medium,
            location: "Kasese Airstrip".into(),
            message: "Strong crosswinds detected - exercise caution during landing".into(),
            time: "13:20".into(),
            state: AlertState::Active,
        },
        SafetyAlert {
            kind: "Visibility".into(),
            severity: RiskLevel::Low,
            location: "Mbarara".into(),
            message: "Improved visibility conditions - operations resumed".into(),
            time: "12:45".into(),
            state: AlertState::Resolved,
        },
    ]
}

/// Station observations and active safety alerts.
#[component]
pub fn WeatherSafety() -> impl IntoView {
    let stations = sample_stations();
    let alerts = sample_alerts();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Weather & Safety Monitoring"</h2>

            <div class="stat-grid">
                <StatCard label="Stations Reporting" value="4" icon_name="cloud-rain" tone=StatusTone::Info />
                <StatCard label="Active Alerts" value="2" icon_name="alert-triangle" tone=StatusTone::Caution />
                <StatCard label="High-Risk Fields" value="1" icon_name="alert-circle" tone=StatusTone::Critical />
                <StatCard label="Visibility Floor" value="6 km" icon_name="map-pin" tone=StatusTone::Neutral />
            </div>

            <h3 class="panel__section-title">"Station Conditions"</h3>
            <div class="card-grid">
                {stations
                    .into_iter()
                    .map(|station| {
                        view! {
                            <div class="weather-card">
                                <div class="weather-card__head">
                                    <span class="weather-card__location">{station.location}</span>
                                    <StatusBadge
                                        label=station.risk.label()
                                        tone=station.risk.tone()
                                    />
                                </div>
                                <div class="weather-card__conditions">{station.conditions}</div>
                                <dl class="weather-card__facts">
                                    <dt>"Temp"</dt>
                                    <dd>{station.temperature}</dd>
                                    <dt>"Wind"</dt>
                                    <dd>{station.wind}</dd>
                                    <dt>"Visibility"</dt>
                                    <dd>{station.visibility}</dd>
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <h3 class="panel__section-title">"Safety Alerts"</h3>
            <div class="alert-list">
                {alerts
                    .into_iter()
                    .map(|alert| {
                        view! {
                            <div class=format!(
                                "alert-row alert-row--{}",
                                alert.severity.tone().code(),
                            )>
                                <div class="alert-row__head">
                                    <span class="alert-row__kind">{alert.kind}</span>
                                    <span class="alert-row__location">{alert.location}</span>
                                    <span class="alert-row__time">{alert.time}</span>
                                    <StatusBadge label=alert.state.label() tone=alert.state.tone() />
                                </div>
                                <p class="alert-row__message">{alert.message}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
