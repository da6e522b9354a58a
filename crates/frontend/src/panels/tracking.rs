//! ADS-B tracking panel.
//!
//! The feed is simulated: a 5-second interval swaps the local flight list
//! between canned snapshots. The interval is armed on mount and cleared on
//! unmount, so nothing keeps ticking after the panel is gone.

use crate::shared::components::{StatCard, StatusBadge};
use crate::shared::map_view::{MapMarker, MapView};
use crate::shared::timers::{clear_interval, set_interval};
use contracts::domain::tracking::{TrackPhase, TrackedFlight};
use contracts::enums::StatusTone;
use leptos::prelude::*;

const TRACK_REFRESH_MS: i32 = 5_000;
/// Viewport centered over the Entebbe control area.
const MAP_CENTER: (f64, f64) = (32.44, 0.45);
const MAP_ZOOM: f64 = 8.0;

fn snapshot(tick: usize) -> Vec<TrackedFlight> {
    if tick % 2 == 0 {
        vec![
            TrackedFlight {
                callsign: "UGA204".into(),
                longitude: 32.10,
                latitude: 0.90,
                heading: 118.0,
                altitude_ft: 34_000,
                ground_speed_kt: 447,
                phase: TrackPhase::EnRoute,
            },
            TrackedFlight {
                callsign: "UGA117".into(),
                longitude: 32.62,
                latitude: 0.18,
                heading: 212.0,
                altitude_ft: 4_200,
                ground_speed_kt: 180,
                phase: TrackPhase::Approach,
            },
            TrackedFlight {
                callsign: "UGA090".into(),
                longitude: 32.45,
                latitude: 0.05,
                heading: 0.0,
                altitude_ft: 0,
                ground_speed_kt: 12,
                phase: TrackPhase::OnGround,
            },
        ]
    } else {
        vec![
            TrackedFlight {
                callsign: "UGA204".into(),
                longitude: 32.31,
                latitude: 0.79,
                heading: 121.0,
                altitude_ft: 34_000,
                ground_speed_kt: 452,
                phase: TrackPhase::EnRoute,
            },
            TrackedFlight {
                callsign: "UGA117".into(),
                longitude: 32.54,
                latitude: 0.11,
                heading: 214.0,
                altitude_ft: 2_800,
                ground_speed_kt: 165,
                phase: TrackPhase::Approach,
            },
            TrackedFlight {
                callsign: "UGA090".into(),
                longitude: 32.45,
                latitude: 0.06,
                heading: 355.0,
                altitude_ft: 1_200,
                ground_speed_kt: 145,
                phase: TrackPhase::Climbing,
            },
        ]
    }
}

#[component]
pub fn AdsbTracking() -> impl IntoView {
    let flights = RwSignal::new(snapshot(0));
    let selected = RwSignal::new(None::<String>);
    let tick = StoredValue::new(0usize);

    let interval = set_interval(TRACK_REFRESH_MS, move || {
        let next = tick.get_value() + 1;
        tick.set_value(next);
        flights.set(snapshot(next));
    });
    on_cleanup(move || {
        if let Some(id) = interval {
            clear_interval(id);
        }
    });

    let markers = Signal::derive(move || {
        flights
            .get()
            .iter()
            .map(|flight| MapMarker {
                id: flight.callsign.clone(),
                longitude: flight.longitude,
                latitude: flight.latitude,
                heading: flight.heading,
                tone: flight.phase.tone(),
            })
            .collect::<Vec<_>>()
    });

    // Clicking a marker toggles the detail card for that callsign.
    let on_marker_click = Callback::new(move |callsign: String| {
        selected.update(|sel| {
            *sel = if sel.as_deref() == Some(callsign.as_str()) {
                None
            } else {
                Some(callsign)
            };
        });
    });

    view! {
        <div class="panel">
            <h2 class="panel__title">"ADS-B Flight Tracking"</h2>

            <div class="stat-grid">
                <StatCard label="Tracked Aircraft" value="3" icon_name="radar" tone=StatusTone::Info />
                <StatCard label="Receiver Coverage" value="98%" icon_name="activity" tone=StatusTone::Positive />
                <StatCard label="Ground Stations" value="12" icon_name="map-pin" tone=StatusTone::Neutral />
                <StatCard label="Update Interval" value="5 s" icon_name="clock" tone=StatusTone::Neutral />
            </div>

            <MapView center=MAP_CENTER zoom=MAP_ZOOM markers=markers on_marker_click=on_marker_click />

            {move || {
                selected
                    .get()
                    .and_then(|callsign| {
                        flights.get().into_iter().find(|f| f.callsign == callsign)
                    })
                    .map(|flight| {
                        view! {
                            <div class="track-detail">
                                <div class="track-detail__head">
                                    <span class="track-detail__callsign">
                                        {flight.callsign.clone()}
                                    </span>
                                    <StatusBadge
                                        label=flight.phase.label()
                                        tone=flight.phase.tone()
                                    />
                                </div>
                                <dl class="track-detail__facts">
                                    <dt>"Position"</dt>
                                    <dd>
                                        {format!("{:.2}, {:.2}", flight.latitude, flight.longitude)}
                                    </dd>
                                    <dt>"Altitude"</dt>
                                    <dd>{format!("{} ft", flight.altitude_ft)}</dd>
                                    <dt>"Ground Speed"</dt>
                                    <dd>{format!("{} kt", flight.ground_speed_kt)}</dd>
                                    <dt>"Heading"</dt>
                                    <dd>{format!("{:.0}°", flight.heading)}</dd>
                                </dl>
                            </div>
                        }
                    })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Callsign"</th>
                        <th>"Phase"</th>
                        <th>"Altitude"</th>
                        <th>"Speed"</th>
                        <th>"Heading"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        flights
                            .get()
                            .into_iter()
                            .map(|flight| {
                                let callsign = flight.callsign.clone();
                                view! {
                                    <tr
                                        class="data-table__row--clickable"
                                        on:click=move |_| on_marker_click.run(callsign.clone())
                                    >
                                        <td class="data-table__id">{flight.callsign}</td>
                                        <td>
                                            <StatusBadge
                                                label=flight.phase.label()
                                                tone=flight.phase.tone()
                                            />
                                        </td>
                                        <td>{format!("{} ft", flight.altitude_ft)}</td>
                                        <td>{format!("{} kt", flight.ground_speed_kt)}</td>
                                        <td>{format!("{:.0}°", flight.heading)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_alternate_but_track_the_same_flights() {
        let even = snapshot(0);
        let odd = snapshot(1);
        assert_ne!(even, odd);
        let even_calls: Vec<_> = even.iter().map(|f| f.callsign.clone()).collect();
        let odd_calls: Vec<_> = odd.iter().map(|f| f.callsign.clone()).collect();
        assert_eq!(even_calls, odd_calls);
        assert_eq!(snapshot(2), even);
    }
}
