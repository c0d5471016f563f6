use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;
use synastry::aspects::{best_aspect, SynastryMatcher};
use synastry::chart::{AngleReading, Angles, Chart, ChartInput, Houses, PlanetEntry, PointReading};
use synastry::ephemeris::Body;
use synastry::western::HouseCusps;

fn chart(offset: f64) -> Chart {
    let cusps = HouseCusps::new(std::array::from_fn(|i| offset + i as f64 * 30.0));
    let planets: BTreeMap<Body, PlanetEntry> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, &body)| {
            let lon = offset + i as f64 * 37.0;
            (body, PlanetEntry::Reading(PointReading::new(lon, 1.0, &cusps)))
        })
        .collect();

    Chart {
        input: ChartInput {
            date: "2000-01-01".to_string(),
            time: "12:00".to_string(),
            place: "coords".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
        },
        utc: Utc.timestamp_opt(946_728_000, 0).unwrap(),
        julian_day: 2451545.0,
        houses: Houses::new('P', &cusps),
        angles: Angles {
            ascendant: AngleReading::from_longitude(offset),
            midheaven: AngleReading::from_longitude(offset + 270.0),
        },
        planets,
    }
}

fn bench_best_aspect(c: &mut Criterion) {
    c.bench_function("best_aspect", |b| {
        b.iter(|| best_aspect(black_box(118.5)))
    });
}

fn bench_score_synastry(c: &mut Criterion) {
    let matcher = SynastryMatcher::new();
    let chart_a = chart(12.0);
    let chart_b = chart(131.0);

    c.bench_function("score_synastry", |b| {
        b.iter(|| matcher.score(black_box(&chart_a), black_box(&chart_b)))
    });
}

criterion_group!(benches, bench_best_aspect, bench_score_synastry);
criterion_main!(benches);
